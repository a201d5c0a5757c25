//! PromptCat - compose prompts from reusable text fragments
//!
//! Fragments are plain text files grouped into categories. A topic specifier
//! such as `sql/schema-design+indexing` names one category and the fragments
//! to pull from it; the composed document is every requested fragment body,
//! in request order, joined by a separator.
//!
//! # Architecture
//!
//! ```text
//! topics/
//! └── {category}/
//!     ├── schema-design.md
//!     ├── indexing.md
//!     └── ...
//! ```
//!
//! # Example
//!
//! ```ignore
//! use promptcat::{Composer, DirectoryStore, Resolver};
//!
//! let store = DirectoryStore::new("topics", "md");
//! let composer = Composer::new(Resolver::new(store), "\\n");
//! let doc = composer.compose(&["sql/schema-design+indexing".to_string()])?;
//! ```

pub mod cli;
pub mod composer;
pub mod config;
pub mod error;
pub mod resolver;
pub mod specifier;
pub mod store;

pub use composer::Composer;
pub use error::{ComposeError, Result};
pub use resolver::Resolver;
pub use specifier::TopicSpecifier;
pub use store::{DirectoryStore, FragmentStore, MemoryStore};

/// Default fragment file extension
pub const DEFAULT_EXTENSION: &str = "md";

/// Default separator between fragment bodies: a backslash followed by `n`,
/// not a line break
pub const DEFAULT_SEPARATOR: &str = "\\n";

/// Name of the fragment directory installed next to the binary
pub const TOPICS_DIR: &str = "topics";
