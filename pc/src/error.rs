//! Composition error types

use std::path::PathBuf;
use thiserror::Error;

/// Result alias for library operations
pub type Result<T> = std::result::Result<T, ComposeError>;

/// Errors that abort a composition run
#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("Malformed topic specifier '{token}': expected category/fragment[+fragment...]")]
    MalformedSpecifier { token: String },

    #[error("Category not found: {category}")]
    CategoryNotFound { category: String },

    #[error("Fragment '{fragment}' not found in category '{category}'. Available: {}", format_available(.available))]
    FragmentNotFound {
        category: String,
        fragment: String,
        available: Vec<String>,
    },

    #[error("Failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn format_available(available: &[String]) -> String {
    if available.is_empty() {
        "(none)".to_string()
    } else {
        available.join(", ")
    }
}
