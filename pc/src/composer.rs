//! Document composition

use tracing::info;

use crate::error::Result;
use crate::resolver::Resolver;
use crate::specifier::TopicSpecifier;
use crate::store::FragmentStore;

/// Parses, resolves and joins topic specifiers into one document
#[derive(Debug, Clone)]
pub struct Composer<S> {
    resolver: Resolver<S>,
    separator: String,
}

impl<S: FragmentStore> Composer<S> {
    pub fn new(resolver: Resolver<S>, separator: impl Into<String>) -> Self {
        Self {
            resolver,
            separator: separator.into(),
        }
    }

    /// Compose a document from raw command-line tokens
    ///
    /// All tokens are parsed before any fragment is looked up, and nothing is
    /// returned unless every fragment resolves.
    pub fn compose<T: AsRef<str>>(&self, tokens: &[T]) -> Result<String> {
        let specs = TopicSpecifier::parse_all(tokens)?;
        self.compose_specs(&specs)
    }

    /// Compose a document from already-parsed specifiers
    pub fn compose_specs(&self, specs: &[TopicSpecifier]) -> Result<String> {
        let bodies = self.resolver.resolve_all(specs)?;
        info!(topics = specs.len(), fragments = bodies.len(), "Composed document");
        Ok(self.join(&bodies))
    }

    /// Join fragment bodies with the separator
    pub fn join(&self, bodies: &[String]) -> String {
        bodies.join(&self.separator)
    }
}
