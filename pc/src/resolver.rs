//! Fragment resolution
//!
//! Maps a [`TopicSpecifier`] to the text of each fragment it names, in order.

use tracing::{debug, info};

use crate::error::{ComposeError, Result};
use crate::specifier::TopicSpecifier;
use crate::store::FragmentStore;

/// Resolves specifiers against a fragment store
#[derive(Debug, Clone)]
pub struct Resolver<S> {
    store: S,
}

impl<S: FragmentStore> Resolver<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Resolve one specifier to its fragment bodies
    ///
    /// The category is checked on every call, never cached. A missing fragment
    /// fails with the full list of fragments the category does have.
    pub fn resolve(&self, spec: &TopicSpecifier) -> Result<Vec<String>> {
        if !self.store.has_category(&spec.category) {
            return Err(ComposeError::CategoryNotFound {
                category: spec.category.clone(),
            });
        }

        let mut bodies = Vec::with_capacity(spec.fragments.len());
        for fragment in &spec.fragments {
            match self.store.get(&spec.category, fragment)? {
                Some(text) => {
                    debug!(category = %spec.category, %fragment, "Resolved fragment");
                    bodies.push(text);
                }
                None => {
                    return Err(ComposeError::FragmentNotFound {
                        category: spec.category.clone(),
                        fragment: fragment.clone(),
                        available: self.store.fragments(&spec.category)?,
                    });
                }
            }
        }

        info!(category = %spec.category, count = bodies.len(), "Resolved topic");
        Ok(bodies)
    }

    /// Resolve every specifier and flatten the bodies, preserving order
    pub fn resolve_all(&self, specs: &[TopicSpecifier]) -> Result<Vec<String>> {
        let mut bodies = Vec::new();
        for spec in specs {
            bodies.extend(self.resolve(spec)?);
        }
        Ok(bodies)
    }
}
