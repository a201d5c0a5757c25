//! Topic specifier parsing
//!
//! A specifier has the form `category/fragment1+fragment2+...`. Only the first
//! `/` separates the category; everything after it is the fragment list.

use tracing::debug;

use crate::error::{ComposeError, Result};

/// A parsed topic specifier: one category and its ordered fragment names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicSpecifier {
    /// Category (directory) name
    pub category: String,
    /// Fragment names in request order; duplicates and empty names are kept
    pub fragments: Vec<String>,
}

impl TopicSpecifier {
    /// Parse a single command-line token
    pub fn parse(token: &str) -> Result<Self> {
        let Some((category, rest)) = token.split_once('/') else {
            return Err(ComposeError::MalformedSpecifier {
                token: token.to_string(),
            });
        };

        if category.is_empty() {
            return Err(ComposeError::MalformedSpecifier {
                token: token.to_string(),
            });
        }

        let fragments: Vec<String> = rest.split('+').map(str::to_string).collect();
        debug!(category, ?fragments, "Parsed topic specifier");

        Ok(Self {
            category: category.to_string(),
            fragments,
        })
    }

    /// Parse every token, failing on the first malformed one
    pub fn parse_all<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Self>> {
        tokens.iter().map(|t| Self::parse(t.as_ref())).collect()
    }
}

impl std::fmt::Display for TopicSpecifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.category, self.fragments.join("+"))
    }
}
