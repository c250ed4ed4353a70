//! Errors raised while resolving a select.

use thiserror::Error;

/// Boxed error returned by a fallible option predicate.
pub type PredicateError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that abort a resolution pass.
///
/// A failed pass never touches state the caller already holds; any
/// previously resolved menu stays valid.
#[derive(Debug, Error)]
pub enum SelectError {
    /// An option group was found inside another option group.
    #[error("option group {} nested inside option group {}", display_name(.group), display_name(.parent))]
    InvalidTree {
        /// Name of the offending inner group.
        group: Option<String>,
        /// Name of the group that contains it.
        parent: Option<String>,
    },

    /// A custom option predicate failed.
    #[error("option predicate failed: {0}")]
    Predicate(#[source] PredicateError),
}

fn display_name(name: &Option<String>) -> String {
    match name {
        Some(name) => format!("'{name}'"),
        None => "<unnamed>".to_string(),
    }
}

pub type Result<T, E = SelectError> = std::result::Result<T, E>;
