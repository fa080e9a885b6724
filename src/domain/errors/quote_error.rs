//! Quote dataset error types.

use thiserror::Error;

/// Errors raised by the quote dataset and selection logic.
///
/// Both variants indicate a programming error rather than a recoverable
/// runtime condition: controls are generated from the same dataset they
/// query, and every declared category is non-empty.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuoteError {
    /// The requested category identifier is neither a declared category nor
    /// the "all" pseudo-category.
    #[error("unknown category: {id}")]
    UnknownCategory {
        /// The identifier that failed to resolve.
        id: String,
    },

    /// Selection was attempted on an empty quote pool.
    #[error("cannot select a quote from an empty pool")]
    EmptyPool,
}

impl QuoteError {
    /// Creates an unknown-category error.
    #[must_use]
    pub fn unknown_category(id: impl Into<String>) -> Self {
        Self::UnknownCategory { id: id.into() }
    }
}
