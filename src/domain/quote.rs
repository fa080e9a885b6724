//! Quote and category entities.

/// A single motivational statement with an optional attributed author.
///
/// Immutable once constructed; the author string may be empty for
/// anonymous quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    text: String,
    author: String,
}

impl Quote {
    /// Creates a new quote.
    #[must_use]
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }

    /// Returns the quote text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the author name, empty for anonymous quotes.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns whether the quote carries an author attribution.
    #[must_use]
    pub fn has_author(&self) -> bool {
        !self.author.is_empty()
    }
}

/// The category selection a user can make: a single declared category or
/// the synthesized union of all of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    /// The pseudo-category covering every declared category.
    All,
    /// One declared category, by identifier.
    Category(String),
}

impl CategoryFilter {
    /// Creates a filter for a named category.
    #[must_use]
    pub fn category(id: impl Into<String>) -> Self {
        Self::Category(id.into())
    }

    /// Returns the category identifier, or `None` for [`CategoryFilter::All`].
    #[must_use]
    pub fn as_category(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Category(id) => Some(id),
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Category(id) => write!(f, "{id}"),
        }
    }
}
