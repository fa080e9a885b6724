//! Quote dataset container.

use crate::domain::errors::QuoteError;
use crate::domain::quote::{CategoryFilter, Quote};

struct Category {
    id: String,
    quotes: Vec<Quote>,
}

/// The static, read-only quote dataset: ordered categories, each holding an
/// ordered, non-empty list of quotes.
///
/// The "all" pseudo-category is never stored; it is recomputed on demand as
/// the concatenation of every category's quotes in declared order.
pub struct QuoteStore {
    categories: Vec<Category>,
}

impl QuoteStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            categories: Vec::new(),
        }
    }

    /// Adds a category with its quotes, preserving insertion order.
    ///
    /// Every category must be non-empty; an empty one is a dataset
    /// construction bug.
    #[must_use]
    pub fn with_category(mut self, id: impl Into<String>, quotes: Vec<Quote>) -> Self {
        debug_assert!(!quotes.is_empty(), "categories must be non-empty");
        self.categories.push(Category {
            id: id.into(),
            quotes,
        });
        self
    }

    /// Returns the declared category identifiers in order.
    ///
    /// Excludes the "all" pseudo-category.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.id.as_str()).collect()
    }

    /// Returns the number of declared categories.
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Returns whether `id` names a declared category.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.categories.iter().any(|c| c.id == id)
    }

    /// Returns the quote pool for a filter.
    ///
    /// For [`CategoryFilter::All`] this is the concatenation of every
    /// category's quotes in declared order, then quote order within each
    /// category.
    ///
    /// # Errors
    /// Returns [`QuoteError::UnknownCategory`] if the filter names a
    /// category that was never declared.
    pub fn quotes_for(&self, filter: &CategoryFilter) -> Result<Vec<&Quote>, QuoteError> {
        match filter {
            CategoryFilter::All => Ok(self
                .categories
                .iter()
                .flat_map(|c| c.quotes.iter())
                .collect()),
            CategoryFilter::Category(id) => self
                .categories
                .iter()
                .find(|c| c.id == *id)
                .map(|c| c.quotes.iter().collect())
                .ok_or_else(|| QuoteError::unknown_category(id.clone())),
        }
    }
}

impl Default for QuoteStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> QuoteStore {
        QuoteStore::new()
            .with_category(
                "focus",
                vec![
                    Quote::new("First things first.", "Stephen Covey"),
                    Quote::new("Deep work wins.", ""),
                ],
            )
            .with_category("rest", vec![Quote::new("Sleep on it.", "Anonymous")])
    }

    #[test]
    fn test_categories_in_declared_order() {
        let store = sample_store();
        assert_eq!(store.categories(), vec!["focus", "rest"]);
        assert_eq!(store.category_count(), 2);
    }

    #[test]
    fn test_contains() {
        let store = sample_store();
        assert!(store.contains("focus"));
        assert!(!store.contains("all"));
        assert!(!store.contains("fitness"));
    }

    #[test]
    fn test_quotes_for_named_category() {
        let store = sample_store();
        let quotes = store.quotes_for(&CategoryFilter::category("rest")).unwrap();
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].text(), "Sleep on it.");
    }

    #[test]
    fn test_quotes_for_all_concatenates_in_order() {
        let store = sample_store();
        let all = store.quotes_for(&CategoryFilter::All).unwrap();

        let per_category: usize = store
            .categories()
            .iter()
            .map(|id| {
                store
                    .quotes_for(&CategoryFilter::category(*id))
                    .unwrap()
                    .len()
            })
            .sum();
        assert_eq!(all.len(), per_category);

        let texts: Vec<&str> = all.iter().map(|q| q.text()).collect();
        assert_eq!(
            texts,
            vec!["First things first.", "Deep work wins.", "Sleep on it."]
        );
    }

    #[test]
    fn test_quotes_for_all_has_no_duplicates() {
        let store = sample_store();
        let all = store.quotes_for(&CategoryFilter::All).unwrap();

        for (i, quote) in all.iter().enumerate() {
            for other in &all[i + 1..] {
                assert_ne!(quote, other);
            }
        }
    }

    #[test]
    fn test_unknown_category_fails() {
        let store = sample_store();
        let err = store
            .quotes_for(&CategoryFilter::category("fitness"))
            .unwrap_err();
        assert_eq!(err, QuoteError::unknown_category("fitness"));
    }
}
