//! Quote session state and operations.

use crate::domain::errors::QuoteError;
use crate::domain::quote::{CategoryFilter, Quote};
use crate::domain::selection;
use crate::domain::store::QuoteStore;

/// The session-scoped display state: the active category filter and the
/// quote currently on screen.
///
/// Owned by the UI controller and mutated only by user actions on a single
/// logical thread. Lives for the whole process; nothing is persisted.
pub struct QuoteSession {
    store: QuoteStore,
    filter: CategoryFilter,
    current: Quote,
}

impl QuoteSession {
    /// Initializes the session over a dataset: filter set to
    /// [`CategoryFilter::All`] with a random initial quote.
    ///
    /// # Errors
    /// Returns [`QuoteError::EmptyPool`] if the dataset holds no quotes at
    /// all, a dataset construction bug.
    pub fn new(store: QuoteStore) -> Result<Self, QuoteError> {
        let current = selection::pick_random(&store.quotes_for(&CategoryFilter::All)?)?.clone();
        Ok(Self {
            store,
            filter: CategoryFilter::All,
            current,
        })
    }

    /// Returns the dataset.
    #[must_use]
    pub fn store(&self) -> &QuoteStore {
        &self.store
    }

    /// Returns the active filter.
    #[must_use]
    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// Returns the quote currently on screen.
    #[must_use]
    pub fn current(&self) -> &Quote {
        &self.current
    }

    /// Returns the filter's position in the category bar: 0 for the "all"
    /// tab, then declared categories in order.
    #[must_use]
    pub fn filter_position(&self) -> usize {
        match &self.filter {
            CategoryFilter::All => 0,
            CategoryFilter::Category(id) => {
                self.store
                    .categories()
                    .iter()
                    .position(|c| *c == id)
                    .map_or(0, |i| i + 1)
            }
        }
    }

    /// Picks a new random quote from the active filter's pool.
    ///
    /// # Errors
    /// Returns [`QuoteError`] if the pool cannot be built; unreachable with
    /// a validated filter over a non-empty dataset.
    pub fn regenerate(&mut self) -> Result<(), QuoteError> {
        let pool = self.store.quotes_for(&self.filter)?;
        self.current = selection::pick_random(&pool)?.clone();
        Ok(())
    }

    /// Switches the active filter and immediately picks a quote from it.
    ///
    /// Switching never falls back to a previously displayed quote; each
    /// switch produces a fresh random pick.
    ///
    /// # Errors
    /// Returns [`QuoteError::UnknownCategory`] for an undeclared category.
    /// The session is left untouched on error.
    pub fn select(&mut self, filter: CategoryFilter) -> Result<(), QuoteError> {
        if let CategoryFilter::Category(id) = &filter {
            if !self.store.contains(id) {
                return Err(QuoteError::unknown_category(id.clone()));
            }
        }
        self.filter = filter;
        self.regenerate()
    }

    /// Builds the clipboard payload for the displayed quote.
    ///
    /// The legacy format is preserved byte for byte: the quoted text, one
    /// space, then an em-dash and the author; when the author is empty the
    /// trailing space stays and nothing follows it.
    #[must_use]
    pub fn clipboard_payload(&self) -> String {
        if self.current.has_author() {
            format!("\"{}\" — {}", self.current.text(), self.current.author())
        } else {
            format!("\"{}\" ", self.current.text())
        }
    }
}
