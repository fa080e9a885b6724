//! Random quote selection.

use rand::Rng;

use crate::domain::errors::QuoteError;
use crate::domain::quote::Quote;

/// Picks one quote from the pool, each element with equal probability.
///
/// The randomness source carries no ordering guarantee across calls; the
/// same quote may be returned twice in a row.
///
/// # Errors
/// Returns [`QuoteError::EmptyPool`] on a zero-length pool. Given the
/// non-empty-category dataset invariant this never happens in normal
/// operation; it is enforced so a dataset construction bug fails here
/// instead of panicking on an out-of-range index.
pub fn pick_random<'a>(quotes: &[&'a Quote]) -> Result<&'a Quote, QuoteError> {
    if quotes.is_empty() {
        return Err(QuoteError::EmptyPool);
    }
    let index = rand::thread_rng().gen_range(0..quotes.len());
    Ok(quotes[index])
}
