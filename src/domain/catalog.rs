//! Built-in quote dataset.

use crate::domain::quote::Quote;
use crate::domain::store::QuoteStore;

/// Builds the compiled-in dataset: four categories, five quotes each.
///
/// Category declaration order is the order the category bar renders them in.
#[must_use]
pub fn builtin() -> QuoteStore {
    QuoteStore::new()
        .with_category(
            "success",
            vec![
                Quote::new(
                    "Success is not final, failure is not fatal: it is the courage to continue that counts.",
                    "Winston Churchill",
                ),
                Quote::new(
                    "Success is to be measured not so much by the position that one has reached in life as by the obstacles which he has overcome.",
                    "Booker T. Washington",
                ),
                Quote::new(
                    "Success is the sum of small efforts, repeated day in and day out.",
                    "Robert Collier",
                ),
                Quote::new(
                    "The difference between the impossible and the possible lies in a person's determination.",
                    "Tommy Lasorda",
                ),
                Quote::new(
                    "The best way to predict the future is to create it.",
                    "Peter Drucker",
                ),
            ],
        )
        .with_category(
            "perseverance",
            vec![
                Quote::new(
                    "Persistence can change failure into extraordinary achievement.",
                    "Matt Biondi",
                ),
                Quote::new(
                    "Our greatest glory is not in never falling, but in rising every time we fall.",
                    "Confucius",
                ),
                Quote::new(
                    "Patience, persistence and perspiration make an unbeatable combination for success.",
                    "Napoleon Hill",
                ),
                Quote::new(
                    "It does not matter how slowly you go as long as you do not stop.",
                    "Confucius",
                ),
                Quote::new(
                    "A river cuts through rock, not because of its power, but because of its persistence.",
                    "Jim Watkins",
                ),
            ],
        )
        .with_category(
            "courage",
            vec![
                Quote::new(
                    "Courage is not the absence of fear, but the triumph over it.",
                    "Nelson Mandela",
                ),
                Quote::new(
                    "Everything you've ever wanted is on the other side of fear.",
                    "George Addair",
                ),
                Quote::new("Act as if it were impossible to fail.", "Dorothea Brande"),
                Quote::new(
                    "Courage is not having the strength to go on; it is going on when you don't have the strength.",
                    "Theodore Roosevelt",
                ),
                Quote::new(
                    "Life shrinks or expands in proportion to one's courage.",
                    "Anaïs Nin",
                ),
            ],
        )
        .with_category(
            "happiness",
            vec![
                Quote::new(
                    "Happiness is not something ready made. It comes from your own actions.",
                    "Dalai Lama",
                ),
                Quote::new(
                    "Happiness doesn't depend upon who you are or what you have; it depends solely upon what you think.",
                    "Dale Carnegie",
                ),
                Quote::new(
                    "To be happy, do not do unto others what you would not have them do unto you.",
                    "Confucius",
                ),
                Quote::new(
                    "Happiness lies in the joy of achievement and the thrill of creative effort.",
                    "Franklin D. Roosevelt",
                ),
                Quote::new(
                    "The way to get started is to quit talking and begin doing.",
                    "Walt Disney",
                ),
            ],
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quote::CategoryFilter;
    use std::collections::HashSet;

    #[test]
    fn test_declared_categories() {
        let store = builtin();
        assert_eq!(
            store.categories(),
            vec!["success", "perseverance", "courage", "happiness"]
        );
    }

    #[test]
    fn test_every_category_is_non_empty() {
        let store = builtin();
        for id in store.categories() {
            let quotes = store.quotes_for(&CategoryFilter::category(id)).unwrap();
            assert!(!quotes.is_empty(), "category {id} is empty");
        }
    }

    #[test]
    fn test_all_is_the_union_of_every_category() {
        let store = builtin();
        let all = store.quotes_for(&CategoryFilter::All).unwrap();

        let sum: usize = store
            .categories()
            .iter()
            .map(|id| {
                store
                    .quotes_for(&CategoryFilter::category(*id))
                    .unwrap()
                    .len()
            })
            .sum();
        assert_eq!(all.len(), sum);
    }

    #[test]
    fn test_no_quote_is_duplicated_across_categories() {
        let store = builtin();
        let all = store.quotes_for(&CategoryFilter::All).unwrap();

        let texts: HashSet<&str> = all.iter().map(|q| q.text()).collect();
        assert_eq!(texts.len(), all.len());
    }

    #[test]
    fn test_random_draws_stay_inside_and_cover_every_pool() {
        use crate::domain::selection::pick_random;

        let store = builtin();
        let mut filters = vec![CategoryFilter::All];
        filters.extend(
            store
                .categories()
                .iter()
                .map(|id| CategoryFilter::category(*id)),
        );

        for filter in &filters {
            let pool = store.quotes_for(filter).unwrap();

            let mut seen = HashSet::new();
            for _ in 0..1000 {
                let picked = pick_random(&pool).unwrap();
                assert!(pool.contains(&picked), "draw left the {filter} pool");
                seen.insert(picked.text());
            }
            assert_eq!(seen.len(), pool.len(), "{filter} pool not fully covered");
        }
    }

    #[test]
    fn test_every_quote_has_text() {
        let store = builtin();
        for quote in store.quotes_for(&CategoryFilter::All).unwrap() {
            assert!(!quote.text().is_empty());
        }
    }
}
