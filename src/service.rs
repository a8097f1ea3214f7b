use crate::storage::{Review, ReviewIndex};
use rand::Rng;
use std::sync::Arc;
use tracing::info;

pub const DEFAULT_MAX_REVIEWS_TO_SERVE: usize = 2;

/// Resolves context keys to reviews over a shared index
#[derive(Debug, Clone)]
pub struct ReviewService {
    index: Arc<ReviewIndex>,
    max_reviews_to_serve: usize,
}

impl ReviewService {
    pub fn new(index: Arc<ReviewIndex>, max_reviews_to_serve: usize) -> Self {
        Self {
            index,
            max_reviews_to_serve,
        }
    }

    pub fn index(&self) -> &ReviewIndex {
        &self.index
    }

    pub fn max_reviews_to_serve(&self) -> usize {
        self.max_reviews_to_serve
    }

    /// Reviews for every key in order, or a random sample when nothing matches.
    pub fn get_reviews(&self, context_keys: &[String]) -> Vec<Review> {
        self.get_reviews_with(&mut rand::rng(), context_keys)
    }

    pub fn get_reviews_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        context_keys: &[String],
    ) -> Vec<Review> {
        info!(context_keys = ?context_keys, "Received review request");

        let reviews: Vec<Review> = context_keys
            .iter()
            .flat_map(|key| self.index.reviews_for_category(key))
            .cloned()
            .collect();

        // Covers both empty input and keys that matched nothing.
        if reviews.is_empty() {
            return self
                .index
                .random_reviews_with(rng, self.max_reviews_to_serve);
        }

        reviews
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn keys(keys: &[&str]) -> Vec<String> {
        keys.iter().map(|k| k.to_string()).collect()
    }

    fn service() -> ReviewService {
        ReviewService::new(
            Arc::new(ReviewIndex::builtin()),
            DEFAULT_MAX_REVIEWS_TO_SERVE,
        )
    }

    #[test]
    fn kitchen_returns_both_reviews_in_order() {
        let reviews = service().get_reviews(&keys(&["kitchen"]));
        let texts: Vec<_> = reviews.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, ["Nice glass.", "Coffee from this mug is bad..."]);
    }

    #[test]
    fn unknown_key_contributes_nothing() {
        let reviews = service().get_reviews(&keys(&["clothing", "unknown_key"]));
        assert_eq!(reviews, vec![Review::new("/home", "Bad product.")]);
    }

    #[test]
    fn results_concatenate_in_key_order_without_dedup() {
        let service = service();
        let reviews = service.get_reviews(&keys(&["decor", "kitchen", "decor"]));

        let mut expected = Vec::new();
        for key in ["decor", "kitchen", "decor"] {
            expected.extend_from_slice(service.index().reviews_for_category(key));
        }
        assert_eq!(reviews, expected);
        assert_eq!(reviews.len(), 4);
    }

    #[test]
    fn empty_input_falls_back_to_sample() {
        let service = service();
        let mut rng = StdRng::seed_from_u64(1);
        let reviews = service.get_reviews_with(&mut rng, &[]);
        assert_eq!(reviews.len(), DEFAULT_MAX_REVIEWS_TO_SERVE);
        assert!(reviews.iter().all(|r| service.index().all_reviews().contains(r)));
    }

    #[test]
    fn all_unknown_keys_fall_back_to_sample() {
        let service = service();
        let reviews = service.get_reviews(&keys(&["unknown_key", "camera"]));
        assert_eq!(reviews.len(), 2);
        assert!(reviews.iter().all(|r| service.index().all_reviews().contains(r)));
    }

    #[test]
    fn fallback_honours_configured_count() {
        let service = ReviewService::new(Arc::new(ReviewIndex::builtin()), 5);
        assert_eq!(service.max_reviews_to_serve(), 5);
        assert_eq!(service.get_reviews(&[]).len(), 5);
    }
}
