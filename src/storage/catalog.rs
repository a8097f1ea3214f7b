use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use tracing::info;

/// A single product review
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Review {
    pub redirect_url: String,
    pub text: String,
}

impl Review {
    pub fn new(redirect_url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            redirect_url: redirect_url.into(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("review catalog must contain at least one review")]
    Empty,
}

/// Immutable category -> reviews index
///
/// Every category present maps to at least one review, and the flattened
/// collection is never empty.
#[derive(Debug, Clone)]
pub struct ReviewIndex {
    by_category: HashMap<String, Vec<Review>>,
    categories: Vec<String>,
    all: Vec<Review>,
}

impl ReviewIndex {
    /// Build the index over the compiled-in dataset
    pub fn builtin() -> Self {
        let hairdryer = Review::new("/home", "Nice product.");
        let tank_top = Review::new("/home", "Bad product.");
        let candle_holder = Review::new("/home", "Nice Candle holder!");
        let bamboo_glass_jar = Review::new("/home", "Nice glass.");
        let watch = Review::new("/home", "Now I know the time");
        let mug = Review::new("/home", "Coffee from this mug is bad...");
        let loafers = Review::new("/home", "ok");

        let index = Self::build(vec![
            ("clothing", tank_top),
            ("accessories", watch),
            ("footwear", loafers),
            ("hair", hairdryer),
            ("decor", candle_holder),
            ("kitchen", bamboo_glass_jar),
            ("kitchen", mug),
        ]);

        info!(
            categories = index.categories.len(),
            reviews = index.all.len(),
            "Built review index"
        );

        index
    }

    /// Build an index from (category, review) pairs, in order
    pub fn from_entries<K, I>(entries: I) -> Result<Self, CatalogError>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Review)>,
    {
        let index = Self::build(entries);
        if index.all.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(index)
    }

    fn build<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Review)>,
    {
        let mut by_category: HashMap<String, Vec<Review>> = HashMap::new();
        let mut categories = Vec::new();
        let mut all = Vec::new();

        for (category, review) in entries {
            let category = category.into();
            all.push(review.clone());
            by_category
                .entry(category.clone())
                .or_insert_with(|| {
                    categories.push(category);
                    Vec::new()
                })
                .push(review);
        }

        Self {
            by_category,
            categories,
            all,
        }
    }

    /// Reviews for `category`, empty if the category is unknown
    pub fn reviews_for_category(&self, category: &str) -> &[Review] {
        self.by_category
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Draw `count` reviews uniformly, with replacement, using the thread-local RNG
    pub fn random_reviews(&self, count: usize) -> Vec<Review> {
        self.random_reviews_with(&mut rand::rng(), count)
    }

    pub fn random_reviews_with<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<Review> {
        if self.all.is_empty() {
            return Vec::new();
        }
        (0..count)
            .map(|_| self.all[rng.random_range(0..self.all.len())].clone())
            .collect()
    }

    /// Category keys in the order they were first seen
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// All reviews, flattened in construction order
    pub fn all_reviews(&self) -> &[Review] {
        &self.all
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}
