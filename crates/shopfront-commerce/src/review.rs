//! Product review types.

use crate::error::StorefrontError;
use crate::ids::{ProductId, ReviewId};
use serde::{Deserialize, Serialize};

/// Lowest accepted star rating.
pub const MIN_RATING: u8 = 1;
/// Highest accepted star rating.
pub const MAX_RATING: u8 = 5;

/// A review being submitted for a purchased product.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewReview {
    /// The reviewed product.
    pub product_id: ProductId,
    /// Star rating, 1-5.
    pub rating: u8,
    /// Free-text comment.
    pub comment: String,
    /// Storage paths of attached photos.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
}

impl NewReview {
    /// Create a review with no attached images.
    pub fn new(product_id: ProductId, rating: u8, comment: impl Into<String>) -> Self {
        Self {
            product_id,
            rating,
            comment: comment.into(),
            images: Vec::new(),
        }
    }

    /// Validate before submission: rating in range, comment non-blank.
    pub fn validate(&self) -> Result<(), StorefrontError> {
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(StorefrontError::InvalidRating(self.rating));
        }
        if self.comment.trim().is_empty() {
            return Err(StorefrontError::Validation(
                "comment is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// A published review as served by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    /// Unique review identifier.
    pub id: ReviewId,
    /// Reviewer display name, absent for anonymized reviews.
    #[serde(default)]
    pub author: Option<String>,
    /// Star rating, 1-5.
    #[serde(default)]
    pub rating: u8,
    /// Free-text comment.
    #[serde(default)]
    pub comment: String,
    /// Creation date string as emitted by the backend.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Aggregate rating figures for a product's review list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReviewSummary {
    /// Mean rating across all reviews, 0.0 when there are none.
    pub average_rating: f64,
    /// Number of reviews.
    pub total_reviews: u32,
    /// Review counts indexed by star value minus one.
    pub counts: [u32; 5],
}

impl ReviewSummary {
    /// Compute the summary from a list of reviews.
    ///
    /// Out-of-range ratings are skipped rather than distorting the mean.
    pub fn from_reviews(reviews: &[Review]) -> Self {
        let mut counts = [0u32; 5];
        let mut sum = 0u64;
        let mut total = 0u32;
        for review in reviews {
            if (MIN_RATING..=MAX_RATING).contains(&review.rating) {
                counts[usize::from(review.rating) - 1] += 1;
                sum += u64::from(review.rating);
                total += 1;
            }
        }
        let average_rating = if total == 0 {
            0.0
        } else {
            sum as f64 / f64::from(total)
        };
        Self {
            average_rating,
            total_reviews: total,
            counts,
        }
    }

    /// Number of reviews with the given star value.
    pub fn count_for(&self, rating: u8) -> u32 {
        if (MIN_RATING..=MAX_RATING).contains(&rating) {
            self.counts[usize::from(rating) - 1]
        } else {
            0
        }
    }
}
