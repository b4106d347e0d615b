//! Common validation utilities.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Slugs are lowercase, digit or hyphen separated, and URL-safe.
    static ref SLUG_RE: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
}

/// Maximum slug length in characters.
const MAX_SLUG_LEN: usize = 64;

/// Validates a category or content slug: lowercase alphanumeric segments
/// separated by single hyphens, at most 64 characters.
pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    if slug.len() <= MAX_SLUG_LEN && SLUG_RE.is_match(slug) {
        Ok(())
    } else {
        let mut err = ValidationError::new("slug_format");
        err.message = Some("Slug must be lowercase alphanumeric with hyphens".into());
        Err(err)
    }
}

/// Validates that a price is non-negative and finite.
pub fn validate_price(price: f64) -> Result<(), ValidationError> {
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        let mut err = ValidationError::new("price_range");
        err.message = Some("Price must be a non-negative number".into());
        Err(err)
    }
}

/// Validates a review rating (1 to 5 inclusive).
pub fn validate_rating(rating: u8) -> Result<(), ValidationError> {
    if (1..=5).contains(&rating) {
        Ok(())
    } else {
        let mut err = ValidationError::new("rating_range");
        err.message = Some("Rating must be between 1 and 5".into());
        Err(err)
    }
}

/// Validates an order item quantity (at least 1).
pub fn validate_quantity(quantity: u32) -> Result<(), ValidationError> {
    if quantity >= 1 {
        Ok(())
    } else {
        let mut err = ValidationError::new("quantity_range");
        err.message = Some("Quantity must be at least 1".into());
        Err(err)
    }
}
