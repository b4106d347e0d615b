//! Customer reviews with admin moderation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Moderation status of a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

impl ReviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "pending",
            ReviewStatus::Approved => "approved",
            ReviewStatus::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(ReviewStatus::Pending),
            "approved" => Some(ReviewStatus::Approved),
            "rejected" => Some(ReviewStatus::Rejected),
            _ => None,
        }
    }
}

/// A customer review. Public submissions start as `pending`; only
/// `approved` reviews appear in public listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub rating: u8,
    pub text: String,
    #[serde(default)]
    pub photos: Vec<String>,
    pub status: ReviewStatus,
    pub created_at: DateTime<Utc>,
}

/// Request payload for a public review submission.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReviewRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,

    #[validate(length(max = 30, message = "Phone must be at most 30 characters"))]
    pub phone: Option<String>,

    #[validate(custom(function = "shared::validation::validate_rating"))]
    pub rating: u8,

    #[validate(length(min = 1, max = 5000, message = "Text must be 1-5000 characters"))]
    pub text: String,

    #[serde(default)]
    pub photos: Vec<String>,
}

impl SubmitReviewRequest {
    /// Builds a pending review; id and timestamp are assigned by the
    /// repository.
    pub fn into_review(self) -> Review {
        Review {
            id: 0,
            name: self.name,
            email: self.email,
            phone: self.phone,
            rating: self.rating,
            text: self.text,
            photos: self.photos,
            status: ReviewStatus::Pending,
            created_at: DateTime::<Utc>::MIN_UTC,
        }
    }
}

/// Request payload for an admin moderation decision.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateReviewStatusRequest {
    pub status: ReviewStatus,
}
