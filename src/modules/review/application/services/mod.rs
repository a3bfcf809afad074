mod create_review_service;
mod list_reviews_service;
mod rating_recalculator;

pub use create_review_service::CreateReviewService;
pub use list_reviews_service::ListReviewsService;
pub use rating_recalculator::{RatingRecalculationError, RatingRecalculator};
