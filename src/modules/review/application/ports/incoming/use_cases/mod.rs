mod create_review;
mod list_reviews;

pub use create_review::{
    CreateReviewCommand, CreateReviewCommandError, CreateReviewError, CreateReviewUseCase,
};
pub use list_reviews::{ListReviewsError, ListReviewsUseCase};
