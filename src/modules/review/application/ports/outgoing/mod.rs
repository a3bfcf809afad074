mod review_query;
mod review_repository;

pub use review_query::{ReviewAuthor, ReviewQuery, ReviewQueryError, ReviewView};
pub use review_repository::{
    CreateReviewData, ReviewRepository, ReviewRepositoryError, ReviewResult,
};
