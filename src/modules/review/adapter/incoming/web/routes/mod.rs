mod create_review;
mod list_reviews;

pub use create_review::*;
pub use list_reviews::*;
