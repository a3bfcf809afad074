mod json_config;
mod pagination;
mod response;

pub use json_config::{custom_json_config, custom_path_config, custom_query_config};
pub use pagination::{PageMeta, PageRequest, Paginated};
pub use response::{ApiError, ApiResponse};
