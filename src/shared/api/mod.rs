mod json_config;
mod response;
mod sse;

pub use json_config::custom_json_config;
pub use response::{ApiError, ApiResponse};
pub use sse::{sse_event, sse_response};
