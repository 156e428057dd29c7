mod admin;

pub use admin::{extract_token_from_header, AdminSession};
