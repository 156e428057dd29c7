mod contact_relay_http;
mod text_generator_http;

pub use contact_relay_http::HttpContactRelay;
pub use text_generator_http::HttpTextGenerator;
