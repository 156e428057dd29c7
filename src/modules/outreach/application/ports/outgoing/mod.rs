mod contact_relay;
mod text_generator;

pub use contact_relay::{ContactRelay, RelayError};
pub use text_generator::{GenerationError, TextGenerator};
