pub mod application;

pub use application::domain::lang::{Lang, TextDirection, UnsupportedLang};
pub use application::domain::localized_text::LocalizedText;
pub use application::resolver::{fallback_chain, localized_key, resolve_field};
pub use application::ui_strings::translate;
