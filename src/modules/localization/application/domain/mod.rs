pub mod lang;
pub mod localized_text;
