pub mod domain;
pub mod resolver;
pub mod ui_strings;
