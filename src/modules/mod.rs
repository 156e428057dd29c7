pub mod auth;
pub mod content;
pub mod document_store;
pub mod localization;
pub mod outreach;
pub mod settings;
pub mod site;
