pub mod get_site;
mod stream_collection;

pub use get_site::{get_site_handler, LangQuery};
pub use stream_collection::stream_collection_handler;
