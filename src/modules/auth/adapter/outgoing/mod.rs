pub mod jwt;
pub mod security;
mod token_blacklist_memory;

pub use token_blacklist_memory::InMemoryTokenBlacklist;
