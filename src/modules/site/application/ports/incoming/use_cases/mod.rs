mod resolve_site;

pub use resolve_site::{LiveAccess, ResolveSiteUseCase};
