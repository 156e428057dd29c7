mod public_site_resolver;

pub use public_site_resolver::PublicSiteResolver;
