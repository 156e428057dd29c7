mod identity_provider;

pub use identity_provider::{IdentityError, IdentityProvider, SignedIn};
