mod admin_identity_service;

pub use admin_identity_service::AdminIdentityService;
