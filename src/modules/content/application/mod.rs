pub mod domain;
pub mod ports;
pub mod record_use_cases;
pub mod service;
