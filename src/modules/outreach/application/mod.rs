pub mod domain;
pub mod outreach_use_cases;
pub mod ports;
pub mod service;
