pub mod domain;
pub mod ports;
pub mod service;
pub mod settings_use_cases;
