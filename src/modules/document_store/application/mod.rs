pub mod change_feed;
pub mod domain;
pub mod ports;
pub mod subscription;
