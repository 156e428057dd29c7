mod contact_service;
mod idea_planner_service;

pub use contact_service::ContactService;
pub use idea_planner_service::IdeaPlannerService;
