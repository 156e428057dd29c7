mod contact_message;
mod planner_prompt;

pub use contact_message::ContactMessage;
pub use planner_prompt::PLANNER_SYSTEM_PROMPT;
