pub mod contact;
pub mod ideas;

pub use contact::{contact_handler, ContactSentBody};
pub use ideas::{ideas_handler, IdeaRequestDto, PlanBody};
