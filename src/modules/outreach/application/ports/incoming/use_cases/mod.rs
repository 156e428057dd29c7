mod generate_plan;
mod send_contact;

pub use generate_plan::{GeneratePlanError, GeneratePlanUseCase};
pub use send_contact::{SendContactError, SendContactUseCase};
