use std::sync::Arc;

use crate::modules::outreach::application::ports::incoming::use_cases::{
    GeneratePlanUseCase, SendContactUseCase,
};

#[derive(Clone)]
pub struct OutreachUseCases {
    pub contact: Arc<dyn SendContactUseCase + Send + Sync>,
    pub ideas: Arc<dyn GeneratePlanUseCase + Send + Sync>,
}
