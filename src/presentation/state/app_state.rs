use std::sync::Arc;

use crate::application::ports::LlmClient;
use crate::application::services::{AnalysisService, RegistrationService};

pub struct AppState<L>
where
    L: LlmClient,
{
    pub analysis_service: Arc<AnalysisService<L>>,
    pub registration_service: Arc<RegistrationService>,
}

impl<L> Clone for AppState<L>
where
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            analysis_service: Arc::clone(&self.analysis_service),
            registration_service: Arc::clone(&self.registration_service),
        }
    }
}
