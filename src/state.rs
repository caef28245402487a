//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::ExposureService;
use crate::domain::repositories::ExposureRepository;

#[derive(Clone)]
pub struct AppState {
    pub exposure_service: Arc<ExposureService>,
}

impl AppState {
    pub fn new(repository: Arc<dyn ExposureRepository>) -> Self {
        Self {
            exposure_service: Arc::new(ExposureService::new(repository)),
        }
    }
}
