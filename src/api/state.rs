use std::sync::Arc;

use crate::infrastructure::analysis::EducationAnalysisService;
use crate::infrastructure::tutoring::StudentTutorService;

/// Shared application state: stateless services over the immutable gateway.
#[derive(Clone)]
pub struct AppState {
    pub tutor_service: Arc<StudentTutorService>,
    pub analysis_service: Arc<EducationAnalysisService>,
}

impl AppState {
    pub fn new(
        tutor_service: Arc<StudentTutorService>,
        analysis_service: Arc<EducationAnalysisService>,
    ) -> Self {
        Self {
            tutor_service,
            analysis_service,
        }
    }
}
