//! SyncSenta AI Gateway
//!
//! Completion gateway for an educational platform. Serves two surfaces over a
//! single OpenAI-shaped upstream:
//! - Student tutoring with a guided, never-give-the-answer persona, plain and
//!   streamed
//! - Administrative analysis reports and county equity heatmaps

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use api::AppState;
use domain::CompletionGateway;
use infrastructure::analysis::EducationAnalysisService;
use infrastructure::http::HttpClient;
use infrastructure::llm::OpenAiGateway;
use infrastructure::tutoring::StudentTutorService;
use tracing::info;

/// Create the application state with all services initialized.
///
/// Fails when the upstream credential is missing or a placeholder. That is
/// the one startup check that must abort the process; everything after it
/// degrades at request time instead of failing.
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    config.upstream.validate()?;

    let client = HttpClient::with_timeout(Duration::from_secs(config.upstream.timeout_secs))?;
    let gateway: Arc<dyn CompletionGateway> =
        Arc::new(OpenAiGateway::new(client, config.upstream.clone()));

    info!(model = %config.upstream.model, "Application services initialized");

    Ok(AppState::new(
        Arc::new(StudentTutorService::new(gateway.clone())),
        Arc::new(EducationAnalysisService::new(gateway)),
    ))
}
