//! API request/response types

mod analysis;
mod error;
mod tutor;

pub use analysis::{
    AnalysisRequest, AnalysisResponse, EquityAnalysisRequest, EquityAnalysisResponse,
};
pub use error::{ApiError, ApiErrorDetail, ApiErrorResponse, ApiErrorType};
pub use tutor::{ChatRequest, ChatResponse};
