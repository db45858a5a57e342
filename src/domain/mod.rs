//! Domain layer: pure types, prompt construction, and the gateway seam

pub mod analysis;
pub mod completion;
pub mod error;
pub mod tutoring;

pub use analysis::{AnalysisContext, EquityHeatmapEntry, SubjectArea};
pub use completion::{CompletionGateway, FragmentStream, FALLBACK_REPLY, STREAM_FALLBACK_REPLY};
pub use error::DomainError;
pub use tutoring::{ResourceTier, TutoringContext};
