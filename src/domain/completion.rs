//! Completion gateway seam
//!
//! The gateway operations deliberately cannot fail from the caller's point
//! of view: a tutoring or analysis request must never blow up because the
//! upstream provider hiccuped. `complete` returns the degraded fallback text
//! on any upstream failure, and `complete_stream` ends with a single apology
//! fragment instead of propagating an error. The signatures carry that
//! contract; there is no `Result` to unwrap.

use std::pin::Pin;

use async_trait::async_trait;
use futures::Stream;
use serde_json::{Map, Value};
use tracing::warn;

/// Finite, ordered, non-restartable sequence of response text fragments.
pub type FragmentStream = Pin<Box<dyn Stream<Item = String> + Send>>;

/// Degraded response for failed non-streaming completions.
pub const FALLBACK_REPLY: &str =
    "Sorry, I'm having trouble thinking right now. Please try again.";

/// Terminal fragment emitted when a stream fails to open or dies mid-flight.
pub const STREAM_FALLBACK_REPLY: &str = "Sorry, I had trouble with that. Could you ask again?";

const ANALYSIS_INSTRUCTION: &str =
    "You are performing data analysis. Be thorough and provide insights.";

/// Gateway to the upstream completion provider.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Single whole-response completion. Upstream failures degrade to
    /// [`FALLBACK_REPLY`].
    async fn complete(&self, system_prompt: &str, user_message: &str) -> String;

    /// Incremental completion. Pulled lazily by the consumer; dropping the
    /// stream releases the upstream connection.
    async fn complete_stream(&self, system_prompt: &str, user_message: &str) -> FragmentStream;

    /// Completion over structured context data, framed as a data-analysis
    /// task. Serialization failure of the context is logged and treated as
    /// an empty encoding, never as a fatal condition.
    async fn analysis_completion(
        &self,
        system_prompt: &str,
        user_query: &str,
        context_data: &Map<String, Value>,
    ) -> String {
        let context_json = match serde_json::to_string(context_data) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "Failed to serialize context data");
                String::new()
            }
        };

        let full_prompt =
            format!("Context Data:\n{context_json}\n\nUser Query:\n{user_query}\n");
        let system = format!("{system_prompt}\n\n{ANALYSIS_INSTRUCTION}");

        self.complete(&system, &full_prompt).await
    }
}
