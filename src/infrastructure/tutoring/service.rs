//! Mwalimu AI student tutoring service

use std::sync::Arc;

use tracing::info;

use crate::domain::tutoring::prompt;
use crate::domain::{CompletionGateway, FragmentStream, ResourceTier, TutoringContext};

pub struct StudentTutorService {
    gateway: Arc<dyn CompletionGateway>,
}

impl StudentTutorService {
    pub fn new(gateway: Arc<dyn CompletionGateway>) -> Self {
        Self { gateway }
    }

    /// Whole tutoring reply for a student message.
    pub async fn tutor_response(&self, message: &str, context: &TutoringContext) -> String {
        let system_prompt = prompt::build(context);

        info!(
            grade = context.grade_level,
            subject = %context.current_subject,
            "Creating tutor response"
        );

        if context.resource_level == ResourceTier::Low {
            info!("Adapting response for low-resource environment");
        }

        self.gateway.complete(&system_prompt, message).await
    }

    /// Incremental tutoring reply; one fragment per upstream increment.
    pub async fn tutor_response_stream(
        &self,
        message: &str,
        context: &TutoringContext,
    ) -> FragmentStream {
        let system_prompt = prompt::build(context);

        info!(
            grade = context.grade_level,
            subject = %context.current_subject,
            "Creating streaming tutor response"
        );

        self.gateway.complete_stream(&system_prompt, message).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    use crate::domain::completion::mock::MockGateway;

    fn context() -> TutoringContext {
        TutoringContext {
            grade_level: 3,
            current_subject: "fractions".to_string(),
            resource_level: ResourceTier::Low,
            school_id: None,
            teacher_customization: None,
        }
    }

    #[tokio::test]
    async fn test_tutor_response_uses_persona_prompt() {
        let gateway = Arc::new(MockGateway::replying(
            "Which pile of mangoes looks bigger: 1 out of 2, or 1 out of 3?",
        ));
        let service = StudentTutorService::new(gateway.clone());

        let reply = service
            .tutor_response("why is 1/2 bigger than 1/3?", &context())
            .await;

        assert!(reply.ends_with('?'));

        let system = gateway.last_system_prompt().unwrap();
        assert!(system.contains("Grade 3"));
        assert!(system.contains("fractions"));
        assert!(system.contains("sharing fruit"));

        assert_eq!(
            gateway.last_user_message().unwrap(),
            "why is 1/2 bigger than 1/3?"
        );
    }

    #[tokio::test]
    async fn test_tutor_response_stream_passes_fragments_through() {
        let gateway = Arc::new(MockGateway::streaming(vec!["Think ", "about it!"]));
        let service = StudentTutorService::new(gateway.clone());

        let fragments: Vec<String> = service
            .tutor_response_stream("help me", &context())
            .await
            .collect()
            .await;

        assert_eq!(fragments.concat(), "Think about it!");
        assert!(gateway.last_system_prompt().unwrap().contains("Grade 3"));
    }
}
