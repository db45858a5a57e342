//! Student tutoring context and prompt construction

pub mod prompt;

use serde::{Deserialize, Serialize};

use super::DomainError;

/// Caller-supplied classification of the student's access to technology,
/// used to select the example vocabulary of the tutor persona.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResourceTier {
    Low,
    Medium,
    High,
}

/// Student context for personalized tutoring
///
/// Wire names match the original SyncSenta frontend contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutoringContext {
    pub grade_level: u8,
    pub current_subject: String,
    pub resource_level: ResourceTier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_customization: Option<String>,
}

impl TutoringContext {
    /// Boundary validation, run before the context reaches the prompt builder.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !(1..=12).contains(&self.grade_level) {
            return Err(DomainError::validation(
                "gradeLevel must be between 1 and 12",
            ));
        }

        if self.current_subject.trim().is_empty() {
            return Err(DomainError::validation("currentSubject must not be blank"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(grade: u8, subject: &str) -> TutoringContext {
        TutoringContext {
            grade_level: grade,
            current_subject: subject.to_string(),
            resource_level: ResourceTier::Medium,
            school_id: None,
            teacher_customization: None,
        }
    }

    #[test]
    fn test_valid_context() {
        assert!(context(3, "fractions").validate().is_ok());
        assert!(context(1, "reading").validate().is_ok());
        assert!(context(12, "chemistry").validate().is_ok());
    }

    #[test]
    fn test_grade_out_of_bounds() {
        assert!(context(0, "math").validate().is_err());
        assert!(context(13, "math").validate().is_err());
    }

    #[test]
    fn test_blank_subject() {
        assert!(context(5, "   ").validate().is_err());
    }

    #[test]
    fn test_wire_format() {
        let json = r#"{
            "gradeLevel": 3,
            "currentSubject": "fractions",
            "resourceLevel": "LOW",
            "teacherCustomization": "focus on visual examples"
        }"#;

        let ctx: TutoringContext = serde_json::from_str(json).unwrap();
        assert_eq!(ctx.grade_level, 3);
        assert_eq!(ctx.resource_level, ResourceTier::Low);
        assert_eq!(
            ctx.teacher_customization.as_deref(),
            Some("focus on visual examples")
        );
        assert!(ctx.school_id.is_none());
    }
}
