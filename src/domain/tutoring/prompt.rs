//! Mwalimu AI persona prompt builder
//!
//! Pure function from a validated [`TutoringContext`] to the system prompt
//! sent upstream. The persona rules here are invariants of the tutor's
//! identity and are not negotiable per request: the assistant must never
//! state a final answer directly, keeps replies to one or two sentences,
//! and ends every reply with a question.

use super::{ResourceTier, TutoringContext};

/// Example-adaptation block for students in low-resource settings.
///
/// Every analogy here must come from everyday, non-technological life. The
/// whole built prompt is checked in tests against technology vocabulary, so
/// this text (and the base persona) must stay free of it.
const LOW_RESOURCE_EXAMPLES: &str = "Since the student is in a low-resource setting, \
talk about everyday things like sharing fruit, games played outside, stories about \
animals, or things found in nature. Stay away from examples that need special \
equipment or a screen.";

const BROAD_EXAMPLES: &str = "You can draw on a wide range of examples including \
technology, books, online resources, and the various learning materials the student \
may have access to.";

/// Build the tutor system prompt for a student context.
///
/// Deterministic and infallible; malformed contexts are rejected upstream by
/// [`TutoringContext::validate`] before they get here.
pub fn build(context: &TutoringContext) -> String {
    let examples = match context.resource_level {
        ResourceTier::Low => LOW_RESOURCE_EXAMPLES,
        ResourceTier::Medium | ResourceTier::High => BROAD_EXAMPLES,
    };

    let mut prompt = format!(
        "ROLE: You are Mwalimu AI, a fun, curious, and super friendly learning buddy \
for a student in Kenya. Your goal is to make learning feel like an exciting adventure, \
not a boring class.\n\
\n\
CURRENT CONTEXT: The student is in Grade {grade} and we're exploring {subject}.\n\
\n\
YOUR VIBE:\n\
- Super encouraging and positive! Use emojis to keep it fun. \u{1F609}\n\
- You're not a teacher, you're a co-explorer.\n\
- Your language is simple, clear, and relatable.\n\
\n\
YOUR CORE RULES (These are super important!):\n\
1. **NEVER, EVER give direct answers.** Your job is to guide, not to tell. Ask cool \
questions that make the student think and discover the answer themselves.\n\
2. **Adapt your examples.** {examples}\n\
3. **Keep it short & snappy.** 1-2 sentences is perfect.\n\
4. **Always end with a question.** This keeps the adventure going!\n\
5. **Use CBC curriculum references** when appropriate for Grade {grade} level.\n",
        grade = context.grade_level,
        subject = context.current_subject,
        examples = examples,
    );

    // Teacher customization rides in its own delimited block so it reads as
    // an additional instruction, never as part of the persona rules above.
    if let Some(customization) = &context.teacher_customization {
        if !customization.trim().is_empty() {
            prompt.push_str("\n---\nSPECIAL INSTRUCTIONS FROM YOUR TEACHER:\n");
            prompt.push_str(customization);
            prompt.push_str("\n---\n");
        }
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(grade: u8, subject: &str, tier: ResourceTier) -> TutoringContext {
        TutoringContext {
            grade_level: grade,
            current_subject: subject.to_string(),
            resource_level: tier,
            school_id: None,
            teacher_customization: None,
        }
    }

    #[test]
    fn test_prompt_contains_grade_and_subject() {
        for grade in 1..=12 {
            let prompt = build(&context(grade, "mathematics", ResourceTier::Medium));
            assert!(!prompt.is_empty());
            assert!(prompt.contains(&format!("Grade {grade}")));
            assert!(prompt.contains("mathematics"));
        }
    }

    #[test]
    fn test_low_resource_prompt_avoids_technology_vocabulary() {
        let prompt = build(&context(4, "science", ResourceTier::Low));
        let lowered = prompt.to_lowercase();

        for word in ["computer", "internet", "online", "technology"] {
            assert!(!lowered.contains(word), "LOW prompt contains '{word}'");
        }

        assert!(prompt.contains("sharing fruit"));
    }

    #[test]
    fn test_broad_tiers_may_reference_technology() {
        for tier in [ResourceTier::Medium, ResourceTier::High] {
            let prompt = build(&context(8, "physics", tier));
            assert!(prompt.contains("technology"));
        }
    }

    #[test]
    fn test_persona_invariants_present() {
        let prompt = build(&context(6, "geography", ResourceTier::High));
        assert!(prompt.contains("NEVER, EVER give direct answers"));
        assert!(prompt.contains("1-2 sentences"));
        assert!(prompt.contains("Always end with a question"));
    }

    #[test]
    fn test_customization_appended_in_delimited_block() {
        let mut ctx = context(5, "swahili", ResourceTier::Low);
        ctx.teacher_customization = Some("Revise yesterday's proverbs first.".to_string());

        let prompt = build(&ctx);
        assert!(prompt.contains("SPECIAL INSTRUCTIONS FROM YOUR TEACHER:"));
        assert!(prompt.contains("Revise yesterday's proverbs first."));

        // The customization block sits after the persona rules, delimited.
        let rules_pos = prompt.find("YOUR CORE RULES").unwrap();
        let custom_pos = prompt.find("SPECIAL INSTRUCTIONS").unwrap();
        assert!(custom_pos > rules_pos);
        assert!(prompt[..custom_pos].trim_end().ends_with("---"));
    }

    #[test]
    fn test_blank_customization_ignored() {
        let mut ctx = context(5, "swahili", ResourceTier::Low);
        ctx.teacher_customization = Some("   ".to_string());

        let prompt = build(&ctx);
        assert!(!prompt.contains("SPECIAL INSTRUCTIONS"));
    }

    #[test]
    fn test_build_is_deterministic() {
        let ctx = context(7, "history", ResourceTier::Medium);
        assert_eq!(build(&ctx), build(&ctx));
    }
}
