//! Keyword-rule classification of inbound chat messages.
//!
//! Categorizes raw user text (web chat or voice transcript) so the caller
//! can decide between a canned reply, a cached reply, or escalation to the
//! agent/database/CRM pipeline. Pure and total: any string input yields
//! exactly one category, with no I/O and no panics.

mod category;
mod rules;

pub use category::{Classification, MessageCategory};
pub use rules::CategoryRule;

use crate::config::ClassifierConfig;
use crate::errors::IntakeResult;

/// Default character gate for the greeting rule. Long messages that merely
/// mention a greeting word in passing are not greetings.
pub const DEFAULT_GREETING_MAX_CHARS: usize = 20;

/// Ordered, first-match-wins message classifier.
///
/// The rule order encodes the category precedence
/// (emergency > greeting > appointment > simple); anything unmatched falls
/// back to `complex`, the full-service default for a legal question we
/// cannot confidently bucket.
#[derive(Debug)]
pub struct MessageClassifier {
    rules: Vec<CategoryRule>,
}

impl MessageClassifier {
    /// Classifier with the default bilingual rule table.
    pub fn new() -> Self {
        Self {
            rules: rules::default_rules(DEFAULT_GREETING_MAX_CHARS),
        }
    }

    /// Classifier with a configured greeting gate.
    pub fn from_config(config: &ClassifierConfig) -> IntakeResult<Self> {
        config.validate()?;
        Ok(Self {
            rules: rules::default_rules(config.greeting_max_chars),
        })
    }

    /// Classifier over a caller-supplied rule table (evaluated in the given
    /// order). The `complex` fallback still applies when nothing matches.
    pub fn with_rules(rules: Vec<CategoryRule>) -> Self {
        Self { rules }
    }

    /// Classify one message. Evaluates the rule table in precedence order
    /// against the trimmed input and returns the first match, falling back
    /// to `complex`.
    pub fn classify(&self, message: &str) -> Classification {
        let trimmed = message.trim();
        for rule in &self.rules {
            if rule.matches(trimmed) {
                return Classification::from(rule.category());
            }
        }
        Classification::from(MessageCategory::Complex)
    }
}

impl Default for MessageClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_short_greeting() {
        let classifier = MessageClassifier::new();
        let result = classifier.classify("hi");
        assert_eq!(result.category, MessageCategory::Greeting);
        assert_eq!(result.confidence, 0.95);
        assert!(!result.needs_agent);
        assert!(!result.needs_database);
        assert!(!result.needs_crm_sync);
    }

    #[test]
    fn test_spanish_greeting() {
        let classifier = MessageClassifier::new();
        let result = classifier.classify("¡Hola!");
        assert_eq!(result.category, MessageCategory::Greeting);
    }

    #[test]
    fn test_greeting_length_gate() {
        let classifier = MessageClassifier::new();
        let result = classifier.classify(
            "hi, I wanted to ask about hi-level immigration strategy and several \
             other things that make this message long",
        );
        assert_ne!(result.category, MessageCategory::Greeting);
        assert_eq!(result.category, MessageCategory::Complex);
    }

    #[test]
    fn test_emergency_overrides_greeting() {
        let classifier = MessageClassifier::new();
        let result = classifier.classify("hello, this is an emergency");
        assert_eq!(result.category, MessageCategory::Emergency);
        assert_eq!(result.confidence, 1.0);
        assert!(result.needs_agent);
        assert!(result.needs_database);
        assert!(result.needs_crm_sync);
    }

    #[test]
    fn test_arrested_is_emergency() {
        let classifier = MessageClassifier::new();
        let result = classifier.classify("My husband was arrested last night");
        assert_eq!(result.category, MessageCategory::Emergency);
    }

    #[test]
    fn test_ice_matches_as_word_only() {
        let classifier = MessageClassifier::new();
        assert_eq!(
            classifier.classify("ICE came to our house this morning").category,
            MessageCategory::Emergency
        );
        // "ice" buried in another word is not an emergency signal
        assert_ne!(
            classifier.classify("the receptionist was nice to my family").category,
            MessageCategory::Emergency
        );
    }

    #[test]
    fn test_appointment_request() {
        let classifier = MessageClassifier::new();
        let result = classifier.classify("I'd like to schedule a consultation next week");
        assert_eq!(result.category, MessageCategory::Appointment);
        assert_eq!(result.confidence, 0.9);
        assert!(result.needs_agent);
    }

    #[test]
    fn test_spanish_appointment_with_urgente_is_not_emergency() {
        let classifier = MessageClassifier::new();
        let result = classifier.classify("Hola, necesito una cita urgente");
        assert_eq!(result.category, MessageCategory::Appointment);
        assert!(result.needs_agent);
    }

    #[test]
    fn test_simple_faq() {
        let classifier = MessageClassifier::new();
        let result = classifier.classify("What are your office hours?");
        assert_eq!(result.category, MessageCategory::Simple);
        assert_eq!(result.confidence, 0.85);
        assert!(!result.needs_agent);
    }

    #[test]
    fn test_default_fallback_is_complex() {
        let classifier = MessageClassifier::new();
        let result = classifier
            .classify("What is the statute of limitations for a car accident claim in NC?");
        assert_eq!(result.category, MessageCategory::Complex);
        assert_eq!(result.confidence, 0.7);
        assert!(result.needs_agent);
        assert!(result.needs_database);
        assert!(result.needs_crm_sync);
    }

    #[test]
    fn test_empty_string_is_complex() {
        let classifier = MessageClassifier::new();
        let result = classifier.classify("");
        assert_eq!(result.category, MessageCategory::Complex);
    }

    #[test]
    fn test_whitespace_only_is_complex() {
        let classifier = MessageClassifier::new();
        assert_eq!(
            classifier.classify("   \n\t ").category,
            MessageCategory::Complex
        );
    }

    #[test]
    fn test_input_case_and_padding_ignored() {
        let classifier = MessageClassifier::new();
        assert_eq!(
            classifier.classify("  HELLO  ").category,
            MessageCategory::Greeting
        );
        assert_eq!(
            classifier.classify("URGENT: please respond").category,
            MessageCategory::Emergency
        );
    }

    #[test]
    fn test_custom_rule_table_order_is_respected() {
        // Simple before appointment: a message with both keywords now
        // resolves to simple.
        let rules = vec![
            CategoryRule::new(MessageCategory::Simple, &["cost"]).expect("compile rule"),
            CategoryRule::new(MessageCategory::Appointment, &["consultation"])
                .expect("compile rule"),
        ];
        let classifier = MessageClassifier::with_rules(rules);
        let result = classifier.classify("what does a consultation cost?");
        assert_eq!(result.category, MessageCategory::Simple);
    }

    proptest! {
        // Classification is total: any string gets exactly one category,
        // a confidence in [0, 1], and flags consistent with that category.
        #[test]
        fn classify_is_total(message in ".*") {
            let classifier = MessageClassifier::new();
            let result = classifier.classify(&message);
            prop_assert!((0.0..=1.0).contains(&result.confidence));
            prop_assert_eq!(result.needs_agent, result.category.needs_agent());
            prop_assert_eq!(result.needs_database, result.category.needs_database());
            prop_assert_eq!(result.needs_crm_sync, result.category.needs_crm_sync());
        }

        #[test]
        fn emergency_keyword_always_wins(prefix in "[a-z ]{0,30}", suffix in "[a-z ]{0,30}") {
            let classifier = MessageClassifier::new();
            let message = format!("{} emergency {}", prefix, suffix);
            prop_assert_eq!(classifier.classify(&message).category, MessageCategory::Emergency);
        }
    }
}
