use crate::classifier::category::MessageCategory;
use regex::Regex;
use tracing::warn;

/// Keywords that always escalate, whatever else the message contains.
/// English-only: "urgente" must not fire this set, and the word-level
/// matcher keeps "urgent" from matching inside "urgente".
pub(crate) const EMERGENCY_KEYWORDS: &[&str] = &[
    "urgent",
    "emergency",
    "arrested",
    "detained",
    "ice",
    "deported",
    "help now",
    "immediate",
];

pub(crate) const GREETING_KEYWORDS: &[&str] = &[
    "hello",
    "hi",
    "hey",
    "good morning",
    "good afternoon",
    "good evening",
    "hola",
    "buenos días",
    "buenas tardes",
    "buenas noches",
];

pub(crate) const APPOINTMENT_KEYWORDS: &[&str] = &[
    "appointment",
    "consultation",
    "schedule",
    "reschedule",
    "availability",
    "cita",
    "consulta",
    "agendar",
    "reservar",
];

pub(crate) const SIMPLE_KEYWORDS: &[&str] = &[
    "hours",
    "location",
    "located",
    "cost",
    "price",
    "fee",
    "contact",
    "address",
    "phone",
    "directions",
    "horario",
    "ubicación",
    "ubicados",
    "precio",
    "costo",
    "dirección",
    "teléfono",
];

/// A single classification rule: a category plus the keyword pattern that
/// selects it, with an optional length gate.
///
/// Rules are evaluated in order, first match wins; the rule carries no
/// confidence of its own; that is static per category.
#[derive(Debug)]
pub struct CategoryRule {
    category: MessageCategory,
    pattern: Regex,
    max_chars: Option<usize>,
}

impl CategoryRule {
    /// Compile a rule matching any of `keywords` as whole words or phrases,
    /// case-insensitively.
    pub fn new(category: MessageCategory, keywords: &[&str]) -> Result<Self, regex::Error> {
        let alternation = keywords
            .iter()
            .map(|kw| regex::escape(kw))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!(r"(?i)\b(?:{})\b", alternation))?;
        Ok(Self {
            category,
            pattern,
            max_chars: None,
        })
    }

    /// Gate this rule to messages of at most `max_chars` characters
    /// (trimmed). Used by the greeting rule so a long message that merely
    /// mentions a greeting word in passing is not mistaken for one.
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = Some(max_chars);
        self
    }

    pub fn category(&self) -> MessageCategory {
        self.category
    }

    pub(crate) fn matches(&self, trimmed: &str) -> bool {
        if let Some(max) = self.max_chars {
            if trimmed.chars().count() > max {
                return false;
            }
        }
        self.pattern.is_match(trimmed)
    }
}

/// The default rule table, in precedence order:
/// emergency > greeting > appointment > simple.
pub(crate) fn default_rules(greeting_max_chars: usize) -> Vec<CategoryRule> {
    let defs: [(MessageCategory, &[&str], Option<usize>); 4] = [
        (MessageCategory::Emergency, EMERGENCY_KEYWORDS, None),
        (
            MessageCategory::Greeting,
            GREETING_KEYWORDS,
            Some(greeting_max_chars),
        ),
        (MessageCategory::Appointment, APPOINTMENT_KEYWORDS, None),
        (MessageCategory::Simple, SIMPLE_KEYWORDS, None),
    ];

    defs.into_iter()
        .filter_map(
            |(category, keywords, max_chars)| match CategoryRule::new(category, keywords) {
                Ok(rule) => Some(match max_chars {
                    Some(max) => rule.with_max_chars(max),
                    None => rule,
                }),
                Err(e) => {
                    warn!("failed to compile '{}' rule: {}", category, e);
                    None
                }
            },
        )
        .collect()
}
