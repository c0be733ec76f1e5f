use serde::{Deserialize, Serialize};

/// Message category enumeration for inbound chat triage.
///
/// Exactly one category is assigned per message. Precedence when several
/// keyword sets match is encoded in the classifier's rule order
/// (emergency > greeting > appointment > simple), with `Complex` as the
/// conservative fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageCategory {
    Greeting,
    Simple,
    Appointment,
    Complex,
    Emergency,
}

impl MessageCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageCategory::Greeting => "greeting",
            MessageCategory::Simple => "simple",
            MessageCategory::Appointment => "appointment",
            MessageCategory::Complex => "complex",
            MessageCategory::Emergency => "emergency",
        }
    }

    /// Heuristic confidence attached to this category. Static per category,
    /// not computed from match strength.
    pub fn base_confidence(self) -> f32 {
        match self {
            MessageCategory::Emergency => 1.0,
            MessageCategory::Greeting => 0.95,
            MessageCategory::Appointment => 0.9,
            MessageCategory::Simple => 0.85,
            MessageCategory::Complex => 0.7,
        }
    }

    /// Whether handling this category requires the conversational agent.
    pub fn needs_agent(self) -> bool {
        match self {
            MessageCategory::Greeting | MessageCategory::Simple => false,
            MessageCategory::Appointment | MessageCategory::Complex | MessageCategory::Emergency => {
                true
            }
        }
    }

    /// Whether handling this category requires a case/contact database lookup.
    pub fn needs_database(self) -> bool {
        match self {
            MessageCategory::Greeting | MessageCategory::Simple => false,
            MessageCategory::Appointment | MessageCategory::Complex | MessageCategory::Emergency => {
                true
            }
        }
    }

    /// Whether handling this category must be synced to the CRM.
    pub fn needs_crm_sync(self) -> bool {
        match self {
            MessageCategory::Greeting | MessageCategory::Simple => false,
            MessageCategory::Appointment | MessageCategory::Complex | MessageCategory::Emergency => {
                true
            }
        }
    }
}

impl std::str::FromStr for MessageCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "greeting" => Ok(MessageCategory::Greeting),
            "simple" => Ok(MessageCategory::Simple),
            "appointment" => Ok(MessageCategory::Appointment),
            "complex" => Ok(MessageCategory::Complex),
            "emergency" => Ok(MessageCategory::Emergency),
            _ => Err(format!("Unknown message category: {}", s)),
        }
    }
}

impl std::fmt::Display for MessageCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classification of a single inbound message.
///
/// Value object created fresh per `classify` call; the routing flags are
/// derived purely from the category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    pub category: MessageCategory,
    pub confidence: f32,
    pub needs_agent: bool,
    pub needs_database: bool,
    pub needs_crm_sync: bool,
}

impl From<MessageCategory> for Classification {
    fn from(category: MessageCategory) -> Self {
        Classification {
            category,
            confidence: category.base_confidence(),
            needs_agent: category.needs_agent(),
            needs_database: category.needs_database(),
            needs_crm_sync: category.needs_crm_sync(),
        }
    }
}
