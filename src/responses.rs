//! Static instant-response table.
//!
//! Pre-written replies for the handful of message shapes that never need
//! the agent pipeline, keyed by language and response kind. Loaded at
//! process start, immutable for the process lifetime. Both languages must
//! define every kind; the symmetry is a tested invariant.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Supported reply languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Es,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Es];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            _ => Err(format!("Unknown language tag: {}", s)),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The canned-reply topics the table defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseKind {
    Greeting,
    Hours,
    Location,
    Contact,
    Thanks,
    Bye,
}

impl ResponseKind {
    pub const ALL: [ResponseKind; 6] = [
        ResponseKind::Greeting,
        ResponseKind::Hours,
        ResponseKind::Location,
        ResponseKind::Contact,
        ResponseKind::Thanks,
        ResponseKind::Bye,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseKind::Greeting => "greeting",
            ResponseKind::Hours => "hours",
            ResponseKind::Location => "location",
            ResponseKind::Contact => "contact",
            ResponseKind::Thanks => "thanks",
            ResponseKind::Bye => "bye",
        }
    }
}

impl std::str::FromStr for ResponseKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "greeting" => Ok(ResponseKind::Greeting),
            "hours" => Ok(ResponseKind::Hours),
            "location" => Ok(ResponseKind::Location),
            "contact" => Ok(ResponseKind::Contact),
            "thanks" => Ok(ResponseKind::Thanks),
            "bye" => Ok(ResponseKind::Bye),
            _ => Err(format!("Unknown response kind: {}", s)),
        }
    }
}

impl std::fmt::Display for ResponseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

const INSTANT_RESPONSES: &[(Language, ResponseKind, &str)] = &[
    (
        Language::En,
        ResponseKind::Greeting,
        "Hello! Thank you for contacting our office. How can we help you today?",
    ),
    (
        Language::En,
        ResponseKind::Hours,
        "Our office is open Monday through Friday, 8:30 AM to 5:30 PM.",
    ),
    (
        Language::En,
        ResponseKind::Location,
        "We are located at 123 North Tryon Street, Suite 400, Charlotte, NC 28202.",
    ),
    (
        Language::En,
        ResponseKind::Contact,
        "You can reach us at (704) 555-0123 or intake@example.com.",
    ),
    (
        Language::En,
        ResponseKind::Thanks,
        "You're welcome! Is there anything else we can help you with?",
    ),
    (
        Language::En,
        ResponseKind::Bye,
        "Thank you for reaching out. Have a great day!",
    ),
    (
        Language::Es,
        ResponseKind::Greeting,
        "¡Hola! Gracias por contactar nuestra oficina. ¿Cómo podemos ayudarle hoy?",
    ),
    (
        Language::Es,
        ResponseKind::Hours,
        "Nuestra oficina está abierta de lunes a viernes, de 8:30 AM a 5:30 PM.",
    ),
    (
        Language::Es,
        ResponseKind::Location,
        "Estamos ubicados en 123 North Tryon Street, Suite 400, Charlotte, NC 28202.",
    ),
    (
        Language::Es,
        ResponseKind::Contact,
        "Puede llamarnos al (704) 555-0123 o escribirnos a intake@example.com.",
    ),
    (
        Language::Es,
        ResponseKind::Thanks,
        "¡De nada! ¿Hay algo más en lo que podamos ayudarle?",
    ),
    (
        Language::Es,
        ResponseKind::Bye,
        "Gracias por comunicarse con nosotros. ¡Que tenga un buen día!",
    ),
];

/// Look up the canned reply for a `(language, kind)` pair. `None` only if
/// the static table lacks the pair.
pub fn instant_response(language: Language, kind: ResponseKind) -> Option<&'static str> {
    INSTANT_RESPONSES
        .iter()
        .find(|(l, k, _)| *l == language && *k == kind)
        .map(|(_, _, text)| *text)
}

static FAQ_PROBES: LazyLock<Vec<(ResponseKind, Regex)>> = LazyLock::new(|| {
    let defs: [(ResponseKind, &str); 3] = [
        (
            ResponseKind::Hours,
            r"(?i)\b(?:hours|open|close|closing|horario|abierto|cierran)\b",
        ),
        (
            ResponseKind::Location,
            r"(?i)\b(?:location|located|address|directions|ubicación|ubicacion|dirección|direccion|dónde|donde)\b",
        ),
        (
            ResponseKind::Contact,
            r"(?i)\b(?:contact|phone|email|call|contacto|teléfono|telefono|correo|llamar)\b",
        ),
    ];
    defs.into_iter()
        .filter_map(|(kind, pattern)| match Regex::new(pattern) {
            Ok(regex) => Some((kind, regex)),
            Err(e) => {
                tracing::warn!("failed to compile faq probe for '{}': {}", kind, e);
                None
            }
        })
        .collect()
});

/// Which canned FAQ topic a simple question is asking about, if any.
/// Probes are checked in table order; `None` means the question has no
/// canned answer and should go through the dynamic cache instead.
pub fn faq_kind(message: &str) -> Option<ResponseKind> {
    FAQ_PROBES
        .iter()
        .find(|(_, regex)| regex.is_match(message))
        .map(|(kind, _)| *kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_table_symmetric_across_languages() {
        for language in Language::ALL {
            for kind in ResponseKind::ALL {
                assert!(
                    instant_response(language, kind).is_some(),
                    "missing instant response for {}/{}",
                    language,
                    kind
                );
            }
        }
    }

    #[test]
    fn test_greeting_lookup() {
        let reply = instant_response(Language::Es, ResponseKind::Greeting).expect("es greeting");
        assert!(reply.contains("Hola"));
    }

    #[test]
    fn test_language_round_trip() {
        for language in Language::ALL {
            assert_eq!(
                Language::from_str(language.as_str()).expect("parse language"),
                language
            );
        }
        assert!(Language::from_str("fr").is_err());
    }

    #[test]
    fn test_response_kind_round_trip() {
        for kind in ResponseKind::ALL {
            assert_eq!(
                ResponseKind::from_str(kind.as_str()).expect("parse kind"),
                kind
            );
        }
        assert!(ResponseKind::from_str("pricing").is_err());
    }

    #[test]
    fn test_faq_kind_hours() {
        assert_eq!(
            faq_kind("What are your office hours?"),
            Some(ResponseKind::Hours)
        );
        assert_eq!(
            faq_kind("¿Cuál es su horario?"),
            Some(ResponseKind::Hours)
        );
    }

    #[test]
    fn test_faq_kind_location() {
        assert_eq!(
            faq_kind("Where is your office located?"),
            Some(ResponseKind::Location)
        );
        assert_eq!(
            faq_kind("¿Dónde están ubicados?"),
            Some(ResponseKind::Location)
        );
    }

    #[test]
    fn test_faq_kind_contact() {
        assert_eq!(
            faq_kind("What's the best phone number for you?"),
            Some(ResponseKind::Contact)
        );
    }

    #[test]
    fn test_faq_kind_none_for_substantive_question() {
        assert_eq!(faq_kind("Can you help with my asylum case?"), None);
        assert_eq!(faq_kind(""), None);
    }
}
