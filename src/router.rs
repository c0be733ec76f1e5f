//! Per-message triage decision.
//!
//! Ties the classifier, the instant-response table, and the dynamic cache
//! into the single decision the chat orchestrator acts on: answer from the
//! canned table, answer from the cache, or escalate to the external
//! agent/database/CRM pipeline and write the computed reply back.

use crate::cache::{ResponseCache, cache_key};
use crate::classifier::{Classification, MessageCategory, MessageClassifier};
use crate::config::TriageConfig;
use crate::errors::IntakeResult;
use crate::responses::{Language, ResponseKind, faq_kind, instant_response};
use std::sync::Arc;
use tracing::debug;

/// What the orchestrator should do with one inbound message.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteDecision {
    /// Serve a canned reply from the static table; no external systems.
    Instant {
        classification: Classification,
        kind: ResponseKind,
        reply: &'static str,
    },
    /// Serve a previously computed reply from the dynamic cache.
    Cached {
        classification: Classification,
        reply: String,
    },
    /// Run the full agent/database/CRM pipeline. When `cache_key` is set,
    /// the computed reply should be written back via `record_response`;
    /// emergencies carry no key and are never memoized.
    Escalate {
        classification: Classification,
        cache_key: Option<String>,
    },
}

/// Routes inbound messages through classification and both caches.
#[derive(Debug)]
pub struct MessageRouter {
    classifier: MessageClassifier,
    cache: Arc<ResponseCache>,
}

impl MessageRouter {
    /// Router with the default classifier over a shared cache.
    pub fn new(cache: Arc<ResponseCache>) -> Self {
        Self {
            classifier: MessageClassifier::new(),
            cache,
        }
    }

    /// Router built from configuration, with its own cache instance.
    pub fn from_config(config: &TriageConfig) -> IntakeResult<Self> {
        Ok(Self {
            classifier: MessageClassifier::from_config(&config.classifier)?,
            cache: Arc::new(ResponseCache::with_config(&config.cache)?),
        })
    }

    /// Router with a caller-supplied classifier (custom rule table).
    pub fn with_classifier(classifier: MessageClassifier, cache: Arc<ResponseCache>) -> Self {
        Self { classifier, cache }
    }

    /// Decide how to handle one inbound message.
    pub fn route(&self, message: &str, language: Language) -> RouteDecision {
        let classification = self.classifier.classify(message);
        debug!(
            "classified message as '{}' (confidence {})",
            classification.category, classification.confidence
        );

        match classification.category {
            // An urgent matter never gets a canned or stale answer: the
            // full pipeline runs every time, and nothing is memoized.
            MessageCategory::Emergency => RouteDecision::Escalate {
                classification,
                cache_key: None,
            },
            MessageCategory::Greeting => {
                match instant_response(language, ResponseKind::Greeting) {
                    Some(reply) => RouteDecision::Instant {
                        classification,
                        kind: ResponseKind::Greeting,
                        reply,
                    },
                    None => self.cached_or_escalate(classification, message, language),
                }
            }
            MessageCategory::Simple => {
                if let Some(kind) = faq_kind(message) {
                    if let Some(reply) = instant_response(language, kind) {
                        return RouteDecision::Instant {
                            classification,
                            kind,
                            reply,
                        };
                    }
                }
                self.cached_or_escalate(classification, message, language)
            }
            MessageCategory::Appointment | MessageCategory::Complex => {
                self.cached_or_escalate(classification, message, language)
            }
        }
    }

    fn cached_or_escalate(
        &self,
        classification: Classification,
        message: &str,
        language: Language,
    ) -> RouteDecision {
        let key = cache_key(language, message);
        match self.cache.get(&key) {
            Some(reply) => {
                debug!("serving cached response for '{}'", key);
                RouteDecision::Cached {
                    classification,
                    reply,
                }
            }
            None => RouteDecision::Escalate {
                classification,
                cache_key: Some(key),
            },
        }
    }

    /// Orchestrator write-back path: store a freshly computed reply under
    /// the key handed out by an earlier `Escalate` decision.
    pub fn record_response(&self, key: &str, reply: &str) {
        self.cache.set(key, reply);
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }
}
