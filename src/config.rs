//! Configuration schema.
//!
//! This crate has no config file or environment surface of its own; the
//! host deserializes these structs from wherever it keeps its settings and
//! hands them in at construction time.

use crate::errors::{IntakeError, IntakeResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Seconds a cached response stays servable.
    #[serde(default = "default_ttl_seconds", rename = "ttlSeconds")]
    pub ttl_seconds: u64,
    /// Entry count at which inserting a new key evicts the oldest entry.
    #[serde(default = "default_max_entries", rename = "maxEntries")]
    pub max_entries: usize,
}

fn default_ttl_seconds() -> u64 {
    300
}

fn default_max_entries() -> usize {
    100
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: default_ttl_seconds(),
            max_entries: default_max_entries(),
        }
    }
}

impl CacheConfig {
    pub fn validate(&self) -> IntakeResult<()> {
        if self.ttl_seconds == 0 {
            return Err(IntakeError::Config(
                "cache ttlSeconds must be greater than zero".into(),
            ));
        }
        if self.max_entries == 0 {
            return Err(IntakeError::Config(
                "cache maxEntries must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Character gate for the greeting rule: longer messages are never
    /// classified as greetings even when they contain a greeting word.
    #[serde(default = "default_greeting_max_chars", rename = "greetingMaxChars")]
    pub greeting_max_chars: usize,
}

fn default_greeting_max_chars() -> usize {
    20
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            greeting_max_chars: default_greeting_max_chars(),
        }
    }
}

impl ClassifierConfig {
    pub fn validate(&self) -> IntakeResult<()> {
        if self.greeting_max_chars == 0 {
            return Err(IntakeError::Config(
                "classifier greetingMaxChars must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

/// Top-level settings for the triage layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TriageConfig {
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub classifier: ClassifierConfig,
}

impl TriageConfig {
    pub fn validate(&self) -> IntakeResult<()> {
        self.cache.validate()?;
        self.classifier.validate()
    }
}
