use thiserror::Error;

/// Typed errors for intake.
///
/// Construction is the only fallible surface: runtime operations are total
/// (cache misses are `None`, overflow is silent eviction).
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience alias for results using IntakeError.
pub type IntakeResult<T> = std::result::Result<T, IntakeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = IntakeError::Config("cache maxEntries must be greater than zero".into());
        assert_eq!(
            err.to_string(),
            "Configuration error: cache maxEntries must be greater than zero"
        );
    }
}
