use thiserror::Error;

/// Error taxonomy for the analysis and simulation engine.
///
/// Validation errors are detected before any scoring or simulation work
/// begins and always name the offending field with enough context to
/// correct the input. The engine never returns partial results.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// Reserved for numeric guards; should not occur for well-formed input.
    #[error("computation failed: {reason}")]
    Computation { reason: String },
}

impl EngineError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_names_the_field() {
        let err = EngineError::validation("mutation_rate", "expected a probability in [0, 1], got 1.5");
        assert_eq!(
            err.to_string(),
            "invalid mutation_rate: expected a probability in [0, 1], got 1.5"
        );
    }
}
