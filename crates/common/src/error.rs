use thiserror::Error;

#[derive(Debug, Error)]
pub enum CysafeError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("database error: {0}")]
    Database(String),

    /// The pattern table could not be opened. Operator-level
    /// misconfiguration, surfaced verbatim, never retried.
    #[error("pattern source unavailable: {0}")]
    SourceUnavailable(String),

    /// Classification was requested for a blank URL.
    #[error("empty input: {0}")]
    EmptyInput(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("not found: {0}")]
    NotFound(String),

    /// A remote classifier call failed or returned an unusable body.
    #[error("upstream error: {0}")]
    Upstream(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type CysafeResult<T> = Result<T, CysafeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_carry_their_context() {
        let err = CysafeError::SourceUnavailable("patterns.csv: no such file".to_string());
        assert_eq!(
            err.to_string(),
            "pattern source unavailable: patterns.csv: no such file"
        );

        let err = CysafeError::EmptyInput("no URL provided".to_string());
        assert_eq!(err.to_string(), "empty input: no URL provided");
    }
}
