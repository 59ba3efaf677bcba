use thiserror::Error;

/// Errors produced while validating a configuration or building a batch.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    InvalidConfiguration {
        field: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },
    /// The alphabet/length pair cannot represent that many distinct tokens.
    #[error("cannot produce {requested} distinct tokens, only {capacity} are possible")]
    InsufficientEntropy { requested: usize, capacity: u128 },
    /// Draw budget ran out before enough distinct tokens were seen.
    #[error("gave up after {attempts} attempts with {distinct} of {requested} distinct tokens")]
    AttemptsExhausted {
        requested: usize,
        distinct: usize,
        attempts: usize,
    },
}

impl TokenError {
    /// True for both flavours of running out of distinct tokens.
    pub fn is_insufficient_entropy(&self) -> bool {
        matches!(
            self,
            TokenError::InsufficientEntropy { .. } | TokenError::AttemptsExhausted { .. }
        )
    }
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}
