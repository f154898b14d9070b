/// Failure to read a color literal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,
    #[error("hex color must have 6 or 8 digits, got {len}")]
    InvalidLength { len: usize },
    #[error("invalid hex digit at position {position}")]
    InvalidHex { position: usize },
}

/// Failure to load a [`ColorConfig`](crate::ColorConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid color config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("gamma exponent must be finite and positive, got {0}")]
    InvalidGamma(f32),
}
