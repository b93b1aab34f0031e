use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    // Configuration errors
    #[error("{name} has {len} values, expected 1 or {expected}")]
    BroadcastMismatch {
        name: &'static str,
        len: usize,
        expected: usize,
    },

    #[error("Initial dims need exactly 3 values (channels, width, height), got {0}")]
    InitialDims(usize),

    #[error("{0} must be positive")]
    NonPositive(&'static str),

    #[error("Layer {index}: convolution stride must be at least 1")]
    ZeroStride { index: usize },

    #[error("{name} value {value} is too large")]
    ValueTooLarge { name: &'static str, value: usize },

    #[error("Layer {index}: spatial size overflows a 64-bit integer")]
    DimOverflow { index: usize },

    #[error("Layer tags \"{tags}\" cover {available} layers but {expected} hidden dims were given")]
    LayerTagsTooShort {
        tags: String,
        available: usize,
        expected: usize,
    },

    // Config file errors
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Config section [{0}] is missing")]
    MissingSection(String),

    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },

    #[error("INI error: {0}")]
    Ini(#[from] ini::Error),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
