use thiserror::Error;
use trail_core::{Extent, NetworkError};

/// Raised when a viewport mapping cannot be fitted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MappingError {
    #[error("network extent {0:?} is degenerate")]
    DegenerateNetwork(Extent),

    #[error("viewport extent {0:?} is degenerate")]
    DegenerateViewport(Extent),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("crossing duration must be positive and finite, got {0}")]
    InvalidCrossingDuration(f64),

    #[error("malformed viewer config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Umbrella error for the viewer controller.
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Mapping(#[from] MappingError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
