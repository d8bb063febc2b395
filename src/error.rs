use thiserror::Error;

/// Top-level error type for the geoclip collision engine.
#[derive(Debug, Error)]
pub enum GeoclipError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Scene(#[from] SceneError),
}

/// Errors raised while building geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("{parameter} must be finite, got {value}")]
    NonFinite { parameter: &'static str, value: f64 },
}

/// Errors raised while validating resolution options.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{parameter} must be positive and finite, got {value}")]
    NonPositive { parameter: &'static str, value: f64 },

    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{0} must be at least 1")]
    ZeroLimit(&'static str),
}

/// Errors related to the hit-box scene.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("hit box not found in scene")]
    HitBoxNotFound,
}

/// Convenience type alias for results using [`GeoclipError`].
pub type Result<T> = std::result::Result<T, GeoclipError>;
