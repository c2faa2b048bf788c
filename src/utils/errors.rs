use std::io;
use thiserror::Error;

/// Failures reported by the lift/drag model. None of them stop the host, they
/// are logged through [`crate::diagnostics::Diagnostics`] and the model carries on.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LiftDragError {
    #[error("Invalid attachment: {0}")]
    InvalidAttachment(String),

    #[error("{0} not specified, defaulting to {1}")]
    MissingCoefficient(&'static str, f64),

    #[error("{name} could not be read ({reason}), defaulting to {default}")]
    InvalidCoefficient {
        name: &'static str,
        reason: String,
        default: f64,
    },

    #[error("Failed to get velocity of link {0}")]
    VelocityUnavailable(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Missing element: {0}")]
    Missing(String),

    #[error("Element {key} is not a {expected}")]
    TypeMismatch { key: String, expected: &'static str },
}
