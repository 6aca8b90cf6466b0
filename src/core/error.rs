use thiserror::Error;

/// Errors surfaced by the optimizer and its configuration layer
#[derive(Debug, Error)]
pub enum PsoError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown objective '{0}' (expected sphere, rosenbrock or rastrigin)")]
    UnknownObjective(String),

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("callback failed at iteration {iteration}: {message}")]
    Callback { iteration: u32, message: String },
}

pub type Result<T> = std::result::Result<T, PsoError>;
