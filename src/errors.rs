use thiserror::Error;

/// Error type that captures common catalog and CLI failures.
#[derive(Debug, Error)]
pub enum FinmexError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error("No {0} cards registered yet")]
    EmptySection(&'static str),
    #[error("At least {needed} {kind} cards are required, found {found}")]
    NotEnoughCards {
        kind: &'static str,
        needed: usize,
        found: usize,
    },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
