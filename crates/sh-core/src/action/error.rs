use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActionError {
    /// Programmer-contract violation, e.g. an empty file sequence.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The action reached a state its applicability test should have ruled out.
    #[error("unexpected state: {0}")]
    UnexpectedState(String),

    /// Filesystem, archive or clipboard failure, passed through unchanged.
    #[error(transparent)]
    Io(#[from] anyhow::Error),
}
