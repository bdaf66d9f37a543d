use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaptureError {
    /// The clipboard holds nothing that maps onto a known data variant.
    #[error("clipboard format not understood")]
    FormatNotUnderstood,

    #[error("clipboard capture failed: {0}")]
    Platform(#[from] anyhow::Error),
}
