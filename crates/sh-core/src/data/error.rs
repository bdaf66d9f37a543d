use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataError {
    #[error("a file collection must contain at least one file")]
    EmptyFileCollection,
}
