use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::DataError;

/// A single filesystem entry placed on the clipboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileData {
    full_path: PathBuf,
    file_name: String,
    exists: bool,
}

impl FileData {
    /// Creates a file item from its full path.
    ///
    /// `exists` is whatever the capturing adapter observed at capture time;
    /// the model never touches the filesystem itself.
    pub fn new(full_path: impl Into<PathBuf>, exists: bool) -> Self {
        let full_path = full_path.into();
        let file_name = full_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            full_path,
            file_name,
            exists,
        }
    }

    pub fn full_path(&self) -> &Path {
        &self.full_path
    }

    /// Leaf name of the path, empty for paths without one (e.g. `/`).
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn exists(&self) -> bool {
        self.exists
    }
}

/// An ordered, non-empty selection of files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "Vec<FileData>", into = "Vec<FileData>")]
pub struct FileCollectionData {
    files: Vec<FileData>,
}

impl FileCollectionData {
    pub fn new(files: Vec<FileData>) -> Result<Self, DataError> {
        if files.is_empty() {
            return Err(DataError::EmptyFileCollection);
        }
        Ok(Self { files })
    }

    pub fn files(&self) -> &[FileData] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Never true for a collection built through [`FileCollectionData::new`].
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl TryFrom<Vec<FileData>> for FileCollectionData {
    type Error = DataError;

    fn try_from(files: Vec<FileData>) -> Result<Self, Self::Error> {
        Self::new(files)
    }
}

impl From<FileCollectionData> for Vec<FileData> {
    fn from(collection: FileCollectionData) -> Self {
        collection.files
    }
}
