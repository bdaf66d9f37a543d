use std::path::{Path, PathBuf};
use url::Url;

use sh_core::data::{DataItem, DataPackage, FileCollectionData, FileData, ImageData, TextData};
use sh_core::ports::CaptureError;

/// PNG-encoded image as read from the clipboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawImage {
    pub width: u32,
    pub height: u32,
    pub png: Vec<u8>,
}

/// Clipboard formats read in one pass, before classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawClipboardSnapshot {
    /// Paths or `file://` URIs, in clipboard order.
    pub files: Vec<String>,
    pub image: Option<RawImage>,
    pub text: Option<String>,
}

/// Converts a `file://` URI to a path; plain paths pass through.
///
/// Entries that look like URIs but do not name a local file are kept
/// verbatim as paths.
pub fn file_uri_to_path(entry: &str) -> PathBuf {
    if !entry.starts_with("file:") {
        return PathBuf::from(entry);
    }
    Url::parse(entry)
        .ok()
        .and_then(|url| url.to_file_path().ok())
        .unwrap_or_else(|| PathBuf::from(entry))
}

/// Classifies a snapshot into a [`DataPackage`].
///
/// Files come first, then the image, then non-blank text. A single file
/// becomes a [`FileData`]; several become one [`FileCollectionData`].
/// `exists` reports whether a path is currently on disk.
pub fn classify_snapshot(
    snapshot: RawClipboardSnapshot,
    exists: impl Fn(&Path) -> bool,
) -> Result<DataPackage, CaptureError> {
    let mut items = Vec::new();

    let mut files: Vec<FileData> = snapshot
        .files
        .iter()
        .map(|entry| entry.trim())
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let path = file_uri_to_path(entry);
            let present = exists(&path);
            FileData::new(path, present)
        })
        .collect();
    match files.len() {
        0 => {}
        1 => items.extend(files.pop().map(DataItem::from)),
        _ => items.push(DataItem::from(
            FileCollectionData::new(files).map_err(anyhow::Error::from)?,
        )),
    }

    if let Some(image) = snapshot.image {
        items.push(DataItem::from(ImageData {
            width: image.width,
            height: image.height,
            bytes: image.png,
        }));
    }

    if let Some(text) = snapshot.text.filter(|text| !text.trim().is_empty()) {
        items.push(DataItem::from(TextData { text }));
    }

    if items.is_empty() {
        return Err(CaptureError::FormatNotUnderstood);
    }
    Ok(DataPackage::new(items))
}
