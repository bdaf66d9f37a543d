use anyhow::{anyhow, Result};
use clipboard_rs::{common::RustImage, Clipboard, ClipboardContext, ContentFormat};
use std::path::{Path, PathBuf};

use super::snapshot::{RawClipboardSnapshot, RawImage};

pub(super) fn map_clipboard_err<T>(
    result: std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>,
) -> Result<T> {
    result.map_err(|e| anyhow!(e))
}

/// Reads the formats the pipeline understands.
///
/// A format that is advertised but cannot be read is skipped rather than
/// failing the whole capture.
pub(super) fn read_snapshot(ctx: &ClipboardContext) -> Result<RawClipboardSnapshot> {
    let mut snapshot = RawClipboardSnapshot::default();

    if ctx.has(ContentFormat::Files) {
        match ctx.get_files() {
            Ok(files) => snapshot.files = files,
            Err(err) => tracing::debug!(error = %err, "Skipping unreadable file list"),
        }
    }

    if ctx.has(ContentFormat::Image) {
        if let Ok(image) = ctx.get_image() {
            let (width, height) = image.get_size();
            match image.to_png() {
                Ok(png) => {
                    snapshot.image = Some(RawImage {
                        width,
                        height,
                        png: png.get_bytes().to_vec(),
                    })
                }
                Err(err) => tracing::debug!(error = %err, "Skipping image without PNG encoding"),
            }
        }
    }

    if ctx.has(ContentFormat::Text) {
        if let Ok(text) = ctx.get_text() {
            snapshot.text = Some(text);
        }
    }

    Ok(snapshot)
}

pub(super) fn write_files(ctx: &ClipboardContext, paths: &[PathBuf]) -> Result<()> {
    let files = paths
        .iter()
        .map(|path| to_clipboard_file(path))
        .collect::<Result<Vec<_>>>()?;
    map_clipboard_err(ctx.set_files(files))
}

pub(super) fn write_text(ctx: &ClipboardContext, text: &str) -> Result<()> {
    map_clipboard_err(ctx.set_text(text.to_string()))
}

// X11/Wayland file lists are URI lists
#[cfg(target_os = "linux")]
fn to_clipboard_file(path: &Path) -> Result<String> {
    url::Url::from_file_path(path)
        .map(String::from)
        .map_err(|_| anyhow!("cannot express {} as a file URI", path.display()))
}

#[cfg(not(target_os = "linux"))]
fn to_clipboard_file(path: &Path) -> Result<String> {
    Ok(path.display().to_string())
}

#[cfg(all(test, target_os = "linux"))]
mod tests {
    use super::*;
    use crate::clipboard::file_uri_to_path;

    #[test]
    fn file_uris_are_escaped_and_read_back_unchanged() {
        let paths = [
            "/tmp/Shapeshifter/Compressed folders/src.zip",
            "/tmp/Shapeshifter/Compressed folders/a%20b.zip",
            "/tmp/données/ünïcode #1.txt",
        ];

        for path in paths.map(Path::new) {
            let uri = to_clipboard_file(path).unwrap();
            assert!(!uri.contains(' '), "{uri}");
            assert_eq!(file_uri_to_path(&uri), path, "{uri}");
        }
        assert_eq!(
            to_clipboard_file(Path::new("/tmp/Shapeshifter/Compressed folders/src.zip")).unwrap(),
            "file:///tmp/Shapeshifter/Compressed%20folders/src.zip"
        );
    }

    #[test]
    fn relative_paths_are_rejected() {
        assert!(to_clipboard_file(Path::new("relative/a.txt")).is_err());
    }
}
