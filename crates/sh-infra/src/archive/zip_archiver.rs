use anyhow::{Context, Result};
use async_trait::async_trait;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use sh_core::ports::ArchiverPort;

const ZIP_EXTENSION: &str = "zip";

/// Deflate-compressed zip archives.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZipArchiver;

impl ZipArchiver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ArchiverPort for ZipArchiver {
    async fn compress_directory(&self, source_dir: &Path, archive_path: &Path) -> Result<()> {
        let source_dir = source_dir.to_path_buf();
        let archive_path = archive_path.to_path_buf();

        tokio::task::spawn_blocking(move || write_archive(&source_dir, &archive_path))
            .await
            .context("Archive task panicked")?
    }

    fn extension(&self) -> &str {
        ZIP_EXTENSION
    }
}

fn write_archive(source_dir: &Path, archive_path: &Path) -> Result<()> {
    let file = File::create(archive_path)
        .with_context(|| format!("Failed to create archive {}", archive_path.display()))?;
    let mut zip = ZipWriter::new(file);
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    add_directory(&mut zip, source_dir, source_dir, options)?;

    zip.finish()
        .with_context(|| format!("Failed to finalize archive {}", archive_path.display()))?;
    debug!(archive = %archive_path.display(), "Archive written");
    Ok(())
}

fn add_directory(
    zip: &mut ZipWriter<File>,
    base_path: &Path,
    current_path: &Path,
    options: SimpleFileOptions,
) -> Result<()> {
    let mut entries = std::fs::read_dir(current_path)
        .with_context(|| format!("Failed to read directory {}", current_path.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<io::Result<Vec<PathBuf>>>()?;
    entries.sort();

    for path in entries {
        let name = entry_name(base_path, &path)?;

        if path.is_dir() {
            zip.add_directory(format!("{name}/"), options)
                .with_context(|| format!("Failed to add directory {name} to archive"))?;
            add_directory(zip, base_path, &path, options)?;
        } else {
            zip.start_file(name.as_str(), options)
                .with_context(|| format!("Failed to start archive entry {name}"))?;
            let mut reader = BufReader::new(
                File::open(&path)
                    .with_context(|| format!("Failed to open {}", path.display()))?,
            );
            io::copy(&mut reader, zip)
                .with_context(|| format!("Failed to write {name} to archive"))?;
        }
    }
    Ok(())
}

/// Archive entry names use `/` regardless of platform.
fn entry_name(base_path: &Path, path: &Path) -> Result<String> {
    let relative = path
        .strip_prefix(base_path)
        .with_context(|| format!("{} is outside {}", path.display(), base_path.display()))?;

    Ok(relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/"))
}
