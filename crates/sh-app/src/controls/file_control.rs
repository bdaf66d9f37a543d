use anyhow::{anyhow, Result};
use serde::Serialize;
use std::any::Any;

use sh_core::control::{ControlFactory, ControlModel};
use sh_core::data::{DataItem, DataPackage};

const FILE_CONTROL_PRIORITY: i32 = 10;

/// One row of a [`FileListControl`].
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FileEntryView {
    pub name: String,
    pub path: String,
    pub exists: bool,
}

/// Lists the files of the first file-bearing item.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FileListControl {
    pub entries: Vec<FileEntryView>,
}

impl ControlModel for FileListControl {
    fn name(&self) -> &'static str {
        "file_list"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FileControlFactory;

impl ControlFactory for FileControlFactory {
    fn priority(&self) -> i32 {
        FILE_CONTROL_PRIORITY
    }

    fn can_build_control(&self, package: &DataPackage) -> bool {
        package.kinds().any(|kind| kind.is_file_like())
    }

    fn build_control(&self, package: &DataPackage) -> Result<Box<dyn ControlModel>> {
        let files = package
            .items()
            .iter()
            .find_map(DataItem::files)
            .ok_or_else(|| anyhow!("package contains no file data"))?;

        let entries = files
            .iter()
            .map(|file| FileEntryView {
                name: file.file_name().to_string(),
                path: file.full_path().display().to_string(),
                exists: file.exists(),
            })
            .collect();

        Ok(Box::new(FileListControl { entries }))
    }
}
