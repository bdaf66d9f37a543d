use anyhow::{anyhow, Result};
use serde::Serialize;
use std::any::Any;

use sh_core::control::{ControlFactory, ControlModel};
use sh_core::data::{DataItem, DataPackage};

const IMAGE_CONTROL_PRIORITY: i32 = 20;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ImageControl {
    pub width: u32,
    pub height: u32,
    pub size_bytes: usize,
}

impl ControlModel for ImageControl {
    fn name(&self) -> &'static str {
        "image"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ImageControlFactory;

impl ControlFactory for ImageControlFactory {
    fn priority(&self) -> i32 {
        IMAGE_CONTROL_PRIORITY
    }

    fn can_build_control(&self, package: &DataPackage) -> bool {
        package
            .items()
            .iter()
            .any(|item| matches!(item, DataItem::Image(_)))
    }

    fn build_control(&self, package: &DataPackage) -> Result<Box<dyn ControlModel>> {
        let image = package
            .items()
            .iter()
            .find_map(|item| match item {
                DataItem::Image(image) => Some(image),
                _ => None,
            })
            .ok_or_else(|| anyhow!("package contains no image data"))?;

        Ok(Box::new(ImageControl {
            width: image.width,
            height: image.height,
            size_bytes: image.bytes.len(),
        }))
    }
}
