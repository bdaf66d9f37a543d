use anyhow::{anyhow, Result};
use serde::Serialize;
use std::any::Any;

use sh_core::control::{ControlFactory, ControlModel};
use sh_core::data::{DataItem, DataPackage};

const TEXT_CONTROL_PRIORITY: i32 = 30;
const DEFAULT_PREVIEW_CHARS: usize = 100;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TextControl {
    pub preview: String,
    pub char_count: usize,
}

impl ControlModel for TextControl {
    fn name(&self) -> &'static str {
        "text"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub struct TextControlFactory {
    preview_chars: usize,
}

impl TextControlFactory {
    pub fn new(preview_chars: usize) -> Self {
        Self { preview_chars }
    }
}

impl Default for TextControlFactory {
    fn default() -> Self {
        Self::new(DEFAULT_PREVIEW_CHARS)
    }
}

/// Trimmed text, cut to `max_chars` characters with a `...` suffix.
fn generate_preview(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

impl ControlFactory for TextControlFactory {
    fn priority(&self) -> i32 {
        TEXT_CONTROL_PRIORITY
    }

    fn can_build_control(&self, package: &DataPackage) -> bool {
        package
            .items()
            .iter()
            .any(|item| matches!(item, DataItem::Text(_)))
    }

    fn build_control(&self, package: &DataPackage) -> Result<Box<dyn ControlModel>> {
        let text = package
            .items()
            .iter()
            .find_map(|item| match item {
                DataItem::Text(text) => Some(text.text.as_str()),
                _ => None,
            })
            .ok_or_else(|| anyhow!("package contains no text data"))?;

        Ok(Box::new(TextControl {
            preview: generate_preview(text, self.preview_chars),
            char_count: text.chars().count(),
        }))
    }
}
