use serde::{Deserialize, Serialize};
use std::fmt;

use super::{FileCollectionData, FileData};

/// Variant tag declared by every [`DataItem`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DataKind {
    File,
    FileCollection,
    Text,
    Image,
    Custom,
}

impl DataKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataKind::File => "file",
            DataKind::FileCollection => "file_collection",
            DataKind::Text => "text",
            DataKind::Image => "image",
            DataKind::Custom => "custom",
        }
    }

    pub fn is_file_like(&self) -> bool {
        matches!(self, DataKind::File | DataKind::FileCollection)
    }
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// UTF-8 text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextData {
    pub text: String,
}

/// PNG-encoded bitmap
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub bytes: Vec<u8>,
}

/// Any clipboard format without a dedicated variant, kept as raw bytes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomData {
    pub format: String,
    pub bytes: Vec<u8>,
}

/// One typed unit of clipboard content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum DataItem {
    File(FileData),
    FileCollection(FileCollectionData),
    Text(TextData),
    Image(ImageData),
    Custom(CustomData),
}

impl DataItem {
    pub fn kind(&self) -> DataKind {
        match self {
            DataItem::File(_) => DataKind::File,
            DataItem::FileCollection(_) => DataKind::FileCollection,
            DataItem::Text(_) => DataKind::Text,
            DataItem::Image(_) => DataKind::Image,
            DataItem::Custom(_) => DataKind::Custom,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        DataItem::Text(TextData { text: text.into() })
    }

    /// Files carried by this item, in clipboard order.
    ///
    /// Returns `None` for variants that do not reference the filesystem.
    pub fn files(&self) -> Option<&[FileData]> {
        match self {
            DataItem::File(file) => Some(std::slice::from_ref(file)),
            DataItem::FileCollection(collection) => Some(collection.files()),
            _ => None,
        }
    }
}

impl From<FileData> for DataItem {
    fn from(file: FileData) -> Self {
        DataItem::File(file)
    }
}

impl From<FileCollectionData> for DataItem {
    fn from(collection: FileCollectionData) -> Self {
        DataItem::FileCollection(collection)
    }
}

impl From<TextData> for DataItem {
    fn from(text: TextData) -> Self {
        DataItem::Text(text)
    }
}

impl From<ImageData> for DataItem {
    fn from(image: ImageData) -> Self {
        DataItem::Image(image)
    }
}

impl From<CustomData> for DataItem {
    fn from(custom: CustomData) -> Self {
        DataItem::Custom(custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_reports_its_kind() {
        let collection =
            FileCollectionData::new(vec![FileData::new("/a/b.txt", true)]).unwrap();
        let cases = [
            (DataItem::from(FileData::new("/a/b.txt", true)), DataKind::File),
            (DataItem::from(collection), DataKind::FileCollection),
            (DataItem::text("hello"), DataKind::Text),
            (
                DataItem::from(ImageData {
                    width: 1,
                    height: 1,
                    bytes: vec![0],
                }),
                DataKind::Image,
            ),
            (
                DataItem::from(CustomData {
                    format: "application/x-thing".into(),
                    bytes: vec![],
                }),
                DataKind::Custom,
            ),
        ];

        for (item, kind) in cases {
            assert_eq!(item.kind(), kind);
        }
    }

    #[test]
    fn files_exposes_single_and_collection_members() {
        let single = DataItem::from(FileData::new("/a/one.txt", true));
        assert_eq!(single.files().map(|f| f.len()), Some(1));

        let collection = DataItem::from(
            FileCollectionData::new(vec![
                FileData::new("/a/one.txt", true),
                FileData::new("/a/two.txt", true),
            ])
            .unwrap(),
        );
        assert_eq!(collection.files().map(|f| f.len()), Some(2));

        assert!(DataItem::text("x").files().is_none());
    }

    #[test]
    fn serialized_form_carries_kind_tag() {
        let json = serde_json::to_value(DataItem::text("hi")).unwrap();
        assert_eq!(json["kind"], "text");
        assert_eq!(json["data"]["text"], "hi");
    }
}
