use serde::{Deserialize, Serialize};

use super::{DataItem, DataKind};

/// Immutable capture of the clipboard as typed items.
///
/// Items keep the order provided by the capture source. Several items of the
/// same kind are allowed. There are no mutation operations; a new capture
/// produces a new package.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataPackage {
    items: Vec<DataItem>,
    /// unix epoch millis
    captured_at_ms: i64,
}

impl DataPackage {
    pub fn new(items: Vec<DataItem>) -> Self {
        Self::with_timestamp(items, chrono::Utc::now().timestamp_millis())
    }

    pub fn with_timestamp(items: Vec<DataItem>, captured_at_ms: i64) -> Self {
        Self {
            items,
            captured_at_ms,
        }
    }

    pub fn items(&self) -> &[DataItem] {
        &self.items
    }

    pub fn captured_at_ms(&self) -> i64 {
        self.captured_at_ms
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn kinds(&self) -> impl Iterator<Item = DataKind> + '_ {
        self.items.iter().map(DataItem::kind)
    }

    pub fn contains_kind(&self, kind: DataKind) -> bool {
        self.kinds().any(|k| k == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FileData;

    #[test]
    fn items_keep_capture_order_and_allow_duplicates() {
        let package = DataPackage::with_timestamp(
            vec![
                DataItem::text("first"),
                DataItem::from(FileData::new("/x/y.txt", false)),
                DataItem::text("second"),
            ],
            42,
        );

        let kinds: Vec<_> = package.kinds().collect();
        assert_eq!(kinds, vec![DataKind::Text, DataKind::File, DataKind::Text]);
        assert_eq!(package.captured_at_ms(), 42);
        assert_eq!(package.len(), 3);
        assert!(package.contains_kind(DataKind::File));
        assert!(!package.contains_kind(DataKind::Image));
    }
}
