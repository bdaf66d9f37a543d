use std::path::{Component, Path, PathBuf};

/// Deepest directory shared by the parent folders of `paths`.
///
/// Paths are compared component by component, so `/tmp/srcA/x` and
/// `/tmp/srcB/y` share `/tmp`, not `/tmp/src`. Absolute paths always share
/// at least the root; paths with nothing in common (relative paths in
/// different folders, different drive prefixes) yield an empty path.
pub fn find_common_folder<P: AsRef<Path>>(paths: &[P]) -> PathBuf {
    let mut folders = paths.iter().map(|p| parent_folder(p.as_ref()));

    let Some(first) = folders.next() else {
        return PathBuf::new();
    };

    let mut common: Vec<Component<'_>> = first.components().collect();
    for folder in folders {
        let shared = common
            .iter()
            .zip(folder.components())
            .take_while(|(left, right)| **left == *right)
            .count();
        common.truncate(shared);
    }

    common.iter().collect()
}

fn parent_folder(path: &Path) -> &Path {
    path.parent().unwrap_or(path)
}
