//! Category discovery over a source list directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// A discovered category: the name used for the output artifact and the
/// source file it was derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Source file stem, e.g. `streaming` for `streaming.lst`
    pub name: String,
    /// Full path to the source list file
    pub path: PathBuf,
}

/// Discover categories under a source root.
///
/// Matches plain files directly under `root` whose extension equals
/// `extension` (no leading dot). Results are sorted lexicographically by
/// file name so compilation output is reproducible across runs.
///
/// A root that cannot be listed is a configuration error; a root with no
/// matching files is a legitimate empty result.
pub fn discover(root: impl AsRef<Path>, extension: &str) -> Result<Vec<Category>> {
    let root = root.as_ref();
    let dir = fs::read_dir(root).map_err(|source| Error::SourceRoot {
        path: root.to_path_buf(),
        source,
    })?;

    let mut categories = Vec::new();
    for entry in dir {
        let entry = entry.map_err(|source| Error::SourceRoot {
            path: root.to_path_buf(),
            source,
        })?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(extension) {
            continue;
        }

        let name = match path.file_stem().and_then(|s| s.to_str()) {
            Some(stem) => stem.to_string(),
            None => continue,
        };

        categories.push(Category { name, path });
    }

    categories.sort_by(|a, b| a.path.cmp(&b.path));

    log::debug!(
        "discovered {} categories under {}",
        categories.len(),
        root.display()
    );

    Ok(categories)
}
