//! Font payload lookup
//!
//! Payload files are named after their font id and live in one of a
//! handful of one-letter subdirectories of the cache root, sometimes
//! inside a nested directory with the same name as the id.

use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FontLocator {
    root: PathBuf,
    subdirs: Vec<String>,
}

impl FontLocator {
    pub fn new(root: impl Into<PathBuf>, subdirs: Vec<String>) -> Self {
        Self {
            root: root.into(),
            subdirs,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Find the payload file for `id`, probing subdirectories in order.
    ///
    /// Returns `None` when no candidate exists as a regular file.
    pub fn locate(&self, id: &str) -> Option<PathBuf> {
        for subdir in &self.subdirs {
            let subdir_path = self.root.join(subdir);
            if !subdir_path.is_dir() {
                continue;
            }

            let direct = subdir_path.join(id);
            if direct.is_file() {
                return Some(direct);
            }

            let nested = subdir_path.join(id).join(id);
            if nested.is_file() {
                return Some(nested);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn subdirs() -> Vec<String> {
        ["e", "r", "t", "u", "w", "x"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"OTTO").unwrap();
    }

    #[test]
    fn test_locate_direct_file() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("r").join("42"));

        let locator = FontLocator::new(dir.path(), subdirs());
        assert_eq!(locator.locate("42"), Some(dir.path().join("r").join("42")));
    }

    #[test]
    fn test_locate_nested_file() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("w").join("17").join("17"));

        let locator = FontLocator::new(dir.path(), subdirs());
        assert_eq!(
            locator.locate("17"),
            Some(dir.path().join("w").join("17").join("17"))
        );
    }

    #[test]
    fn test_directory_named_like_id_is_not_a_match() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("e").join("5")).unwrap();

        let locator = FontLocator::new(dir.path(), subdirs());
        assert_eq!(locator.locate("5"), None);
    }

    #[test]
    fn test_earlier_subdir_wins() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("x").join("9"));
        touch(&dir.path().join("t").join("9"));

        let locator = FontLocator::new(dir.path(), subdirs());
        assert_eq!(locator.locate("9"), Some(dir.path().join("t").join("9")));
    }

    #[test]
    fn test_manifest_subdir_is_not_searched() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("c").join("3"));

        let locator = FontLocator::new(dir.path(), subdirs());
        assert_eq!(locator.locate("3"), None);
    }

    #[test]
    fn test_missing_root() {
        let dir = TempDir::new().unwrap();
        let locator = FontLocator::new(dir.path().join("absent"), subdirs());
        assert_eq!(locator.locate("1"), None);
    }
}
