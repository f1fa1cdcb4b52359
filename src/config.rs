//! Configuration: platform path table plus an optional JSON override file

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Operating systems the font cache layout is known for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    /// macOS; other Unix systems use the same layout
    MacOs,
}

/// Where a platform layout is anchored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseDir {
    /// `%APPDATA%`
    RoamingAppData,
    /// `$HOME`
    Home,
}

/// Declarative description of the font cache on one platform
#[derive(Debug, Clone, Copy)]
pub struct PlatformLayout {
    pub base: BaseDir,
    /// Path from the base directory to the cache root
    pub root: &'static [&'static str],
    /// Path from the cache root to the manifest
    pub manifest: &'static [&'static str],
    /// Subdirectories holding font payloads, probed in order
    pub font_subdirs: &'static [&'static str],
}

const FONT_SUBDIRS: &[&str] = &["e", "r", "t", "u", "w", "x"];

const LAYOUTS: &[(Platform, PlatformLayout)] = &[
    (
        Platform::Windows,
        PlatformLayout {
            base: BaseDir::RoamingAppData,
            root: &["Adobe", "CoreSync", "plugins", "livetype"],
            manifest: &["c", "entitlements.xml"],
            font_subdirs: FONT_SUBDIRS,
        },
    ),
    (
        Platform::MacOs,
        PlatformLayout {
            base: BaseDir::Home,
            root: &[
                "Library",
                "Application Support",
                "Adobe",
                "CoreSync",
                "plugins",
                "livetype",
            ],
            manifest: &[".c", "entitlements.xml"],
            font_subdirs: FONT_SUBDIRS,
        },
    ),
];

impl Platform {
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::MacOs
        }
    }

    pub fn layout(self) -> &'static PlatformLayout {
        LAYOUTS
            .iter()
            .find(|(platform, _)| *platform == self)
            .map(|(_, layout)| layout)
            .unwrap_or(&LAYOUTS[1].1)
    }
}

impl BaseDir {
    fn resolve(self) -> Option<PathBuf> {
        match self {
            BaseDir::RoamingAppData => dirs::config_dir(),
            BaseDir::Home => dirs::home_dir(),
        }
    }
}

/// Resolved locations of the font cache
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryPaths {
    pub root: PathBuf,
    pub manifest: PathBuf,
    pub font_subdirs: Vec<String>,
}

impl LibraryPaths {
    /// Build paths from a layout anchored at `base`
    pub fn from_layout(layout: &PlatformLayout, base: &Path) -> Self {
        let root = layout.root.iter().fold(base.to_path_buf(), |p, s| p.join(s));
        let manifest = layout.manifest.iter().fold(root.clone(), |p, s| p.join(s));
        Self {
            root,
            manifest,
            font_subdirs: layout.font_subdirs.iter().map(|s| s.to_string()).collect(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Optional user overrides read from `~/.font-extractor/config.json`.
///
/// The file is only ever read; nothing is persisted between runs.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Cache root, replacing the platform default
    #[serde(default)]
    pub cache_root: Option<PathBuf>,
    /// Manifest path; defaults to the platform location under `cache_root`
    #[serde(default)]
    pub manifest_path: Option<PathBuf>,
    #[serde(default)]
    pub font_subdirs: Option<Vec<String>>,
    /// Pre-filled value of the destination prompt
    #[serde(default)]
    pub default_export_dir: Option<PathBuf>,
    /// flexi_logger spec string
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_root: None,
            manifest_path: None,
            font_subdirs: None,
            default_export_dir: None,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".font-extractor"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn log_dir() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("logs"))
    }

    /// Load the config file, falling back to defaults when it is missing
    /// or cannot be parsed
    pub fn load() -> Config {
        Self::config_path()
            .and_then(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    pub fn load_from(path: &Path) -> Option<Config> {
        if !path.exists() {
            return None;
        }
        let contents = fs::read_to_string(path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    /// Resolve the cache locations for `platform`, applying overrides
    pub fn library_paths(&self, platform: Platform) -> anyhow::Result<LibraryPaths> {
        let layout = platform.layout();

        let mut paths = match &self.cache_root {
            Some(root) => {
                let mut paths = LibraryPaths::from_layout(layout, Path::new(""));
                paths.manifest = layout.manifest.iter().fold(root.clone(), |p, s| p.join(s));
                paths.root = root.clone();
                paths
            }
            None => {
                let base = layout.base.resolve().ok_or_else(|| {
                    anyhow::anyhow!("Could not determine the user profile directory")
                })?;
                LibraryPaths::from_layout(layout, &base)
            }
        };

        if let Some(manifest) = &self.manifest_path {
            paths.manifest = manifest.clone();
        }
        if let Some(subdirs) = &self.font_subdirs {
            paths.font_subdirs = subdirs.clone();
        }
        Ok(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_windows_layout() {
        let paths = LibraryPaths::from_layout(Platform::Windows.layout(), Path::new("/appdata"));
        assert_eq!(
            paths.root,
            Path::new("/appdata/Adobe/CoreSync/plugins/livetype")
        );
        assert_eq!(
            paths.manifest,
            Path::new("/appdata/Adobe/CoreSync/plugins/livetype/c/entitlements.xml")
        );
    }

    #[test]
    fn test_macos_layout_uses_hidden_manifest_dir() {
        let paths = LibraryPaths::from_layout(Platform::MacOs.layout(), Path::new("/Users/me"));
        assert_eq!(
            paths.manifest,
            Path::new(
                "/Users/me/Library/Application Support/Adobe/CoreSync/plugins/livetype/.c/entitlements.xml"
            )
        );
    }

    #[test]
    fn test_font_subdirs_exclude_manifest_dir() {
        for platform in [Platform::Windows, Platform::MacOs] {
            let layout = platform.layout();
            assert_eq!(layout.font_subdirs, &["e", "r", "t", "u", "w", "x"]);
            assert!(!layout.font_subdirs.contains(&"c"));
        }
    }

    #[test]
    fn test_cache_root_override() {
        let config = Config {
            cache_root: Some(PathBuf::from("/srv/livetype")),
            ..Default::default()
        };
        let paths = config.library_paths(Platform::MacOs).unwrap();
        assert_eq!(paths.root, Path::new("/srv/livetype"));
        assert_eq!(paths.manifest, Path::new("/srv/livetype/.c/entitlements.xml"));
    }

    #[test]
    fn test_manifest_and_subdir_overrides() {
        let config = Config {
            cache_root: Some(PathBuf::from("/srv/livetype")),
            manifest_path: Some(PathBuf::from("/tmp/manifest.xml")),
            font_subdirs: Some(vec!["z".to_string()]),
            ..Default::default()
        };
        let paths = config.library_paths(Platform::Windows).unwrap();
        assert_eq!(paths.manifest, Path::new("/tmp/manifest.xml"));
        assert_eq!(paths.font_subdirs, vec!["z".to_string()]);
    }

    #[test]
    fn test_load_from_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "default_export_dir": "/tmp/fonts" }"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.default_export_dir, Some(PathBuf::from("/tmp/fonts")));
        assert_eq!(config.log_level, "info");
        assert!(config.cache_root.is_none());
    }

    #[test]
    fn test_load_from_invalid_or_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        assert!(Config::load_from(&path).is_none());

        fs::write(&path, "not json").unwrap();
        assert!(Config::load_from(&path).is_none());
    }
}
