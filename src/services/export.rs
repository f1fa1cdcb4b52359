//! Export pipeline
//!
//! Copies each selected font payload to the destination folder under a
//! readable name. Every font is handled independently: a missing payload
//! is a skip, a failed copy is an error, and neither stops the batch.

use crate::error::ExportError;
use crate::model::{ExportOutcome, FontRecord};
use crate::services::locator::FontLocator;
use crate::services::visibility::FileVisibility;
use std::fs::{self, FileTimes};
use std::io;
use std::path::Path;

/// Characters that are not allowed in file names on at least one of the
/// supported filesystems
const INVALID_FILE_NAME_CHARS: &[char] = &['/', '\\', ':', '<', '>', '"', '|', '?', '*'];

/// Replace filesystem-invalid characters with `-`
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if INVALID_FILE_NAME_CHARS.contains(&c) || c.is_ascii_control() {
                '-'
            } else {
                c
            }
        })
        .collect()
}

/// Destination file name for a font: `"<name> - <weight>.otf"`, sanitized
pub fn export_file_name(font: &FontRecord) -> String {
    sanitize_file_name(&format!("{}.otf", font.display_label()))
}

/// Copy modified/accessed times from `src` to `dest`
fn copy_file_times(src: &Path, dest: &Path) -> io::Result<()> {
    let metadata = fs::metadata(src)?;
    let times = FileTimes::new()
        .set_accessed(metadata.accessed()?)
        .set_modified(metadata.modified()?);
    fs::OpenOptions::new().write(true).open(dest)?.set_times(times)
}

pub struct Exporter {
    locator: FontLocator,
    visibility: Box<dyn FileVisibility>,
}

impl Exporter {
    pub fn new(locator: FontLocator, visibility: Box<dyn FileVisibility>) -> Self {
        Self {
            locator,
            visibility,
        }
    }

    pub fn locator(&self) -> &FontLocator {
        &self.locator
    }

    /// Export `fonts` into `dest_dir`, creating it if needed.
    ///
    /// Only a destination that cannot be created fails the whole run.
    pub fn export(
        &self,
        fonts: &[&FontRecord],
        dest_dir: &Path,
    ) -> Result<ExportOutcome, ExportError> {
        fs::create_dir_all(dest_dir).map_err(|source| ExportError::Destination {
            path: dest_dir.to_path_buf(),
            source,
        })?;

        let mut outcome = ExportOutcome::default();
        for font in fonts {
            let Some(src) = self.locator.locate(&font.id) else {
                log::warn!("No file found for font id {} ({})", font.id, font.name);
                outcome.skipped += 1;
                continue;
            };

            match self.export_one(font, &src, dest_dir) {
                Ok(file_name) => {
                    log::info!("Exported {} from {}", file_name, src.display());
                    outcome.succeeded += 1;
                }
                Err(e) => {
                    log::error!("Error copying font {}: {}", font.display_label(), e);
                    outcome.errored += 1;
                }
            }
        }

        log::info!(
            "Export to {} finished: {} of {} succeeded, {} errors, {} skipped",
            dest_dir.display(),
            outcome.succeeded,
            outcome.attempted(),
            outcome.errored,
            outcome.skipped
        );
        Ok(outcome)
    }

    fn export_one(&self, font: &FontRecord, src: &Path, dest_dir: &Path) -> io::Result<String> {
        let file_name = export_file_name(font);
        let dest = dest_dir.join(&file_name);

        // Overwrites an existing file of the same name
        fs::copy(src, &dest)?;

        if let Err(e) = self.visibility.make_visible_and_writable(&dest) {
            log::warn!("Could not change attributes of {}: {}", file_name, e);
        }
        if let Err(e) = copy_file_times(src, &dest) {
            log::warn!("Could not preserve timestamps of {}: {}", file_name, e);
        }

        Ok(file_name)
    }
}
