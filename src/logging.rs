//! File logging
//!
//! The terminal belongs to the TUI, so log output goes to a rotating file
//! under the config directory and never to stdout/stderr.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};
use std::path::Path;

/// Start the file logger. The returned handle must be kept alive for the
/// lifetime of the program.
pub fn init(log_dir: &Path, level: &str) -> anyhow::Result<LoggerHandle> {
    let handle = Logger::try_with_str(level)?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename("font-extractor")
                .suffix("log")
                .suppress_timestamp(),
        )
        .format(flexi_logger::detailed_format)
        .rotate(
            Criterion::Size(256 * 1024),
            Naming::Numbers,
            Cleanup::KeepLogFiles(3),
        )
        .start()?;
    Ok(handle)
}
