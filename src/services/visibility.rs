//! Making exported copies visible and writable
//!
//! Cached payloads are often hidden, system or read-only. Each platform
//! has one way of undoing that; `platform_visibility` picks it.

use std::fs;
use std::io;
use std::path::Path;

pub trait FileVisibility {
    fn make_visible_and_writable(&self, path: &Path) -> io::Result<()>;
}

/// Owner read/write, group and other read
#[cfg(unix)]
#[derive(Debug, Default, Clone, Copy)]
pub struct UnixPermissions;

#[cfg(unix)]
impl FileVisibility for UnixPermissions {
    fn make_visible_and_writable(&self, path: &Path) -> io::Result<()> {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o644))
    }
}

/// Clears the hidden, system and read-only attributes
#[cfg(windows)]
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsAttributes;

#[cfg(windows)]
impl FileVisibility for WindowsAttributes {
    fn make_visible_and_writable(&self, path: &Path) -> io::Result<()> {
        use std::process::Command;

        let mut permissions = fs::metadata(path)?.permissions();
        #[allow(clippy::permissions_set_readonly_false)]
        permissions.set_readonly(false);
        fs::set_permissions(path, permissions)?;

        let status = Command::new("attrib")
            .args(["-H", "-S", "-R"])
            .arg(path)
            .status()?;
        if status.success() {
            Ok(())
        } else {
            Err(io::Error::new(
                io::ErrorKind::Other,
                format!("attrib exited with status: {}", status),
            ))
        }
    }
}

/// The implementation for the platform this binary was built for
pub fn platform_visibility() -> Box<dyn FileVisibility> {
    #[cfg(windows)]
    {
        Box::new(WindowsAttributes)
    }
    #[cfg(unix)]
    {
        Box::new(UnixPermissions)
    }
}
