//! Platform abstraction for the hosts file, symlinks and file modes.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

#[cfg(unix)]
pub mod unix;

#[cfg(windows)]
pub mod windows;

#[cfg(unix)]
pub use unix::{create_new_with_mode, symlink_file};

#[cfg(windows)]
pub use windows::{create_new_with_mode, symlink_file};

use crate::config::NxPaths;
use crate::hosts;

/// Trait for hosts file operations.
pub trait HostsEditor: Send + Sync {
    /// Append the loopback block for `hostname`.
    fn add_host(&self, hostname: &str) -> Result<()>;
    /// Delete the first block for `hostname`. `Ok(false)` if there was none.
    fn remove_host(&self, hostname: &str) -> Result<bool>;
    /// Check whether a block for `hostname` exists.
    fn has_host(&self, hostname: &str) -> Result<bool>;
}

/// Get the HostsEditor for the configured hosts file.
pub fn default_hosts_editor(paths: &NxPaths) -> Box<dyn HostsEditor> {
    Box::new(FileHostsEditor::new(&paths.hosts_file))
}

/// HostsEditor that reads/writes a file at the given path.
#[derive(Clone)]
pub struct FileHostsEditor {
    path: PathBuf,
}

impl FileHostsEditor {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File content, `None` if the file does not exist.
    fn read(&self) -> Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("read {}", self.path.display())),
        }
    }
}

impl HostsEditor for FileHostsEditor {
    fn add_host(&self, hostname: &str) -> Result<()> {
        let mut file = open_append(&self.path)
            .with_context(|| format!("open {}", self.path.display()))?;
        file.write_all(hosts::block(hostname).as_bytes())
            .with_context(|| format!("write {}", self.path.display()))?;
        Ok(())
    }

    fn remove_host(&self, hostname: &str) -> Result<bool> {
        let Some(content) = self.read()? else {
            return Ok(false);
        };
        let Some(stripped) = hosts::strip_block(&content, hostname) else {
            return Ok(false);
        };
        // Rewriting in place keeps the file's existing permissions.
        std::fs::write(&self.path, stripped)
            .with_context(|| format!("write {}", self.path.display()))?;
        Ok(true)
    }

    fn has_host(&self, hostname: &str) -> Result<bool> {
        Ok(self
            .read()?
            .is_some_and(|c| hosts::find_block(&c, hostname).is_some()))
    }
}

#[cfg(unix)]
fn open_append(path: &Path) -> std::io::Result<std::fs::File> {
    use std::os::unix::fs::OpenOptionsExt;
    std::fs::OpenOptions::new()
        .append(true)
        .create(true)
        .mode(0o644)
        .open(path)
}

#[cfg(not(unix))]
fn open_append(path: &Path) -> std::io::Result<std::fs::File> {
    std::fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
}
