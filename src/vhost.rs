//! Virtual host lifecycle: create, enable, disable, remove, list, status.
//!
//! A host moves `absent -> created -> (enabled <-> created) -> absent`.
//! Only `create` and `remove` touch the hosts file.

use anyhow::{Context, Result};
use std::fmt;
use std::io::ErrorKind;

use crate::config::NxPaths;
use crate::error::NxError;
use crate::hosts;
use crate::platform::{self, HostsEditor};
use crate::template::{self, VhostConfig};

/// Mode for new config files (before umask).
pub const CONFIG_FILE_MODE: u32 = 0o666;

/// Validate that `hostname` is safe as a file name and hosts entry.
pub fn validate_hostname(hostname: &str) -> Result<()> {
    let invalid = |reason: &str| -> Result<()> {
        Err(NxError::InvalidHostname {
            hostname: hostname.to_string(),
            reason: reason.to_string(),
        }
        .into())
    };
    if hostname.is_empty() {
        return invalid("empty hostname");
    }
    for label in hostname.split('.') {
        if label.is_empty() {
            return invalid("empty label");
        }
        if let Some(c) = label.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '-') {
            return invalid(&format!("illegal char {c:?}"));
        }
        if label.starts_with('-') || label.ends_with('-') {
            return invalid("label cannot start/end with hyphen");
        }
    }
    Ok(())
}

/// Where a host is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostState {
    Absent,
    Created,
    Enabled,
}

impl fmt::Display for HostState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HostState::Absent => "absent",
            HostState::Created => "created",
            HostState::Enabled => "enabled",
        })
    }
}

/// State plus hosts-file presence, for `status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostStatus {
    pub state: HostState,
    pub in_hosts: bool,
}

fn link_exists(paths: &NxPaths, hostname: &str) -> bool {
    std::fs::symlink_metadata(paths.enabled(hostname)).is_ok()
}

/// Current state derived from the filesystem.
pub fn host_state(paths: &NxPaths, hostname: &str) -> HostState {
    if !paths.available(hostname).exists() {
        HostState::Absent
    } else if link_exists(paths, hostname) {
        HostState::Enabled
    } else {
        HostState::Created
    }
}

/// Fail with `HostExists` if a config for `hostname` is already there.
pub fn ensure_absent(paths: &NxPaths, hostname: &str) -> Result<()> {
    validate_hostname(hostname)?;
    if paths.available(hostname).exists() {
        return Err(NxError::HostExists(hostname.to_string()).into());
    }
    Ok(())
}

/// Write the host config and append its hosts block.
///
/// A hosts-file failure is logged and ignored; the config stays in place.
pub fn create_host(
    paths: &NxPaths,
    cfg: &VhostConfig,
    hosts_editor: Option<&dyn HostsEditor>,
) -> Result<()> {
    let hostname = cfg.hostname.as_str();
    ensure_absent(paths, hostname)?;

    let path = paths.available(hostname);
    let rendered = template::render(cfg);
    match platform::create_new_with_mode(&path, rendered.as_bytes(), CONFIG_FILE_MODE) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(NxError::HostExists(hostname.to_string()).into());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("write host config {}", path.display()));
        }
    }
    tracing::debug!(path = %path.display(), "wrote host config");

    if let Some(editor) = hosts_editor {
        match hosts::add_host_to_hosts(editor, hostname) {
            Ok(()) => tracing::debug!(hostname, "added hosts block"),
            Err(e) => tracing::warn!("could not add {hostname} to hosts file: {e:#}"),
        }
    }

    tracing::info!(hostname, root = %cfg.root_dir, php = %cfg.php_version, "created host");
    Ok(())
}

/// Link the host config into sites-enabled.
pub fn enable_host(paths: &NxPaths, hostname: &str) -> Result<()> {
    validate_hostname(hostname)?;
    let target = paths.available(hostname);
    if !target.is_file() {
        return Err(NxError::HostNotFound(hostname.to_string()).into());
    }
    let link = paths.enabled(hostname);
    platform::symlink_file(&target, &link)
        .with_context(|| format!("link {} -> {}", link.display(), target.display()))?;
    tracing::info!(hostname, "enabled host");
    Ok(())
}

/// Remove the sites-enabled link. Fails if it is missing or not a symlink.
pub fn disable_host(paths: &NxPaths, hostname: &str) -> Result<()> {
    validate_hostname(hostname)?;
    let link = paths.enabled(hostname);
    match std::fs::symlink_metadata(&link) {
        Ok(meta) if !meta.file_type().is_symlink() => {
            anyhow::bail!("{} is not a symlink; refusing to remove it", link.display());
        }
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(NxError::NotEnabled(hostname.to_string()).into());
        }
        Err(e) => return Err(e).with_context(|| format!("stat {}", link.display())),
    }
    std::fs::remove_file(&link).with_context(|| format!("remove {}", link.display()))?;
    tracing::info!(hostname, "disabled host");
    Ok(())
}

/// Remove link (if any), hosts block and config file.
///
/// Link and hosts block are cleaned up even when the config is already
/// gone; the missing config is then reported as `HostNotFound`.
pub fn remove_host(
    paths: &NxPaths,
    hostname: &str,
    hosts_editor: Option<&dyn HostsEditor>,
) -> Result<()> {
    validate_hostname(hostname)?;

    let link = paths.enabled(hostname);
    if link_exists(paths, hostname) {
        std::fs::remove_file(&link).with_context(|| format!("remove {}", link.display()))?;
        tracing::debug!(path = %link.display(), "removed enable link");
    }

    if let Some(editor) = hosts_editor {
        if hosts::remove_host_from_hosts(editor, hostname)? {
            tracing::debug!(hostname, "removed hosts block");
        } else {
            tracing::warn!("no hosts file block for {hostname}");
        }
    }

    let path = paths.available(hostname);
    match std::fs::remove_file(&path) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(NxError::HostNotFound(hostname.to_string()).into());
        }
        Err(e) => return Err(e).with_context(|| format!("remove {}", path.display())),
    }

    tracing::info!(hostname, "removed host");
    Ok(())
}

/// All hosts in sites-available with their enabled flag, sorted by name.
pub fn list_hosts(paths: &NxPaths) -> Result<Vec<(String, bool)>> {
    let dir = &paths.sites_available;
    let mut v = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("read {}", dir.display()))? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        let enabled = link_exists(paths, &name);
        v.push((name, enabled));
    }
    v.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(v)
}

/// State and hosts-file presence for `hostname`.
pub fn host_status(
    paths: &NxPaths,
    hostname: &str,
    hosts_editor: &dyn HostsEditor,
) -> Result<HostStatus> {
    validate_hostname(hostname)?;
    Ok(HostStatus {
        state: host_state(paths, hostname),
        in_hosts: hosts::host_in_hosts(hosts_editor, hostname)?,
    })
}
