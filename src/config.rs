//! Configuration loading and path resolution.
//!
//! Defaults match a Debian-style nginx layout. An optional `nxutil.toml`
//! and the `NXUTIL_*` environment variables override them (tests use the
//! latter to point everything at a temp dir).

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

pub const DEFAULT_SITES_AVAILABLE: &str = "/etc/nginx/sites-available";
pub const DEFAULT_SITES_ENABLED: &str = "/etc/nginx/sites-enabled";
pub const DEFAULT_HOSTS_FILE: &str = "/etc/hosts";

/// Where host configs, enable links and the hosts file live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NxPaths {
    pub sites_available: PathBuf,
    pub sites_enabled: PathBuf,
    pub hosts_file: PathBuf,
}

impl Default for NxPaths {
    fn default() -> Self {
        Self {
            sites_available: PathBuf::from(DEFAULT_SITES_AVAILABLE),
            sites_enabled: PathBuf::from(DEFAULT_SITES_ENABLED),
            hosts_file: PathBuf::from(DEFAULT_HOSTS_FILE),
        }
    }
}

impl NxPaths {
    /// Paths for testing: everything under `base`.
    pub fn for_test(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        Self {
            sites_available: base.join("sites-available"),
            sites_enabled: base.join("sites-enabled"),
            hosts_file: base.join("hosts"),
        }
    }

    /// Resolve paths: defaults, then config file, then environment.
    pub fn resolve(config_file: Option<&Path>) -> Result<Self> {
        let file = match config_file {
            Some(p) => Some(p.to_path_buf()),
            None => config_path(),
        };
        let mut paths = Self::default();
        if let Some(file) = file {
            paths.apply(FileConfig::load(&file)?);
        }
        paths.apply(FileConfig::from_env());
        Ok(paths)
    }

    /// Config file for `hostname` in sites-available.
    pub fn available(&self, hostname: &str) -> PathBuf {
        self.sites_available.join(hostname)
    }

    /// Enable link for `hostname` in sites-enabled.
    pub fn enabled(&self, hostname: &str) -> PathBuf {
        self.sites_enabled.join(hostname)
    }

    fn apply(&mut self, over: FileConfig) {
        if let Some(p) = over.sites_available {
            self.sites_available = p;
        }
        if let Some(p) = over.sites_enabled {
            self.sites_enabled = p;
        }
        if let Some(p) = over.hosts_file {
            self.hosts_file = p;
        }
    }
}

/// `nxutil.toml` structure. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub sites_available: Option<PathBuf>,
    #[serde(default)]
    pub sites_enabled: Option<PathBuf>,
    #[serde(default)]
    pub hosts_file: Option<PathBuf>,
}

impl FileConfig {
    /// Load from `path` (with shared lock). A missing file is an empty config.
    pub fn load(path: &Path) -> Result<FileConfig> {
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "no config file");
            return Ok(FileConfig::default());
        }
        let mut file = fs::OpenOptions::new()
            .read(true)
            .open(path)
            .with_context(|| format!("open {}", path.display()))?;
        fs2::FileExt::lock_shared(&file)?;
        let mut s = String::new();
        file.read_to_string(&mut s)?;
        let cfg: FileConfig =
            toml::from_str(&s).with_context(|| format!("parse {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?cfg, "loaded config file");
        Ok(cfg)
    }

    fn from_env() -> FileConfig {
        let var = |k: &str| std::env::var_os(k).filter(|v| !v.is_empty()).map(PathBuf::from);
        FileConfig {
            sites_available: var("NXUTIL_SITES_AVAILABLE"),
            sites_enabled: var("NXUTIL_SITES_ENABLED"),
            hosts_file: var("NXUTIL_HOSTS_FILE"),
        }
    }
}

/// Default config file location (respects NXUTIL_CONFIG).
pub fn config_path() -> Option<PathBuf> {
    if let Some(p) = std::env::var_os("NXUTIL_CONFIG") {
        return Some(PathBuf::from(p));
    }
    directories::ProjectDirs::from("", "", "nxutil").map(|d| d.config_dir().join("nxutil.toml"))
}
