//! Shared test helpers.

#![allow(dead_code)]

use nxutil::config::NxPaths;
use nxutil::template::VhostConfig;
use std::path::Path;
use tempfile::TempDir;

/// Create a temp directory holding sites-available, sites-enabled and hosts.
/// Uses current dir (workspace) so sandbox allows full access.
pub fn temp_nx_home() -> (TempDir, NxPaths) {
    let dir = tempfile::Builder::new()
        .prefix("nxutil_test_")
        .tempdir_in(std::env::current_dir().unwrap_or_else(|_| Path::new(".").into()))
        .expect("temp dir");
    let paths = NxPaths::for_test(dir.path());
    std::fs::create_dir_all(&paths.sites_available).unwrap();
    std::fs::create_dir_all(&paths.sites_enabled).unwrap();
    (dir, paths)
}

/// nxutil binary with every path pointed at `paths`.
pub fn nxutil(paths: &NxPaths) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("nxutil").unwrap();
    let config = paths.sites_available.with_file_name("nxutil.toml");
    cmd.env("NXUTIL_CONFIG", config)
        .env("NXUTIL_SITES_AVAILABLE", &paths.sites_available)
        .env("NXUTIL_SITES_ENABLED", &paths.sites_enabled)
        .env("NXUTIL_HOSTS_FILE", &paths.hosts_file)
        .env_remove("RUST_LOG");
    cmd
}

pub fn vhost(hostname: &str, root_dir: &str, php_version: &str) -> VhostConfig {
    VhostConfig {
        root_dir: root_dir.to_string(),
        hostname: hostname.to_string(),
        php_version: php_version.to_string(),
    }
}
