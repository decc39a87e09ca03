//! E2E: create (prompted) -> enable -> list -> status -> disable -> remove.

mod common;

use nxutil::hosts;
use predicates::prelude::*;
use std::fs;

#[test]
fn e2e_happy_path() {
    let (_dir, paths) = common::temp_nx_home();
    fs::write(&paths.hosts_file, "127.0.0.1\tlocalhost\n").unwrap();

    // create, with an empty answer that gets re-asked
    common::nxutil(&paths)
        .args(["create", "web.local"])
        .write_stdin("\n/var/www/web\n8.1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Project root directory:"))
        .stdout(predicate::str::contains("Php version, eg \"7.4\" (without quotes):"))
        .stdout(predicate::str::contains("Created host: web.local"));

    let conf = fs::read_to_string(paths.available("web.local")).unwrap();
    assert!(conf.contains("server_name web.local;"));
    assert!(conf.contains("root /var/www/web;"));
    assert!(conf.contains("php8.1-fpm.sock"));
    let content = fs::read_to_string(&paths.hosts_file).unwrap();
    assert_eq!(content.matches(&hosts::block("web.local")).count(), 1);

    // enable
    common::nxutil(&paths)
        .args(["enable", "web.local"])
        .assert()
        .success();
    assert!(fs::symlink_metadata(paths.enabled("web.local")).is_ok());

    // list
    common::nxutil(&paths)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("web.local\tenabled"));

    // status
    common::nxutil(&paths)
        .args(["status", "web.local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("web.local\tenabled\thosts entry present"));

    // disable
    common::nxutil(&paths)
        .args(["disable", "web.local"])
        .assert()
        .success();
    common::nxutil(&paths)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("web.local\tdisabled"));

    // disable again fails
    common::nxutil(&paths)
        .args(["disable", "web.local"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not enabled"));

    // re-enable, then remove
    common::nxutil(&paths)
        .args(["enable", "web.local"])
        .assert()
        .success();
    common::nxutil(&paths)
        .args(["remove", "web.local"])
        .assert()
        .success();

    assert!(fs::symlink_metadata(paths.enabled("web.local")).is_err());
    assert!(!paths.available("web.local").exists());
    assert_eq!(fs::read_to_string(&paths.hosts_file).unwrap(), "127.0.0.1\tlocalhost\n");

    common::nxutil(&paths)
        .args(["status", "web.local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("web.local\tabsent\thosts entry missing"));
}

#[test]
fn create_with_flags_skips_prompts() {
    let (_dir, paths) = common::temp_nx_home();

    common::nxutil(&paths)
        .args(["create", "api.test", "--root", "/srv/api", "--php", "7.4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project root directory").not());

    let conf = fs::read_to_string(paths.available("api.test")).unwrap();
    assert!(conf.contains("root /srv/api;"));
    assert!(conf.contains("php7.4-fpm.sock"));
}
