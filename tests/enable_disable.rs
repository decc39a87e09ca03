//! Enable/disable toggle only the sites-enabled symlink.

mod common;

use nxutil::error::NxError;
use nxutil::vhost::{self, HostState};
use std::fs;

#[test]
fn enable_then_disable() {
    let (_dir, paths) = common::temp_nx_home();
    vhost::create_host(&paths, &common::vhost("web.local", "/var/www/web", "8.1"), None).unwrap();

    vhost::enable_host(&paths, "web.local").unwrap();

    let link = paths.enabled("web.local");
    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert_eq!(fs::read_link(&link).unwrap(), paths.available("web.local"));
    assert_eq!(
        fs::read_to_string(&link).unwrap(),
        fs::read_to_string(paths.available("web.local")).unwrap()
    );
    assert_eq!(vhost::host_state(&paths, "web.local"), HostState::Enabled);

    vhost::disable_host(&paths, "web.local").unwrap();

    assert!(fs::symlink_metadata(&link).is_err());
    assert!(paths.available("web.local").is_file());
    assert_eq!(vhost::host_state(&paths, "web.local"), HostState::Created);
}

#[test]
fn enable_without_create_fails() {
    let (_dir, paths) = common::temp_nx_home();

    let err = vhost::enable_host(&paths, "ghost.local").unwrap_err();

    assert_eq!(
        err.downcast_ref::<NxError>(),
        Some(&NxError::HostNotFound("ghost.local".to_string()))
    );
    assert!(fs::symlink_metadata(paths.enabled("ghost.local")).is_err());
}

#[test]
fn enable_twice_fails() {
    let (_dir, paths) = common::temp_nx_home();
    vhost::create_host(&paths, &common::vhost("a.test", "/srv/a", "7.4"), None).unwrap();
    vhost::enable_host(&paths, "a.test").unwrap();

    let err = vhost::enable_host(&paths, "a.test").unwrap_err();
    assert!(format!("{err:#}").contains("link"));
}

#[test]
fn disable_without_link_fails() {
    let (_dir, paths) = common::temp_nx_home();
    vhost::create_host(&paths, &common::vhost("a.test", "/srv/a", "7.4"), None).unwrap();

    let err = vhost::disable_host(&paths, "a.test").unwrap_err();

    assert_eq!(
        err.downcast_ref::<NxError>(),
        Some(&NxError::NotEnabled("a.test".to_string()))
    );
}

#[test]
fn disable_refuses_regular_file() {
    let (_dir, paths) = common::temp_nx_home();
    fs::write(paths.enabled("a.test"), "server {}").unwrap();

    let err = vhost::disable_host(&paths, "a.test").unwrap_err();

    assert!(err.to_string().contains("not a symlink"));
    assert!(paths.enabled("a.test").is_file());
}
