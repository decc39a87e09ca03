//! nxutil - manage nginx virtual hosts and their loopback hosts entries.

pub mod cli;
pub mod config;
pub mod error;
pub mod hosts;
pub mod logging;
pub mod platform;
pub mod prompt;
pub mod template;
pub mod vhost;
