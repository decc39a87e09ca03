//! User-facing error kinds.
//!
//! Everything else travels as `anyhow::Error`; these are the cases the
//! binary reports differently (stdout vs stderr).

use thiserror::Error;

/// Hint printed with every usage error.
pub const USAGE_HINT: &str = "hint: nxutil (create|enable|disable|remove) [HOSTNAME]";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NxError {
    /// Missing or unknown command / missing hostname.
    #[error("{0}, {hint}", hint = USAGE_HINT)]
    Usage(String),

    /// Hostname cannot be used as a file name or hosts entry.
    #[error("invalid hostname {hostname:?}: {reason}")]
    InvalidHostname { hostname: String, reason: String },

    /// `create` on a host whose config already exists.
    #[error("Host already exists")]
    HostExists(String),

    /// No config file in sites-available.
    #[error("host '{0}' does not exist; run 'nxutil create {0}' first")]
    HostNotFound(String),

    /// No symlink in sites-enabled.
    #[error("host '{0}' is not enabled")]
    NotEnabled(String),

    /// Input closed before an answer was given.
    #[error("no input for {0:?}")]
    EndOfInput(String),
}

impl NxError {
    /// Usage and precondition errors go to stdout, like the help hint.
    pub fn to_stdout(&self) -> bool {
        matches!(self, NxError::Usage(_) | NxError::HostExists(_))
    }
}
