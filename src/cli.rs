//! CLI definitions and command routing.

use anyhow::Result;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::NxPaths;
use crate::error::NxError;
use crate::prompt::{prompt_non_empty, LineSource};
use crate::template::VhostConfig;
use crate::vhost;

pub const ROOT_DIR_PROMPT: &str = "Project root directory:";
pub const PHP_VERSION_PROMPT: &str = "Php version, eg \"7.4\" (without quotes):";

#[derive(Parser, Debug)]
#[command(name = "nxutil", version)]
#[command(about = "Manage nginx virtual hosts and their /etc/hosts entries")]
pub struct Cli {
    /// create | enable | disable | remove | status | list
    pub command: Option<String>,

    /// Virtual host name, e.g. web.local
    pub hostname: Option<String>,

    /// Project root directory for create (prompted if omitted)
    #[arg(long, value_name = "DIR")]
    pub root: Option<String>,

    /// PHP-FPM version for create, e.g. 8.1 (prompted if omitted)
    #[arg(long, value_name = "VERSION")]
    pub php: Option<String>,

    /// Path to nxutil.toml
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parsed command word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Enable,
    Disable,
    Remove,
    Status,
    List,
}

impl FromStr for Action {
    type Err = NxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(Action::Create),
            "enable" => Ok(Action::Enable),
            "disable" => Ok(Action::Disable),
            "remove" => Ok(Action::Remove),
            "status" => Ok(Action::Status),
            "list" => Ok(Action::List),
            other => Err(NxError::Usage(format!("Unknown command '{other}'"))),
        }
    }
}

/// Run CLI against real stdin/stdout.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::logging::init(cli.verbose);
    let paths = NxPaths::resolve(cli.config.as_deref())?;
    tracing::debug!(?paths, "resolved paths");

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut out = std::io::stdout();
    dispatch(&paths, &cli, &mut input, &mut out)
}

/// Route a parsed command line. Prompts read from `input`; output goes to `out`.
pub fn dispatch(
    paths: &NxPaths,
    cli: &Cli,
    input: &mut dyn LineSource,
    out: &mut dyn Write,
) -> Result<()> {
    let Some(command) = cli.command.as_deref() else {
        return Err(NxError::Usage("Please specify command".to_string()).into());
    };
    let action: Action = command.parse()?;

    if action != Action::Create && (cli.root.is_some() || cli.php.is_some()) {
        tracing::warn!("--root/--php only apply to create; ignored");
    }

    match action {
        Action::List => {
            for (hostname, enabled) in vhost::list_hosts(paths)? {
                let state = if enabled { "enabled" } else { "disabled" };
                writeln!(out, "{hostname}\t{state}")?;
            }
            Ok(())
        }
        Action::Create => cmd_create(paths, cli, require_hostname(cli)?, input, out),
        Action::Enable => {
            let hostname = require_hostname(cli)?;
            vhost::enable_host(paths, hostname)?;
            writeln!(out, "Enabled host: {hostname}")?;
            Ok(())
        }
        Action::Disable => {
            let hostname = require_hostname(cli)?;
            vhost::disable_host(paths, hostname)?;
            writeln!(out, "Disabled host: {hostname}")?;
            Ok(())
        }
        Action::Remove => {
            let hostname = require_hostname(cli)?;
            let editor = crate::platform::default_hosts_editor(paths);
            vhost::remove_host(paths, hostname, Some(editor.as_ref()))?;
            writeln!(out, "Removed host: {hostname}")?;
            Ok(())
        }
        Action::Status => {
            let hostname = require_hostname(cli)?;
            let editor = crate::platform::default_hosts_editor(paths);
            let status = vhost::host_status(paths, hostname, editor.as_ref())?;
            let hosts = if status.in_hosts { "present" } else { "missing" };
            writeln!(out, "{hostname}\t{}\thosts entry {hosts}", status.state)?;
            Ok(())
        }
    }
}

fn require_hostname(cli: &Cli) -> Result<&str> {
    match cli.hostname.as_deref() {
        Some(h) if !h.is_empty() => Ok(h),
        _ => Err(NxError::Usage("Please specify host".to_string()).into()),
    }
}

fn cmd_create(
    paths: &NxPaths,
    cli: &Cli,
    hostname: &str,
    input: &mut dyn LineSource,
    out: &mut dyn Write,
) -> Result<()> {
    // Check before prompting so the user isn't asked for nothing.
    vhost::ensure_absent(paths, hostname)?;

    let root_dir = match non_empty(&cli.root) {
        Some(r) => r,
        None => prompt_non_empty(input, out, ROOT_DIR_PROMPT)?,
    };
    let php_version = match non_empty(&cli.php) {
        Some(p) => p,
        None => prompt_non_empty(input, out, PHP_VERSION_PROMPT)?,
    };

    let cfg = VhostConfig {
        root_dir,
        hostname: hostname.to_string(),
        php_version,
    };
    let editor = crate::platform::default_hosts_editor(paths);
    vhost::create_host(paths, &cfg, Some(editor.as_ref()))?;
    writeln!(out, "Created host: {hostname}")?;
    Ok(())
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}
