//! Tmux control commands.
//!
//! tmux offers no structured API, only its command line. Every instruction
//! the materializer issues is a [`ControlCommand`] sent through a
//! [`ControlPort`]; [`TmuxPort`] is the real implementation that shells out
//! to the `tmux` binary.
//!
//! # Failure policy
//!
//! A port returns `Err` only when a command could not be issued at all (the
//! tmux process failed to spawn). A command that ran and exited non-zero is
//! logged and otherwise ignored: individual commands are fire-and-forget.
//!
//! # Indices
//!
//! Sessions are created with `base-index` and `pane-base-index` set to 1,
//! so every [`Target`] uses 1-based window and pane numbers.

use crate::error::{Result, SetupError};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, warn};

/// Check if we're running inside a tmux session.
///
/// Checks for the `TMUX` environment variable, which tmux sets when active.
pub fn in_tmux() -> bool {
    std::env::var("TMUX").is_ok()
}

/// A window or pane address: `session:window` or `session:window.pane`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub session: String,
    pub window: usize,
    pub pane: Option<usize>,
}

impl Target {
    /// Address a whole window.
    pub fn window(session: &str, window: usize) -> Self {
        Target {
            session: session.to_string(),
            window,
            pane: None,
        }
    }

    /// Address a single pane.
    pub fn pane(session: &str, window: usize, pane: usize) -> Self {
        Target {
            session: session.to_string(),
            window,
            pane: Some(pane),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.pane {
            Some(pane) => write!(f, "{}:{}.{}", self.session, self.window, pane),
            None => write!(f, "{}:{}", self.session, self.window),
        }
    }
}

/// Which dimension a `resize-pane` call changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

/// One discrete instruction for tmux.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlCommand {
    /// Create a detached session with a single named window.
    NewSession { session: String, window: String },
    /// Set a global session option (`set-option -g`).
    SetOption { name: String, value: String },
    /// Set a global window option (`set-window-option -g`).
    SetWindowOption { name: String, value: String },
    RenameWindow { target: Target, name: String },
    /// Create a window at the given index.
    NewWindow { target: Target, name: String },
    /// Split the active pane of a window; `-v` when `vertical`, `-h` otherwise.
    SplitWindow { target: Target, vertical: bool },
    /// Type `keys` into a pane and press Enter.
    SendKeys { target: Target, keys: String },
    SelectLayout { target: Target, layout: String },
    ResizePane { target: Target, axis: Axis, size: String },
    SelectWindow { target: Target },
    /// Succeeds only if the session exists.
    HasSession { session: String },
    AttachSession { session: String },
    /// Point the current client at another session (used from inside tmux).
    SwitchClient { session: String },
}

impl ControlCommand {
    /// The tmux sub-command name.
    pub fn verb(&self) -> &'static str {
        match self {
            ControlCommand::NewSession { .. } => "new-session",
            ControlCommand::SetOption { .. } => "set-option",
            ControlCommand::SetWindowOption { .. } => "set-window-option",
            ControlCommand::RenameWindow { .. } => "rename-window",
            ControlCommand::NewWindow { .. } => "new-window",
            ControlCommand::SplitWindow { .. } => "split-window",
            ControlCommand::SendKeys { .. } => "send-keys",
            ControlCommand::SelectLayout { .. } => "select-layout",
            ControlCommand::ResizePane { .. } => "resize-pane",
            ControlCommand::SelectWindow { .. } => "select-window",
            ControlCommand::HasSession { .. } => "has-session",
            ControlCommand::AttachSession { .. } => "attach-session",
            ControlCommand::SwitchClient { .. } => "switch-client",
        }
    }

    /// Full argument list passed to the tmux binary.
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![self.verb().to_string()];
        let rest: Vec<String> = match self {
            ControlCommand::NewSession { session, window } => {
                vec!["-d".into(), "-s".into(), session.clone(), "-n".into(), window.clone()]
            }
            ControlCommand::SetOption { name, value }
            | ControlCommand::SetWindowOption { name, value } => {
                vec!["-g".into(), name.clone(), value.clone()]
            }
            ControlCommand::RenameWindow { target, name } => {
                vec!["-t".into(), target.to_string(), name.clone()]
            }
            ControlCommand::NewWindow { target, name } => {
                vec!["-t".into(), target.to_string(), "-n".into(), name.clone()]
            }
            ControlCommand::SplitWindow { target, vertical } => {
                let flag = if *vertical { "-v" } else { "-h" };
                vec![flag.into(), "-t".into(), target.to_string()]
            }
            ControlCommand::SendKeys { target, keys } => {
                vec!["-t".into(), target.to_string(), keys.clone(), "C-m".into()]
            }
            ControlCommand::SelectLayout { target, layout } => {
                vec!["-t".into(), target.to_string(), layout.clone()]
            }
            ControlCommand::ResizePane { target, axis, size } => {
                let flag = match axis {
                    Axis::Width => "-x",
                    Axis::Height => "-y",
                };
                vec!["-t".into(), target.to_string(), flag.into(), size.clone()]
            }
            ControlCommand::SelectWindow { target } => vec!["-t".into(), target.to_string()],
            ControlCommand::HasSession { session }
            | ControlCommand::AttachSession { session }
            | ControlCommand::SwitchClient { session } => vec!["-t".into(), session.clone()],
        };
        args.extend(rest);
        args
    }
}

impl fmt::Display for ControlCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tmux {}", self.args().join(" "))
    }
}

/// Somewhere control commands can be sent.
///
/// Implementations must be shareable across threads: pane refresh tasks
/// hold the port for the rest of the process lifetime.
pub trait ControlPort: Send + Sync {
    /// Issue a command and report whether tmux exited successfully.
    ///
    /// # Errors
    ///
    /// Only when the command could not be issued.
    fn status(&self, command: &ControlCommand) -> Result<bool>;

    /// Issue a command, logging (not returning) an unsuccessful exit.
    fn run(&self, command: &ControlCommand) -> Result<()> {
        if !self.status(command)? {
            warn!("`{}` exited unsuccessfully", command);
        }
        Ok(())
    }
}

/// [`ControlPort`] backed by the tmux binary.
#[derive(Debug, Clone)]
pub struct TmuxPort {
    binary: PathBuf,
}

impl TmuxPort {
    /// Use the given tmux binary.
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        TmuxPort {
            binary: binary.into(),
        }
    }

    /// Find `tmux` on `PATH`.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::TmuxError`] if tmux is not installed.
    pub fn locate() -> Result<Self> {
        let binary = which::which("tmux")
            .map_err(|e| SetupError::TmuxError(format!("tmux not found on PATH: {}", e)))?;
        Ok(TmuxPort::new(binary))
    }

    /// Path of the tmux binary this port runs.
    pub fn binary(&self) -> &Path {
        &self.binary
    }
}

impl ControlPort for TmuxPort {
    fn status(&self, command: &ControlCommand) -> Result<bool> {
        debug!("{}", command);
        let output = Command::new(&self.binary)
            .args(command.args())
            .output()
            .map_err(|e| {
                SetupError::TmuxError(format!("{} failed to start: {}", command.verb(), e))
            })?;

        if !output.status.success() {
            debug!(
                status = %output.status,
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "{} failed",
                command.verb()
            );
        }
        Ok(output.status.success())
    }
}
