//! Handing the terminal over to tmux.
//!
//! Attaching is the last thing a run does: the focus window is selected and
//! then the current process is replaced by `tmux attach-session` (or
//! `tmux switch-client` when already inside tmux). On success nothing after
//! the hand-off runs.

use crate::error::{Result, SetupError};
use crate::tmux::{self, ControlCommand, ControlPort, Target};
use std::path::PathBuf;
use std::process::Command;
use tracing::{info, warn};

/// Gives the terminal to an interactive tmux client.
pub trait Handoff {
    /// Hand the terminal over by running `command` in place of this process.
    ///
    /// A real hand-off only returns on failure.
    fn hand_off(&self, command: &ControlCommand) -> Result<()>;
}

/// Replaces the current process with the tmux client via `exec`.
#[derive(Debug, Clone)]
pub struct ExecHandoff {
    binary: PathBuf,
}

impl ExecHandoff {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        ExecHandoff {
            binary: binary.into(),
        }
    }
}

impl Handoff for ExecHandoff {
    #[cfg(unix)]
    fn hand_off(&self, command: &ControlCommand) -> Result<()> {
        use std::os::unix::process::CommandExt;

        // exec inherits the environment and only returns on failure.
        let err = Command::new(&self.binary).args(command.args()).exec();
        Err(SetupError::AttachFailed {
            session: session_of(command),
            reason: err.to_string(),
        })
    }

    #[cfg(not(unix))]
    fn hand_off(&self, command: &ControlCommand) -> Result<()> {
        let status = Command::new(&self.binary).args(command.args()).status()?;
        std::process::exit(status.code().unwrap_or(1));
    }
}

/// Select the focus window, then hand the terminal to the session.
///
/// A `focus_window` of 0 means the first window. Failing to select the
/// window does not stop the attach.
///
/// # Errors
///
/// Returns whatever the hand-off reports; with [`ExecHandoff`] this call
/// does not return at all on success.
pub fn attach(
    port: &dyn ControlPort,
    handoff: &dyn Handoff,
    session: &str,
    focus_window: usize,
) -> Result<()> {
    let focus_window = if focus_window == 0 { 1 } else { focus_window };

    let select = ControlCommand::SelectWindow {
        target: Target::window(session, focus_window),
    };
    if let Err(e) = port.run(&select) {
        warn!("could not select window {}: {}", focus_window, e);
    }

    let command = if tmux::in_tmux() {
        ControlCommand::SwitchClient {
            session: session.to_string(),
        }
    } else {
        ControlCommand::AttachSession {
            session: session.to_string(),
        }
    };
    info!(session, "attaching");
    handoff.hand_off(&command)
}

#[cfg(unix)]
fn session_of(command: &ControlCommand) -> String {
    match command {
        ControlCommand::AttachSession { session } | ControlCommand::SwitchClient { session } => {
            session.clone()
        }
        other => other.verb().to_string(),
    }
}
