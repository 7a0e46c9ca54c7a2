//! Pre/post lifecycle hooks.
//!
//! Hooks are arbitrary shell commands from the config (`pre_command`,
//! `post_command`) run around session, window, and pane setup. They are
//! best-effort: a failing hook is reported as a warning and setup carries on.

use crate::error::{Result, SetupError};
use std::process::Command;
use tracing::{debug, warn};

/// Runs hook commands.
pub trait HookRunner {
    /// Run `command` to completion.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::HookFailed`] if the command exits unsuccessfully.
    fn run(&self, command: &str) -> Result<()>;
}

/// Runs hooks through `sh -c`, capturing their output.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellHooks;

impl HookRunner for ShellHooks {
    fn run(&self, command: &str) -> Result<()> {
        let output = Command::new("sh").arg("-c").arg(command).output()?;
        if output.status.success() {
            return Ok(());
        }

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        Err(SetupError::HookFailed {
            command: command.to_string(),
            status: output.status.to_string(),
            output: combined.trim_end().to_string(),
        })
    }
}

/// Run an optional hook, logging a warning if it fails.
///
/// `stage` names the lifecycle point (e.g. `"pre-window"`) in the log.
/// Blank commands are skipped.
pub fn run_hook(runner: &dyn HookRunner, stage: &str, command: Option<&str>) {
    let Some(command) = command.filter(|c| !c.trim().is_empty()) else {
        return;
    };

    debug!(stage, command, "running hook");
    if let Err(e) = runner.run(command) {
        warn!("{} hook failed: {}", stage, e);
    }
}
