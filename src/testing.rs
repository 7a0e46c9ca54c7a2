//! Recording stand-ins for tmux, hooks, and the terminal hand-off.

use crate::attach::Handoff;
use crate::error::{Result, SetupError};
use crate::hooks::HookRunner;
use crate::tmux::{ControlCommand, ControlPort};
use std::sync::Mutex;

type Predicate = Box<dyn Fn(&ControlCommand) -> bool + Send + Sync>;

/// Records every command; optionally fails the ones matching a predicate.
#[derive(Default)]
pub struct RecordingPort {
    commands: Mutex<Vec<ControlCommand>>,
    fail_on: Option<Predicate>,
    existing_session: bool,
}

impl RecordingPort {
    /// Fail (as if tmux could not be spawned) on matching commands.
    pub fn failing_on(predicate: impl Fn(&ControlCommand) -> bool + Send + Sync + 'static) -> Self {
        RecordingPort {
            fail_on: Some(Box::new(predicate)),
            ..RecordingPort::default()
        }
    }

    /// Report that the session already exists.
    pub fn with_existing_session() -> Self {
        RecordingPort {
            existing_session: true,
            ..RecordingPort::default()
        }
    }

    pub fn commands(&self) -> Vec<ControlCommand> {
        self.commands.lock().unwrap().clone()
    }
}

impl ControlPort for RecordingPort {
    fn status(&self, command: &ControlCommand) -> Result<bool> {
        self.commands.lock().unwrap().push(command.clone());
        if self.fail_on.as_ref().is_some_and(|fail| fail(command)) {
            return Err(SetupError::TmuxError(format!("simulated {} failure", command.verb())));
        }
        match command {
            ControlCommand::HasSession { .. } => Ok(self.existing_session),
            _ => Ok(true),
        }
    }
}

/// Records hook commands; fails the listed ones.
#[derive(Default)]
pub struct RecordingHooks {
    ran: Mutex<Vec<String>>,
    failing: Vec<String>,
}

impl RecordingHooks {
    pub fn failing(commands: &[&str]) -> Self {
        RecordingHooks {
            failing: commands.iter().map(|c| c.to_string()).collect(),
            ..RecordingHooks::default()
        }
    }

    pub fn ran(&self) -> Vec<String> {
        self.ran.lock().unwrap().clone()
    }
}

impl HookRunner for RecordingHooks {
    fn run(&self, command: &str) -> Result<()> {
        self.ran.lock().unwrap().push(command.to_string());
        if self.failing.iter().any(|c| c == command) {
            return Err(SetupError::HookFailed {
                command: command.to_string(),
                status: "exit status: 1".into(),
                output: String::new(),
            });
        }
        Ok(())
    }
}

/// Records the hand-off command instead of replacing the process.
#[derive(Default)]
pub struct RecordingHandoff {
    handed_off: Mutex<Vec<ControlCommand>>,
}

impl RecordingHandoff {
    pub fn handed_off(&self) -> Vec<ControlCommand> {
        self.handed_off.lock().unwrap().clone()
    }
}

impl Handoff for RecordingHandoff {
    fn hand_off(&self, command: &ControlCommand) -> Result<()> {
        self.handed_off.lock().unwrap().push(command.clone());
        Ok(())
    }
}

/// A single-threaded runtime for tests that never advance time.
pub fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .unwrap()
}

/// Yield, and give blocking-pool threads a moment, until `done` holds.
///
/// Gives up after about two seconds of wall time; callers assert afterwards.
pub async fn wait_until(done: impl Fn() -> bool) {
    for _ in 0..2000 {
        if done() {
            return;
        }
        tokio::task::yield_now().await;
        std::thread::sleep(std::time::Duration::from_millis(1));
    }
}

/// Let spawned tasks run until they block again.
pub async fn settle() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}
