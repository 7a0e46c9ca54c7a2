//! Periodic pane refresh.
//!
//! A pane with a positive `refresh_interval` gets one background task that
//! re-sends its initial command on every tick. Sends run on the blocking
//! pool, so a hung tmux call stalls only its own pane.
//!
//! Tasks are detached: nothing holds their handles, there is no stop signal,
//! and they end when the process exits. When the run ends in an attach, the
//! process image is replaced and the tasks go with it; `--detach` keeps the
//! process alive to drive them.

use crate::tmux::{ControlCommand, ControlPort, Target};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, warn};

/// Spawns refresh tasks onto a tokio runtime.
#[derive(Debug, Clone)]
pub struct RefreshScheduler {
    handle: Handle,
}

impl RefreshScheduler {
    /// Schedule onto the runtime behind `handle`.
    pub fn new(handle: Handle) -> Self {
        RefreshScheduler { handle }
    }

    /// Start re-sending `keys` to `target` every `every`.
    ///
    /// The first send happens one full interval after this call. Ticks that
    /// fall behind are delayed, not bunched. Each send runs on the blocking
    /// pool and the task waits for it before its next tick.
    pub fn spawn(&self, port: Arc<dyn ControlPort>, target: Target, keys: String, every: Duration) {
        // The ticker starts now, not when the task is first polled.
        let _guard = self.handle.enter();
        let mut ticker = tokio::time::interval_at(Instant::now() + every, every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        debug!(%target, every = ?every, "starting pane refresh");
        let command = ControlCommand::SendKeys { target, keys };
        self.handle.spawn(async move {
            loop {
                ticker.tick().await;
                let port = Arc::clone(&port);
                let command = command.clone();
                match tokio::task::spawn_blocking(move || port.run(&command)).await {
                    Ok(Ok(())) => {}
                    Ok(Err(e)) => warn!("pane refresh failed: {}", e),
                    Err(e) => warn!("pane refresh task died: {}", e),
                }
            }
        });
    }
}
