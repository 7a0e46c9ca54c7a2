//! # tmux-setup
//!
//! Declarative tmux sessions from YAML.
//!
//! Describe a session's windows, panes, working directories, startup
//! commands, and layouts in a `tmux.conf.yml`, optionally on top of a stored
//! template, and tmux-setup builds the session and attaches your terminal.
//!
//! ## Features
//!
//! - **Discovery**: the nearest `tmux.conf.yml` in the working directory or any parent
//! - **Templates**: reusable configs in `~/.config/tmux-setup/templates`, merged under local values
//! - **Layouts**: tmux's named layouts or explicit per-pane sizes
//! - **Refresh**: panes that re-run their command on an interval
//! - **Hooks**: shell commands around session, window, and pane creation
//! - **Wizard**: build a config interactively
//!
//! ## Quick Example
//!
//! ```yaml
//! # tmux.conf.yml
//! session_name: api
//! dependencies: [git, cargo]
//! defaults:
//!   directory: ~/src/api
//! windows:
//!   - name: code
//!     git_branch: main
//!     panes:
//!       - initial_command: nvim .
//!   - name: watch
//!     layout: even-horizontal
//!     panes:
//!       - initial_command: cargo watch -x test
//!       - initial_command: date
//!         refresh_interval: 60
//! ```
//!
//! ## Architecture
//!
//! The crate is organized into these modules:
//!
//! - [`config`]: YAML configuration data structures and template merge
//! - [`loader`]: Config discovery, template storage, and loading
//! - [`resolver`]: Working directory resolution
//! - [`deps`]: Required executable checks
//! - [`tmux`]: Tmux control commands and the port that issues them
//! - [`session`]: Building a session from a config
//! - [`refresh`]: Periodic pane refresh tasks
//! - [`attach`]: Handing the terminal to tmux
//! - [`hooks`]: Pre/post shell hooks
//! - [`wizard`]: Interactive config builder
//! - [`cli`]: Command-line argument parsing with clap
//! - [`error`]: Error types

pub mod attach;
pub mod cli;
pub mod config;
pub mod deps;
pub mod error;
pub mod hooks;
pub mod loader;
pub mod refresh;
pub mod resolver;
pub mod session;
pub mod tmux;
pub mod wizard;

#[cfg(test)]
mod testing;

pub use config::{Config, Defaults, Layout, NamedLayout, Pane, Window};
pub use error::{Result, SetupError};
pub use session::{Materialized, Materializer, Provisioned};
pub use tmux::{ControlCommand, ControlPort, TmuxPort};
