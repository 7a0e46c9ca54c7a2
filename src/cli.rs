//! Command-line interface for tmux-setup.
//!
//! Parses arguments using clap and provides the [`Cli`] struct containing
//! all user-specified options.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for tmux-setup.
///
/// # Examples
///
/// ```bash
/// # Build the session described by the nearest tmux.conf.yml and attach
/// tmux-setup
///
/// # Build a session straight from a stored template
/// tmux-setup --template rust-service
///
/// # Interactively write a new template
/// tmux-setup wizard --create-template rust-service
/// ```
#[derive(Parser, Debug)]
#[command(name = "tmux-setup")]
#[command(version)]
#[command(about = "Create a tmux session from a YAML description and attach to it")]
#[command(long_about = "tmux-setup builds a tmux session (windows, panes, directories,\n\
    commands, layouts) from the nearest tmux.conf.yml or a stored template,\n\
    then attaches your terminal to it.")]
pub struct Cli {
    /// Use a stored template instead of searching for tmux.conf.yml.
    ///
    /// Templates live in `~/.config/tmux-setup/templates/<NAME>.yml`.
    #[arg(short, long, value_name = "NAME", conflicts_with = "config")]
    pub template: Option<String>,

    /// Use this config file instead of searching parent directories.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Create the session but do not attach to it.
    ///
    /// If any pane has a refresh interval, stay in the foreground to keep
    /// refreshing until interrupted.
    #[arg(short, long)]
    pub detach: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Build a config interactively instead of starting a session.
    Wizard {
        /// Save the result as a named template.
        #[arg(long, value_name = "NAME")]
        create_template: Option<String>,
    },
}

/// Where the configuration for a run comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Search the working directory and its ancestors.
    Discover,
    /// An explicit config file.
    File(PathBuf),
    /// A stored template, used as-is.
    Template(String),
}

impl Cli {
    /// Determine the config source from the flags.
    pub fn config_source(&self) -> ConfigSource {
        if let Some(name) = &self.template {
            ConfigSource::Template(name.clone())
        } else if let Some(path) = &self.config {
            ConfigSource::File(path.clone())
        } else {
            ConfigSource::Discover
        }
    }
}
