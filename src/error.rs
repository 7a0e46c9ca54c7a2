//! Error types for tmux-setup.
//!
//! All errors are represented by [`SetupError`], which covers config
//! discovery and parsing, dependency checks, multiplexer control failures,
//! hooks, and the final attach.

use std::path::PathBuf;
use thiserror::Error;

/// All possible errors that can occur in tmux-setup.
#[derive(Error, Debug)]
pub enum SetupError {
    /// No config file in the start directory or any of its ancestors.
    #[error("No tmux.conf.yml found in {0} or any parent directory")]
    ConfigNotFound(PathBuf),

    /// Could not determine the user's config directory.
    #[error("Could not determine config directory")]
    NoConfigDir,

    /// Failed to read or write a file.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing or serialization failed.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Requested template does not exist in the templates directory.
    #[error("Template '{name}' not found at {}", .path.display())]
    TemplateNotFound {
        /// Template name as given by the user.
        name: String,
        /// Where the template was expected.
        path: PathBuf,
    },

    /// A required executable is not on the search path.
    #[error("Dependency missing: {0}")]
    MissingDependency(String),

    /// A control command could not be issued to the multiplexer.
    #[error("Tmux error: {0}")]
    TmuxError(String),

    /// The detached session could not be created.
    #[error("Failed to create session '{session}': {source}")]
    SessionFailed {
        /// Session name.
        session: String,
        /// Underlying failure.
        #[source]
        source: Box<SetupError>,
    },

    /// Setting up a window failed; carries the 1-based window index.
    #[error("Failed to create window {index}: {source}")]
    WindowFailed {
        /// 1-based window index.
        index: usize,
        /// Underlying failure.
        #[source]
        source: Box<SetupError>,
    },

    /// A pre/post hook exited unsuccessfully.
    #[error("Hook command `{command}` failed ({status})\nOutput: {output}")]
    HookFailed {
        /// The shell command that was run.
        command: String,
        /// Exit status description.
        status: String,
        /// Combined stdout and stderr.
        output: String,
    },

    /// Attaching to the session failed before or during process replacement.
    #[error("Failed to attach to session '{session}': {reason}")]
    AttachFailed {
        /// Session name.
        session: String,
        /// Why the hand-off failed.
        reason: String,
    },

    /// The interactive wizard was cancelled or received unusable input.
    #[error("Wizard aborted: {0}")]
    WizardAborted(String),
}

impl SetupError {
    /// Wrap an error with the 1-based index of the window being created.
    pub fn in_window(self, index: usize) -> Self {
        SetupError::WindowFailed {
            index,
            source: Box::new(self),
        }
    }
}

/// Convenient Result type alias for tmux-setup operations.
pub type Result<T> = std::result::Result<T, SetupError>;
