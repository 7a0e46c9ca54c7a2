//! Configuration types for tmux-setup.
//!
//! This module defines the data structures that map to the YAML configuration
//! format. A config describes one tmux session: its name, which window gets
//! focus on attach, global defaults, required executables, and an ordered list
//! of windows, each with an ordered list of panes.
//!
//! # Config Format
//!
//! ```yaml
//! session_name: api
//! focus_window: 2
//! template: rust-service
//! dependencies: [git, cargo]
//! defaults:
//!   directory: ~/src/api
//!   pre_command: docker compose up -d
//! windows:
//!   - name: editor
//!     git_branch: main
//!     panes:
//!       - initial_command: nvim .
//!   - name: logs
//!     directory: logs
//!     layout: main-vertical
//!     panes:
//!       - initial_command: tail -f app.log
//!       - initial_command: date
//!         refresh_interval: 5
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Session name used when the config leaves it empty.
pub const DEFAULT_SESSION_NAME: &str = "dev";

/// Named tmux layouts accepted by `select-layout`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamedLayout {
    /// Panes side by side, equal widths.
    EvenHorizontal,
    /// Panes stacked, equal heights.
    EvenVertical,
    /// One large pane on top, the rest below.
    MainHorizontal,
    /// One large pane on the left, the rest to the right.
    MainVertical,
    /// Spread panes evenly in both directions.
    Tiled,
}

impl NamedLayout {
    /// Convert to the tmux layout name used by `select-layout`.
    pub fn to_tmux_layout(&self) -> &'static str {
        match self {
            NamedLayout::EvenHorizontal => "even-horizontal",
            NamedLayout::EvenVertical => "even-vertical",
            NamedLayout::MainHorizontal => "main-horizontal",
            NamedLayout::MainVertical => "main-vertical",
            NamedLayout::Tiled => "tiled",
        }
    }
}

impl FromStr for NamedLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "even-horizontal" => Ok(NamedLayout::EvenHorizontal),
            "even-vertical" => Ok(NamedLayout::EvenVertical),
            "main-horizontal" => Ok(NamedLayout::MainHorizontal),
            "main-vertical" => Ok(NamedLayout::MainVertical),
            "tiled" => Ok(NamedLayout::Tiled),
            other => Err(format!("unknown layout '{}'", other)),
        }
    }
}

/// Direction of a [`DirectionalLayout`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Horizontal,
    Vertical,
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "horizontal" => Ok(Direction::Horizontal),
            "vertical" => Ok(Direction::Vertical),
            other => Err(format!("unknown direction '{}'", other)),
        }
    }
}

/// Explicit size for one pane. Values are percentages such as `"30%"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PaneSize {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
}

/// A layout given as a direction plus per-pane sizes.
///
/// ```yaml
/// layout:
///   direction: horizontal
///   panes:
///     - width: 70%
///     - width: 30%
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DirectionalLayout {
    pub direction: Direction,
    pub panes: Vec<PaneSize>,
}

/// Window layout: either a tmux keyword or explicit pane sizes.
///
/// Resolved once while parsing; a keyword outside [`NamedLayout`] is a
/// parse error rather than something passed through to tmux.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Layout {
    Named(NamedLayout),
    Directional(DirectionalLayout),
}

impl Layout {
    /// Whether panes should be split vertically while they are created.
    ///
    /// Only named layouts are inspected: a keyword containing "vertical"
    /// selects a vertical split. Directional layouts always split
    /// horizontally regardless of their direction.
    pub fn splits_vertically(&self) -> bool {
        match self {
            Layout::Named(name) => name.to_tmux_layout().contains("vertical"),
            Layout::Directional(_) => false,
        }
    }
}

/// Global default settings applied when not overridden.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Defaults {
    /// Base directory for relative window directories.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub directory: String,
    /// Command for windows that declare no panes and no command of their own.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub initial_command: String,
    /// Shell command run before the session is created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_command: Option<String>,
    /// Shell command run after all windows are created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_command: Option<String>,
}

impl Defaults {
    /// True when no default has been set.
    pub fn is_empty(&self) -> bool {
        *self == Defaults::default()
    }
}

/// A single pane within a window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Pane {
    /// Working directory, relative to the window's resolved directory.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub directory: String,
    /// Command typed into the pane once it exists.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub initial_command: String,
    /// Re-send `initial_command` every this many seconds (0 disables).
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "non_negative")]
    pub refresh_interval: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_command: Option<String>,
}

/// A window definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Window {
    /// Window name. Synthesized from the position when empty.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Working directory, relative to `defaults.directory`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub directory: String,
    /// Command sent to pane 1 when the window declares no panes.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub initial_command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    /// Branch checked out in pane 1 after changing directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_branch: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub panes: Vec<Pane>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_command: Option<String>,
}

impl Window {
    /// Name presented to tmux for the window at 0-based position `index`.
    ///
    /// # Example
    ///
    /// ```
    /// use tmux_setup::config::Window;
    ///
    /// assert_eq!(Window::default().display_name(0), "window-1");
    /// ```
    pub fn display_name(&self, index: usize) -> String {
        if self.name.is_empty() {
            format!("window-{}", index + 1)
        } else {
            self.name.clone()
        }
    }
}

/// Top-level configuration structure.
///
/// Parsed from `tmux.conf.yml` or from a stored template. By the time a
/// `Config` reaches the materializer any `template` reference has already
/// been merged in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub session_name: String,
    /// 1-based window selected on attach (0 means unset).
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "non_negative")]
    pub focus_window: usize,
    #[serde(skip_serializing_if = "Defaults::is_empty")]
    pub defaults: Defaults,
    /// Executables that must be on `PATH` before anything is created.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
    pub windows: Vec<Window>,
    /// Name of a stored template to use as a base.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

impl Config {
    /// Parse config from a YAML string.
    ///
    /// An empty document yields the default config.
    ///
    /// # Errors
    ///
    /// Returns `serde_yaml::Error` if the YAML is malformed or doesn't match
    /// the expected structure (including unknown layout keywords).
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        if yaml.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(yaml)
    }

    /// Serialize to YAML, omitting unset fields.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Session name, falling back to [`DEFAULT_SESSION_NAME`].
    pub fn session_name(&self) -> &str {
        if self.session_name.is_empty() {
            DEFAULT_SESSION_NAME
        } else {
            &self.session_name
        }
    }

    /// Focus window, falling back to the first window.
    pub fn focus_window(&self) -> usize {
        if self.focus_window == 0 {
            1
        } else {
            self.focus_window
        }
    }

    /// Layer this config over `template`.
    ///
    /// The template provides the base. Each top-level value set here wins:
    /// non-empty session name, non-zero focus window, non-default defaults,
    /// non-empty dependency and window lists. Windows are replaced as a
    /// whole, never merged entry by entry.
    pub fn merge_over(self, template: Config) -> Config {
        let mut merged = template;
        merged.template = None;

        if !self.session_name.is_empty() {
            merged.session_name = self.session_name;
        }
        if self.focus_window != 0 {
            merged.focus_window = self.focus_window;
        }
        if !self.defaults.is_empty() {
            merged.defaults = self.defaults;
        }
        if !self.dependencies.is_empty() {
            merged.dependencies = self.dependencies;
        }
        if !self.windows.is_empty() {
            merged.windows = self.windows;
        }

        merged
    }
}

fn is_zero<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// Read a signed integer; negative values mean "unset" and become 0.
fn non_negative<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64> + Default,
{
    let value = i64::deserialize(deserializer)?;
    Ok(T::try_from(value).unwrap_or_default())
}
