//! Interactive config builder.
//!
//! `tmux-setup wizard` walks through a session, its windows, and their panes
//! with line prompts, using a multi-select menu to pick which optional
//! fields to fill in. The result is the same [`Config`] the loader produces,
//! saved either as a loose file or as a named template.

use crate::config::{
    Config, Defaults, Direction, DirectionalLayout, Layout, NamedLayout, Pane, PaneSize, Window,
};
use crate::error::{Result, SetupError};
use crate::loader::{self, CONFIG_FILE_NAME};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{cursor::MoveTo, queue};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const DEFAULT_OPTIONS: &[&str] = &["Directory", "Initial command", "Pre-command", "Post-command"];
const WINDOW_OPTIONS: &[&str] = &[
    "Name",
    "Directory",
    "Initial command",
    "Git branch",
    "Pre-command",
    "Post-command",
];
const PANE_OPTIONS: &[&str] = &[
    "Directory",
    "Initial command",
    "Pre-command",
    "Post-command",
    "Refresh interval",
];

/// Chooses any number of items from a list.
pub trait Selector {
    /// Returns the chosen items in list order; empty if the menu was cancelled.
    fn select(&mut self, title: &str, items: &[&str]) -> Result<Vec<String>>;
}

/// What a key press does to the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Continue,
    Confirm,
    Cancel,
}

/// Cursor position and check marks of a multi-select menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuState {
    pub cursor: usize,
    pub selected: Vec<bool>,
}

impl MenuState {
    pub fn new(len: usize) -> Self {
        MenuState {
            cursor: 0,
            selected: vec![false; len],
        }
    }

    /// Arrows or j/k move, space toggles, enter confirms, q or Ctrl-C cancels.
    pub fn handle(&mut self, key: KeyEvent) -> MenuAction {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                MenuAction::Cancel
            }
            KeyCode::Char('q') | KeyCode::Esc => MenuAction::Cancel,
            KeyCode::Enter => MenuAction::Confirm,
            KeyCode::Char(' ') => {
                if let Some(mark) = self.selected.get_mut(self.cursor) {
                    *mark = !*mark;
                }
                MenuAction::Continue
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + 1 < self.selected.len() {
                    self.cursor += 1;
                }
                MenuAction::Continue
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
                MenuAction::Continue
            }
            _ => MenuAction::Continue,
        }
    }

    /// The checked items, in list order.
    pub fn chosen(&self, items: &[&str]) -> Vec<String> {
        items
            .iter()
            .zip(&self.selected)
            .filter(|(_, picked)| **picked)
            .map(|(item, _)| item.to_string())
            .collect()
    }
}

/// Full-screen menu drawn with crossterm in raw mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalSelector;

struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(RawMode)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

impl Selector for TerminalSelector {
    fn select(&mut self, title: &str, items: &[&str]) -> Result<Vec<String>> {
        let mut out = io::stdout();
        let mut state = MenuState::new(items.len());
        let action = {
            let _raw = RawMode::enable()?;
            loop {
                render(&mut out, title, items, &state)?;
                let Event::Key(key) = event::read()? else {
                    continue;
                };
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match state.handle(key) {
                    MenuAction::Continue => {}
                    action => break action,
                }
            }
        };
        queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        out.flush()?;

        match action {
            MenuAction::Confirm => Ok(state.chosen(items)),
            _ => Ok(Vec::new()),
        }
    }
}

fn render(out: &mut impl Write, title: &str, items: &[&str], state: &MenuState) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    write!(out, "{}\r\n\r\n", title)?;
    for (i, item) in items.iter().enumerate() {
        let pointer = if i == state.cursor { ">" } else { " " };
        let mark = if state.selected[i] { "[x]" } else { "[ ]" };
        write!(out, "{} {} {}\r\n", pointer, mark, item)?;
    }
    write!(
        out,
        "\r\nUse arrow keys/j/k to navigate, SPACE to select, ENTER to confirm, q to quit\r\n"
    )?;
    out.flush()
}

/// Prompt-driven config builder over any line input and output.
pub struct Wizard<R, W, S> {
    input: R,
    output: W,
    selector: S,
}

impl<R: BufRead, W: Write, S: Selector> Wizard<R, W, S> {
    pub fn new(input: R, output: W, selector: S) -> Self {
        Wizard {
            input,
            output,
            selector,
        }
    }

    /// Print a line of output.
    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Ask for a line of input; an empty answer yields `default`.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::WizardAborted`] if input ends.
    pub fn prompt(&mut self, message: &str, default: &str) -> Result<String> {
        if default.is_empty() {
            write!(self.output, "{}: ", message)?;
        } else {
            write!(self.output, "{} [{}]: ", message, default)?;
        }
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SetupError::WizardAborted("input closed".into()));
        }
        let answer = line.trim();
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer.to_string())
        }
    }

    fn confirm(&mut self, message: &str, default: &str) -> Result<bool> {
        let answer = self.prompt(message, default)?.to_lowercase();
        Ok(answer == "yes" || answer == "y")
    }

    fn optional(&mut self, message: &str) -> Result<Option<String>> {
        let answer = self.prompt(message, "")?;
        Ok(Some(answer).filter(|a| !a.is_empty()))
    }

    /// Walk through the whole session.
    pub fn build_config(&mut self) -> Result<Config> {
        let mut config = Config {
            session_name: self.prompt("Enter session name", "dev")?,
            ..Config::default()
        };
        config.focus_window = self
            .prompt("Enter focus window number", "1")?
            .parse()
            .unwrap_or_default();

        if self.confirm("Would you like to configure any global defaults? (yes/No)", "no")? {
            config.defaults = self.build_defaults()?;
        }

        loop {
            self.say("\nWindow Configuration:")?;
            if !self.confirm("Would you like to add a window? (Yes/no)", "yes")? {
                break;
            }
            let window = self.build_window()?;
            config.windows.push(window);
        }

        Ok(config)
    }

    fn build_defaults(&mut self) -> Result<Defaults> {
        let mut defaults = Defaults::default();
        let chosen = self
            .selector
            .select("Which global default options would you like to configure?", DEFAULT_OPTIONS)?;
        for option in chosen {
            match option.as_str() {
                "Directory" => defaults.directory = self.prompt("Default directory", "")?,
                "Initial command" => {
                    defaults.initial_command = self.prompt("Default initial command", "")?
                }
                "Pre-command" => {
                    defaults.pre_command = self.optional("Default pre-command (optional)")?
                }
                "Post-command" => {
                    defaults.post_command = self.optional("Default post-command (optional)")?
                }
                _ => {}
            }
        }
        Ok(defaults)
    }

    fn build_window(&mut self) -> Result<Window> {
        let mut window = Window::default();
        let chosen = self
            .selector
            .select("Window configuration options available.", WINDOW_OPTIONS)?;
        for option in chosen {
            match option.as_str() {
                "Name" => window.name = self.prompt("Window name", "")?,
                "Directory" => window.directory = self.prompt("Window directory (optional)", "")?,
                "Initial command" => {
                    window.initial_command = self.prompt("Initial command (optional)", "")?
                }
                "Git branch" => window.git_branch = self.optional("Git branch (optional)")?,
                "Pre-command" => window.pre_command = self.optional("Pre-command (optional)")?,
                "Post-command" => window.post_command = self.optional("Post-command (optional)")?,
                _ => {}
            }
        }

        loop {
            self.say(&format!("\nPane Configuration (for window: {}):", window.name))?;
            if !self.confirm("Would you like to add a pane? (Yes/no)", "yes")? {
                break;
            }
            let pane = self.build_pane()?;
            window.panes.push(pane);
        }

        if window.panes.len() > 1 {
            window.layout = Some(self.build_layout(window.panes.len())?);
        }
        Ok(window)
    }

    fn build_pane(&mut self) -> Result<Pane> {
        let mut pane = Pane::default();
        let chosen = self
            .selector
            .select("Pane configuration options available.", PANE_OPTIONS)?;
        for option in chosen {
            match option.as_str() {
                "Directory" => pane.directory = self.prompt("Pane directory", "")?,
                "Initial command" => pane.initial_command = self.prompt("Initial command", "")?,
                "Pre-command" => pane.pre_command = self.optional("Pre-command (optional)")?,
                "Post-command" => pane.post_command = self.optional("Post-command (optional)")?,
                "Refresh interval" => {
                    pane.refresh_interval = self
                        .prompt("Refresh interval in seconds (0 for no refresh)", "0")?
                        .parse()
                        .unwrap_or_default();
                }
                _ => {}
            }
        }
        Ok(pane)
    }

    fn build_layout(&mut self, panes: usize) -> Result<Layout> {
        let kind = self.prompt("Layout type (simple/advanced)", "simple")?;
        if kind != "advanced" {
            let name: NamedLayout = self.prompt_parsed(
                "Layout (even-horizontal/even-vertical/main-horizontal/main-vertical)",
                "even-horizontal",
            )?;
            return Ok(Layout::Named(name));
        }

        let direction: Direction =
            self.prompt_parsed("Layout direction (horizontal/vertical)", "horizontal")?;
        let mut sizes = Vec::with_capacity(panes);
        for i in 0..panes {
            self.say(&format!("\nPane {} size:", i + 1))?;
            sizes.push(PaneSize {
                width: self.optional("Width percentage (e.g., 30%)")?,
                height: self.optional("Height percentage (e.g., 50%)")?,
            });
        }
        Ok(Layout::Directional(DirectionalLayout {
            direction,
            panes: sizes,
        }))
    }

    /// Re-ask until the answer parses.
    fn prompt_parsed<T>(&mut self, message: &str, default: &str) -> Result<T>
    where
        T: std::str::FromStr<Err = String>,
    {
        loop {
            match self.prompt(message, default)?.parse() {
                Ok(value) => return Ok(value),
                Err(e) => self.say(&e)?,
            }
        }
    }

    /// Ask where to save a loose config; `.yml` is appended if missing.
    pub fn save_path(&mut self) -> Result<PathBuf> {
        let mut name = self.prompt("Save configuration as", CONFIG_FILE_NAME)?;
        if !name.ends_with(".yml") {
            name.push_str(".yml");
        }
        Ok(PathBuf::from(name))
    }
}

/// Run the wizard on the terminal and save the result.
///
/// With `create_template` the config is stored in the templates directory
/// under that name; otherwise the user is asked for a file name.
pub fn run(create_template: Option<&str>) -> Result<PathBuf> {
    let stdin = io::stdin();
    let mut wizard = Wizard::new(stdin.lock(), io::stdout(), TerminalSelector);

    if let Some(name) = create_template {
        wizard.say(&format!("Creating template: {}", name))?;
    }
    let config = wizard.build_config()?;

    let path = match create_template {
        Some(name) => loader::template_path_in(&loader::ensure_templates_dir()?, name),
        None => wizard.save_path()?,
    };
    loader::save_config(&config, &path)?;
    wizard.say(&format!("Configuration saved to {}", path.display()))?;
    Ok(path)
}
