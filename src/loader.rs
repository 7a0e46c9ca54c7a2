//! Config file discovery and loading.
//!
//! A project config is a `tmux.conf.yml` found by walking up from the
//! current directory. Templates are reusable configs stored per user:
//!
//! 1. `$XDG_CONFIG_HOME/tmux-setup/templates/<name>.yml` (if XDG_CONFIG_HOME is set)
//! 2. `~/.config/tmux-setup/templates/<name>.yml`
//!
//! A project config naming a `template` is layered over that template
//! before anything else sees it.

use crate::config::Config;
use crate::error::{Result, SetupError};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name searched for in the working directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = "tmux.conf.yml";

const APP_DIR: &str = "tmux-setup";
const TEMPLATES_DIR: &str = "templates";

/// Determine the per-user config root.
///
/// Uses `$XDG_CONFIG_HOME/tmux-setup` when the variable is set, otherwise
/// `~/.config/tmux-setup` on every platform.
///
/// # Errors
///
/// Returns [`SetupError::NoConfigDir`] if the home directory cannot be determined.
pub fn config_root() -> Result<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            return Ok(PathBuf::from(xdg).join(APP_DIR));
        }
    }

    let home = dirs::home_dir().ok_or(SetupError::NoConfigDir)?;
    Ok(home.join(".config").join(APP_DIR))
}

/// Directory holding stored templates.
pub fn templates_dir() -> Result<PathBuf> {
    Ok(config_root()?.join(TEMPLATES_DIR))
}

/// Path of the template file for `name` inside `dir`.
pub fn template_path_in(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.yml", name))
}

/// Ensure the templates directory exists, creating it if necessary.
pub fn ensure_templates_dir() -> Result<PathBuf> {
    let dir = templates_dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Find `tmux.conf.yml` in `start` or the nearest ancestor, up to and
/// including the filesystem root.
///
/// # Errors
///
/// Returns [`SetupError::ConfigNotFound`] if no ancestor has one.
pub fn find_config_file(start: &Path) -> Result<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| SetupError::ConfigNotFound(start.to_path_buf()))
}

/// Read and parse a single config file without resolving its template.
pub fn read_config(path: &Path) -> Result<Config> {
    let contents = std::fs::read_to_string(path)?;
    let config = Config::from_yaml(&contents)?;
    Ok(config)
}

/// Load a project config and merge it over its template, if it names one.
///
/// # Errors
///
/// - [`SetupError::IoError`] if reading fails
/// - [`SetupError::ParseError`] if YAML parsing fails
/// - [`SetupError::TemplateNotFound`] if the named template does not exist
pub fn load_config(path: &Path) -> Result<Config> {
    let config = read_config(path)?;
    if config.template.as_deref().is_none_or(str::is_empty) {
        return Ok(config);
    }
    merge_template(config, &templates_dir()?)
}

/// Layer `config` over the template it names, looked up in `templates`.
fn merge_template(config: Config, templates: &Path) -> Result<Config> {
    match config.template.as_deref() {
        Some(name) if !name.is_empty() => {
            let template = load_template_from(templates, name)?;
            Ok(config.merge_over(template))
        }
        _ => Ok(config),
    }
}

/// Search upward from the working directory and load what is found.
pub fn load_discovered_config() -> Result<Config> {
    let cwd = std::env::current_dir()?;
    let path = find_config_file(&cwd)?;
    debug!(path = %path.display(), "using config");
    load_config(&path)
}

/// Load a stored template by name.
pub fn load_template(name: &str) -> Result<Config> {
    load_template_from(&templates_dir()?, name)
}

/// Load template `name` from `dir`. A template's own `template` field is
/// ignored; templates do not chain.
pub fn load_template_from(dir: &Path, name: &str) -> Result<Config> {
    let path = template_path_in(dir, name);
    if !path.is_file() {
        return Err(SetupError::TemplateNotFound {
            name: name.to_string(),
            path,
        });
    }
    debug!(path = %path.display(), "loading template");
    let mut template = read_config(&path)?;
    template.template = None;
    Ok(template)
}

/// Write `config` as YAML to `path`, creating parent directories.
pub fn save_config(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, config.to_yaml()?)?;
    Ok(())
}
