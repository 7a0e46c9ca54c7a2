//! Working directory resolution.
//!
//! Windows resolve their directory against `defaults.directory`, and panes
//! resolve theirs against the owning window's resolved directory. Resolution
//! is purely textual: nothing is checked against the filesystem, and `~` is
//! left for the shell inside the pane to expand. Joined paths drop `.`
//! segments and repeated separators; `..` is kept as written.

use std::path::{Component, Path, PathBuf};

/// Resolve a child directory against its parent.
///
/// - empty `child` yields `parent` (which may itself be empty, meaning
///   "whatever tmux starts the pane in")
/// - absolute `child` is returned verbatim
/// - anything else is joined onto `parent`, without `.` segments
///
/// # Examples
///
/// ```
/// use tmux_setup::resolver::resolve;
///
/// assert_eq!(resolve("/srv/app", ""), "/srv/app");
/// assert_eq!(resolve("/srv/app", "/tmp"), "/tmp");
/// assert_eq!(resolve("/srv/app", "logs"), "/srv/app/logs");
/// assert_eq!(resolve("/srv/app", "./logs"), "/srv/app/logs");
/// ```
pub fn resolve(parent: &str, child: &str) -> String {
    if child.is_empty() {
        return parent.to_string();
    }
    if Path::new(child).is_absolute() {
        return child.to_string();
    }
    let joined: PathBuf = Path::new(parent)
        .join(child)
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    joined.to_string_lossy().into_owned()
}
