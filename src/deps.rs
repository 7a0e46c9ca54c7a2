//! Required executable checks.
//!
//! Runs before the session is touched so that a missing tool aborts the
//! whole run with nothing created.

use crate::error::{Result, SetupError};
use tracing::debug;

/// Verify each dependency resolves to an executable on `PATH`.
///
/// Names are checked in order and the first missing one is reported; later
/// names are not probed.
///
/// # Errors
///
/// Returns [`SetupError::MissingDependency`] naming the first executable
/// that could not be found.
pub fn check<S: AsRef<str>>(names: &[S]) -> Result<()> {
    check_with(names, on_path)
}

/// Whether `name` resolves to an executable on `PATH`.
pub fn on_path(name: &str) -> bool {
    which::which(name).is_ok()
}

/// Like [`check`], with a caller-supplied resolution probe.
pub fn check_with<S, F>(names: &[S], mut probe: F) -> Result<()>
where
    S: AsRef<str>,
    F: FnMut(&str) -> bool,
{
    for name in names {
        let name = name.as_ref();
        if !probe(name) {
            return Err(SetupError::MissingDependency(name.to_string()));
        }
        debug!(dependency = name, "found");
    }
    Ok(())
}
