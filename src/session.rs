//! Session materialization.
//!
//! Turns a [`Config`] into a live tmux session by issuing control commands
//! one at a time, each awaited before the next. The order is fixed:
//!
//! 0. ([`Materializer::provision`] only) check dependencies; nothing is sent
//!    to tmux if one is missing
//! 1. create the detached session with a placeholder window, set 1-based
//!    window and pane indices
//! 2. for each window, in config order:
//!    pre-window hook, rename/create the window, `cd`, `git checkout`,
//!    panes, layout, post-window hook
//!
//! Hooks are best-effort and only logged. A command that could not be
//! issued aborts the run, wrapped with the 1-based index of the window being
//! built; later windows are not attempted.
//!
//! `base-index` is set after `new-session`, so the placeholder is only at
//! index 1 if the user's tmux config already uses a base index of 1.

use crate::config::{Config, Defaults, Layout, Pane, Window};
use crate::deps;
use crate::error::{Result, SetupError};
use crate::hooks::{self, HookRunner};
use crate::refresh::RefreshScheduler;
use crate::resolver;
use crate::tmux::{Axis, ControlCommand, ControlPort, Target};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Name of the window tmux creates with the session; renamed to window 1.
const PLACEHOLDER_WINDOW: &str = "placeholder";

/// Summary of a completed materialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Materialized {
    pub session: String,
    pub windows: usize,
    /// Number of pane refresh tasks left running in the background.
    pub refresh_tasks: usize,
}

/// Outcome of [`Materializer::provision`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Provisioned {
    /// The session was built from the config.
    Created(Materialized),
    /// A session with this name was already running and was left untouched.
    Reused(String),
}

/// Drives a [`ControlPort`] to build the session a config describes.
pub struct Materializer<'a> {
    port: Arc<dyn ControlPort>,
    hooks: &'a dyn HookRunner,
    refresh: RefreshScheduler,
    dependency_probe: Box<dyn Fn(&str) -> bool + 'a>,
}

impl<'a> Materializer<'a> {
    pub fn new(
        port: Arc<dyn ControlPort>,
        hooks: &'a dyn HookRunner,
        refresh: RefreshScheduler,
    ) -> Self {
        Materializer {
            port,
            hooks,
            refresh,
            dependency_probe: Box::new(deps::on_path),
        }
    }

    /// Resolve dependencies with `probe` instead of searching `PATH`.
    pub fn with_dependency_probe(mut self, probe: impl Fn(&str) -> bool + 'a) -> Self {
        self.dependency_probe = Box::new(probe);
        self
    }

    /// Build the session unless it already exists, wrapped in session hooks.
    ///
    /// `defaults.pre_command` runs before the first tmux command and
    /// `defaults.post_command` after the last window; both are best-effort.
    ///
    /// # Errors
    ///
    /// [`SetupError::MissingDependency`] before any command is issued, or
    /// any error from [`Materializer::materialize`].
    pub fn provision(&self, config: &Config) -> Result<Provisioned> {
        deps::check_with(&config.dependencies, |name| (self.dependency_probe)(name))?;

        let session = config.session_name();
        let exists = self.port.status(&ControlCommand::HasSession {
            session: session.to_string(),
        })?;
        if exists {
            info!(session, "session already running, skipping setup");
            return Ok(Provisioned::Reused(session.to_string()));
        }

        hooks::run_hook(self.hooks, "pre-session", config.defaults.pre_command.as_deref());
        let materialized = self.materialize(config)?;
        hooks::run_hook(self.hooks, "post-session", config.defaults.post_command.as_deref());

        Ok(Provisioned::Created(materialized))
    }

    /// Create the session and every window in order.
    ///
    /// # Errors
    ///
    /// - [`SetupError::SessionFailed`] if the session itself could not be created
    /// - [`SetupError::WindowFailed`] carrying the 1-based index of the first
    ///   window whose commands could not be issued
    pub fn materialize(&self, config: &Config) -> Result<Materialized> {
        let session = config.session_name();
        info!(session, windows = config.windows.len(), "creating session");

        self.create_session(session)
            .map_err(|e| SetupError::SessionFailed {
                session: session.to_string(),
                source: Box::new(e),
            })?;

        let mut refresh_tasks = 0;
        for (i, window) in config.windows.iter().enumerate() {
            refresh_tasks += self
                .create_window(session, i, window, &config.defaults)
                .map_err(|e| e.in_window(i + 1))?;
        }

        Ok(Materialized {
            session: session.to_string(),
            windows: config.windows.len(),
            refresh_tasks,
        })
    }

    fn create_session(&self, session: &str) -> Result<()> {
        self.port.run(&ControlCommand::NewSession {
            session: session.to_string(),
            window: PLACEHOLDER_WINDOW.to_string(),
        })?;
        self.port.run(&ControlCommand::SetOption {
            name: "base-index".into(),
            value: "1".into(),
        })?;
        self.port.run(&ControlCommand::SetWindowOption {
            name: "pane-base-index".into(),
            value: "1".into(),
        })
    }

    /// Build one window; returns how many refresh tasks it started.
    fn create_window(
        &self,
        session: &str,
        i: usize,
        window: &Window,
        defaults: &Defaults,
    ) -> Result<usize> {
        let index = i + 1;
        let name = window.display_name(i);
        debug!(session, index, name = %name, "creating window");

        hooks::run_hook(self.hooks, "pre-window", window.pre_command.as_deref());

        if i == 0 {
            self.port.run(&ControlCommand::RenameWindow {
                target: Target::window(session, 1),
                name,
            })?;
        } else {
            self.port.run(&ControlCommand::NewWindow {
                target: Target::window(session, index),
                name,
            })?;
        }

        let first_pane = Target::pane(session, index, 1);
        let dir = resolver::resolve(&defaults.directory, &window.directory);
        if !dir.is_empty() {
            self.send_keys(&first_pane, format!("cd {}", dir))?;
        }

        // After the cd, so the checkout happens in the window's directory.
        if let Some(branch) = window.git_branch.as_deref().filter(|b| !b.is_empty()) {
            self.send_keys(&first_pane, format!("git checkout {}", branch))?;
        }

        if window.panes.is_empty() {
            let command = if window.initial_command.is_empty() {
                &defaults.initial_command
            } else {
                &window.initial_command
            };
            if !command.is_empty() {
                self.send_keys(&first_pane, command.clone())?;
            }
        }

        let refresh_tasks = self.create_panes(session, index, window, &dir)?;

        if let Some(layout) = &window.layout {
            self.apply_layout(session, index, layout)?;
        }

        hooks::run_hook(self.hooks, "post-window", window.post_command.as_deref());
        Ok(refresh_tasks)
    }

    fn create_panes(
        &self,
        session: &str,
        index: usize,
        window: &Window,
        window_dir: &str,
    ) -> Result<usize> {
        // Only named layouts influence the split direction.
        let vertical = window.layout.as_ref().is_some_and(Layout::splits_vertically);
        let mut refresh_tasks = 0;

        for (j, pane) in window.panes.iter().enumerate() {
            hooks::run_hook(self.hooks, "pre-pane", pane.pre_command.as_deref());

            if j > 0 {
                self.port.run(&ControlCommand::SplitWindow {
                    target: Target::window(session, index),
                    vertical,
                })?;
            }

            let target = Target::pane(session, index, j + 1);
            if self.setup_pane(&target, pane, window_dir)? {
                refresh_tasks += 1;
            }

            hooks::run_hook(self.hooks, "post-pane", pane.post_command.as_deref());
        }

        Ok(refresh_tasks)
    }

    /// Send the pane's `cd` and command; returns whether a refresh task started.
    fn setup_pane(&self, target: &Target, pane: &Pane, window_dir: &str) -> Result<bool> {
        let dir = resolver::resolve(window_dir, &pane.directory);
        if !dir.is_empty() {
            self.send_keys(target, format!("cd {}", dir))?;
        }

        if !pane.initial_command.is_empty() {
            self.send_keys(target, pane.initial_command.clone())?;
        }

        if pane.refresh_interval == 0 {
            return Ok(false);
        }
        self.refresh.spawn(
            Arc::clone(&self.port),
            target.clone(),
            pane.initial_command.clone(),
            Duration::from_secs(pane.refresh_interval),
        );
        Ok(true)
    }

    /// Named layouts are one `select-layout`. Directional layouts become a
    /// `resize-pane` per specified dimension, pane 1 to N, width before
    /// height; each resize acts on the sizes left by the previous one.
    fn apply_layout(&self, session: &str, index: usize, layout: &Layout) -> Result<()> {
        match layout {
            Layout::Named(name) => self.port.run(&ControlCommand::SelectLayout {
                target: Target::window(session, index),
                layout: name.to_tmux_layout().to_string(),
            }),
            Layout::Directional(directional) => {
                for (k, size) in directional.panes.iter().enumerate() {
                    let target = Target::pane(session, index, k + 1);
                    let dimensions = [(Axis::Width, &size.width), (Axis::Height, &size.height)];
                    for (axis, value) in dimensions {
                        let Some(value) = value.as_deref().filter(|v| !v.is_empty()) else {
                            continue;
                        };
                        self.port.run(&ControlCommand::ResizePane {
                            target: target.clone(),
                            axis,
                            size: strip_percent(value).to_string(),
                        })?;
                    }
                }
                Ok(())
            }
        }
    }

    fn send_keys(&self, target: &Target, keys: String) -> Result<()> {
        self.port.run(&ControlCommand::SendKeys {
            target: target.clone(),
            keys,
        })
    }
}

/// Drop one trailing `%`: `"30%"` becomes `"30"`.
fn strip_percent(value: &str) -> &str {
    value.strip_suffix('%').unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Direction, DirectionalLayout, NamedLayout, PaneSize};
    use crate::testing::{runtime, wait_until, RecordingHooks, RecordingPort};
    use tokio::runtime::Handle;

    fn pane(command: &str) -> Pane {
        Pane {
            initial_command: command.into(),
            ..Pane::default()
        }
    }

    fn window(name: &str, panes: Vec<Pane>) -> Window {
        Window {
            name: name.into(),
            panes,
            ..Window::default()
        }
    }

    fn keys(target: Target, keys: &str) -> ControlCommand {
        ControlCommand::SendKeys {
            target,
            keys: keys.into(),
        }
    }

    fn scheduler(rt: &tokio::runtime::Runtime) -> RefreshScheduler {
        RefreshScheduler::new(rt.handle().clone())
    }

    /// Materialize with recording collaborators, returning the issued commands.
    fn run(config: &Config) -> (Result<Materialized>, Vec<ControlCommand>) {
        let rt = runtime();
        let port = Arc::new(RecordingPort::default());
        let hooks = RecordingHooks::default();
        let materializer = Materializer::new(port.clone(), &hooks, scheduler(&rt));
        let result = materializer.materialize(config);
        (result, port.commands())
    }

    fn splits(commands: &[ControlCommand]) -> Vec<bool> {
        commands
            .iter()
            .filter_map(|c| match c {
                ControlCommand::SplitWindow { vertical, .. } => Some(*vertical),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_session_setup_commands() {
        let config = Config {
            windows: vec![Window::default()],
            ..Config::default()
        };
        let (result, commands) = run(&config);

        let materialized = result.unwrap();
        assert_eq!(materialized.session, "dev");
        assert_eq!(
            commands,
            vec![
                ControlCommand::NewSession {
                    session: "dev".into(),
                    window: "placeholder".into()
                },
                ControlCommand::SetOption {
                    name: "base-index".into(),
                    value: "1".into()
                },
                ControlCommand::SetWindowOption {
                    name: "pane-base-index".into(),
                    value: "1".into()
                },
                ControlCommand::RenameWindow {
                    target: Target::window("dev", 1),
                    name: "window-1".into()
                },
            ]
        );
    }

    #[test]
    fn test_windows_are_built_one_after_another() {
        let config = Config {
            session_name: "api".into(),
            windows: (1..=3)
                .map(|w| window(&format!("w{}", w), vec![pane("ls"), pane("pwd")]))
                .collect(),
            ..Config::default()
        };
        let (result, commands) = run(&config);
        assert_eq!(result.unwrap().windows, 3);

        // Every command after session setup belongs to one window; the
        // window numbers must never go back down.
        let window_of = |c: &ControlCommand| match c {
            ControlCommand::RenameWindow { target, .. }
            | ControlCommand::NewWindow { target, .. }
            | ControlCommand::SplitWindow { target, .. }
            | ControlCommand::SendKeys { target, .. } => target.window,
            other => panic!("unexpected command {}", other),
        };
        let order: Vec<usize> = commands[3..].iter().map(window_of).collect();
        assert!(order.windows(2).all(|w| w[0] <= w[1]));

        assert_eq!(
            commands[3..7].to_vec(),
            vec![
                ControlCommand::RenameWindow {
                    target: Target::window("api", 1),
                    name: "w1".into()
                },
                keys(Target::pane("api", 1, 1), "ls"),
                ControlCommand::SplitWindow {
                    target: Target::window("api", 1),
                    vertical: false
                },
                keys(Target::pane("api", 1, 2), "pwd"),
            ]
        );
        assert_eq!(
            commands[7],
            ControlCommand::NewWindow {
                target: Target::window("api", 2),
                name: "w2".into()
            }
        );
    }

    #[test]
    fn test_directory_then_checkout_then_panes_then_layout() {
        let config = Config {
            defaults: Defaults {
                directory: "/srv".into(),
                ..Defaults::default()
            },
            windows: vec![Window {
                directory: "api".into(),
                git_branch: Some("main".into()),
                layout: Some(Layout::Named(NamedLayout::EvenHorizontal)),
                panes: vec![
                    Pane {
                        directory: "logs".into(),
                        ..pane("tail -f app.log")
                    },
                    Pane {
                        directory: "/tmp".into(),
                        ..Pane::default()
                    },
                ],
                ..Window::default()
            }],
            ..Config::default()
        };
        let (_, commands) = run(&config);

        assert_eq!(
            commands[4..].to_vec(),
            vec![
                keys(Target::pane("dev", 1, 1), "cd /srv/api"),
                keys(Target::pane("dev", 1, 1), "git checkout main"),
                keys(Target::pane("dev", 1, 1), "cd /srv/api/logs"),
                keys(Target::pane("dev", 1, 1), "tail -f app.log"),
                ControlCommand::SplitWindow {
                    target: Target::window("dev", 1),
                    vertical: false
                },
                keys(Target::pane("dev", 1, 2), "cd /tmp"),
                ControlCommand::SelectLayout {
                    target: Target::window("dev", 1),
                    layout: "even-horizontal".into()
                },
            ]
        );
    }

    #[test]
    fn test_empty_directories_send_no_cd() {
        let config = Config {
            windows: vec![window("plain", vec![Pane::default(), Pane::default()])],
            ..Config::default()
        };
        let (_, commands) = run(&config);
        assert!(!commands
            .iter()
            .any(|c| matches!(c, ControlCommand::SendKeys { .. })));
    }

    #[test]
    fn test_split_direction_follows_named_layout() {
        let with_layout = |layout: Layout| Config {
            windows: vec![Window {
                layout: Some(layout),
                ..window("w", vec![pane("a"), pane("b")])
            }],
            ..Config::default()
        };

        let (_, commands) = run(&with_layout(Layout::Named(NamedLayout::MainVertical)));
        assert_eq!(splits(&commands), vec![true]);

        let (_, commands) = run(&with_layout(Layout::Named(NamedLayout::EvenHorizontal)));
        assert_eq!(splits(&commands), vec![false]);

        let directional = Layout::Directional(DirectionalLayout {
            direction: Direction::Vertical,
            panes: vec![],
        });
        let (_, commands) = run(&with_layout(directional));
        assert_eq!(splits(&commands), vec![false]);
    }

    #[test]
    fn test_directional_layout_resizes_each_pane() {
        let config = Config {
            windows: vec![Window {
                layout: Some(Layout::Directional(DirectionalLayout {
                    direction: Direction::Horizontal,
                    panes: vec![
                        PaneSize {
                            width: Some("70%".into()),
                            height: Some("50%".into()),
                        },
                        PaneSize {
                            width: None,
                            height: Some("40".into()),
                        },
                    ],
                })),
                ..window("sized", vec![pane("a"), pane("b")])
            }],
            ..Config::default()
        };
        let (_, commands) = run(&config);

        let resizes: Vec<_> = commands
            .into_iter()
            .filter(|c| matches!(c, ControlCommand::ResizePane { .. }))
            .collect();
        let resize = |pane, axis, size: &str| ControlCommand::ResizePane {
            target: Target::pane("dev", 1, pane),
            axis,
            size: size.into(),
        };
        assert_eq!(
            resizes,
            vec![
                resize(1, Axis::Width, "70"),
                resize(1, Axis::Height, "50"),
                resize(2, Axis::Height, "40"),
            ]
        );
    }

    #[test]
    fn test_paneless_window_runs_initial_command() {
        let config = Config {
            defaults: Defaults {
                initial_command: "htop".into(),
                ..Defaults::default()
            },
            windows: vec![
                Window {
                    initial_command: "nvim".into(),
                    ..Window::default()
                },
                Window::default(),
                window("with-panes", vec![Pane::default()]),
            ],
            ..Config::default()
        };
        let (_, commands) = run(&config);

        let sent: Vec<_> = commands
            .iter()
            .filter_map(|c| match c {
                ControlCommand::SendKeys { target, keys } => Some((target.window, keys.as_str())),
                _ => None,
            })
            .collect();
        assert_eq!(sent, vec![(1, "nvim"), (2, "htop")]);
    }

    #[test]
    fn test_failing_pre_window_hook_is_not_fatal() {
        let rt = runtime();
        let port = Arc::new(RecordingPort::default());
        let hooks = RecordingHooks::failing(&["exit 1"]);
        let materializer = Materializer::new(port.clone(), &hooks, scheduler(&rt));

        let config = Config {
            windows: vec![Window {
                pre_command: Some("exit 1".into()),
                post_command: Some("echo done".into()),
                ..window("hooked", vec![pane("a"), pane("b")])
            }],
            ..Config::default()
        };

        assert!(materializer.materialize(&config).is_ok());
        assert_eq!(hooks.ran(), vec!["exit 1", "echo done"]);
        assert_eq!(splits(&port.commands()).len(), 1);
        assert!(port.commands().contains(&keys(Target::pane("dev", 1, 2), "b")));
    }

    #[test]
    fn test_pane_hooks_wrap_each_pane() {
        let rt = runtime();
        let port = Arc::new(RecordingPort::default());
        let hooks = RecordingHooks::default();
        let materializer = Materializer::new(port, &hooks, scheduler(&rt));

        let config = Config {
            windows: vec![window(
                "w",
                vec![
                    Pane {
                        pre_command: Some("pre-1".into()),
                        post_command: Some("post-1".into()),
                        ..Pane::default()
                    },
                    Pane {
                        pre_command: Some("pre-2".into()),
                        ..Pane::default()
                    },
                ],
            )],
            ..Config::default()
        };

        materializer.materialize(&config).unwrap();
        assert_eq!(hooks.ran(), vec!["pre-1", "post-1", "pre-2"]);
    }

    #[test]
    fn test_window_failure_stops_remaining_windows() {
        let rt = runtime();
        let port = Arc::new(RecordingPort::failing_on(|c| {
            matches!(c, ControlCommand::NewWindow { target, .. } if target.window == 2)
        }));
        let hooks = RecordingHooks::default();
        let materializer = Materializer::new(port.clone(), &hooks, scheduler(&rt));

        let config = Config {
            windows: vec![
                window("one", vec![pane("a")]),
                window("two", vec![pane("b")]),
                window("three", vec![pane("c")]),
            ],
            ..Config::default()
        };

        let err = materializer.materialize(&config).unwrap_err();
        assert!(matches!(err, SetupError::WindowFailed { index: 2, .. }));
        assert!(err.to_string().contains("window 2"));
        assert!(!port
            .commands()
            .iter()
            .any(|c| matches!(c, ControlCommand::NewWindow { target, .. } if target.window == 3)));
    }

    #[test]
    fn test_session_failure_is_reported() {
        let rt = runtime();
        let port = Arc::new(RecordingPort::failing_on(|c| {
            matches!(c, ControlCommand::NewSession { .. })
        }));
        let hooks = RecordingHooks::default();
        let materializer = Materializer::new(port.clone(), &hooks, scheduler(&rt));

        let err = materializer
            .materialize(&Config {
                windows: vec![Window::default()],
                ..Config::default()
            })
            .unwrap_err();
        assert!(matches!(err, SetupError::SessionFailed { .. }));
        assert_eq!(port.commands().len(), 1);
    }

    #[test]
    fn test_provision_reuses_running_session() {
        let rt = runtime();
        let port = Arc::new(RecordingPort::with_existing_session());
        let hooks = RecordingHooks::default();
        let materializer = Materializer::new(port.clone(), &hooks, scheduler(&rt));

        let config = Config {
            session_name: "api".into(),
            defaults: Defaults {
                pre_command: Some("echo pre".into()),
                ..Defaults::default()
            },
            windows: vec![Window::default()],
            ..Config::default()
        };

        assert_eq!(
            materializer.provision(&config).unwrap(),
            Provisioned::Reused("api".into())
        );
        assert_eq!(port.commands().len(), 1);
        assert!(hooks.ran().is_empty());
    }

    #[test]
    fn test_missing_dependency_issues_no_commands() {
        let rt = runtime();
        let port = Arc::new(RecordingPort::default());
        let hooks = RecordingHooks::default();
        let probed = std::sync::Mutex::new(Vec::new());
        let materializer = Materializer::new(port.clone(), &hooks, scheduler(&rt))
            .with_dependency_probe(|name| {
                probed.lock().unwrap().push(name.to_string());
                name != "cargo"
            });

        let config = Config {
            dependencies: vec!["git".into(), "cargo".into(), "make".into()],
            defaults: Defaults {
                pre_command: Some("echo pre".into()),
                ..Defaults::default()
            },
            windows: vec![window("code", vec![pane("ls")])],
            ..Config::default()
        };

        let err = materializer.provision(&config).unwrap_err();
        assert!(matches!(err, SetupError::MissingDependency(ref name) if name == "cargo"));
        assert!(port.commands().is_empty());
        assert!(hooks.ran().is_empty());
        assert_eq!(*probed.lock().unwrap(), vec!["git", "cargo"]);
    }

    #[test]
    fn test_present_dependencies_let_provision_proceed() {
        let rt = runtime();
        let port = Arc::new(RecordingPort::default());
        let hooks = RecordingHooks::default();
        let materializer =
            Materializer::new(port.clone(), &hooks, scheduler(&rt)).with_dependency_probe(|_| true);

        let config = Config {
            dependencies: vec!["git".into()],
            ..Config::default()
        };

        assert!(matches!(
            materializer.provision(&config).unwrap(),
            Provisioned::Created(_)
        ));
        assert!(matches!(
            port.commands()[0],
            ControlCommand::HasSession { .. }
        ));
    }

    #[test]
    fn test_provision_runs_session_hooks_around_windows() {
        let rt = runtime();
        let port = Arc::new(RecordingPort::default());
        let hooks = RecordingHooks::failing(&["echo pre"]);
        let materializer = Materializer::new(port, &hooks, scheduler(&rt));

        let config = Config {
            defaults: Defaults {
                pre_command: Some("echo pre".into()),
                post_command: Some("echo post".into()),
                ..Defaults::default()
            },
            windows: vec![Window {
                pre_command: Some("echo window".into()),
                ..Window::default()
            }],
            ..Config::default()
        };

        let provisioned = materializer.provision(&config).unwrap();
        assert!(matches!(provisioned, Provisioned::Created(_)));
        assert_eq!(hooks.ran(), vec!["echo pre", "echo window", "echo post"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_panes_resend_their_command() {
        let port = Arc::new(RecordingPort::default());
        let hooks = RecordingHooks::default();
        let refresh = RefreshScheduler::new(Handle::current());
        let materializer = Materializer::new(port.clone(), &hooks, refresh);

        let config = Config {
            windows: vec![window(
                "clock",
                vec![
                    pane("ls"),
                    Pane {
                        refresh_interval: 5,
                        ..pane("date")
                    },
                ],
            )],
            ..Config::default()
        };

        let materialized = materializer.materialize(&config).unwrap();
        assert_eq!(materialized.refresh_tasks, 1);
        let issued = port.commands().len();

        for n in 1..=3 {
            tokio::time::advance(Duration::from_secs(5)).await;
            wait_until(|| port.commands().len() == issued + n).await;
        }

        let refreshes = port.commands()[issued..].to_vec();
        let date = keys(Target::pane("dev", 1, 2), "date");
        assert_eq!(refreshes, vec![date.clone(), date.clone(), date]);
    }
}
