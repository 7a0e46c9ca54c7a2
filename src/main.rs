//! tmux-setup CLI entry point.
//!
//! This binary provides the `tmux-setup` command for building a tmux
//! session from YAML configuration and attaching to it.

use clap::Parser;
use std::sync::Arc;
use tmux_setup::attach::{self, ExecHandoff};
use tmux_setup::cli::{Cli, Commands, ConfigSource};
use tmux_setup::config::Config;
use tmux_setup::error::Result;
use tmux_setup::hooks::ShellHooks;
use tmux_setup::refresh::RefreshScheduler;
use tmux_setup::{loader, wizard, Materializer, Provisioned, TmuxPort};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`).
const LOG_ENV: &str = "TMUX_SETUP_LOG";

fn main() {
    init_logging();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Main application logic.
fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Wizard { create_template }) = &cli.command {
        wizard::run(create_template.as_deref())?;
        return Ok(());
    }

    let config = load(&cli.config_source())?;
    let tmux = TmuxPort::locate()?;

    run_session(&cli, &config, tmux)
}

/// Load the config a run was asked to use.
fn load(source: &ConfigSource) -> Result<Config> {
    match source {
        ConfigSource::Discover => loader::load_discovered_config(),
        ConfigSource::File(path) => loader::load_config(path),
        ConfigSource::Template(name) => loader::load_template(name),
    }
}

/// Build (or reuse) the session, then attach or stay detached.
fn run_session(cli: &Cli, config: &Config, tmux: TmuxPort) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;

    let handoff = ExecHandoff::new(tmux.binary());
    let port = Arc::new(tmux);
    let hooks = ShellHooks;
    let materializer = Materializer::new(
        port.clone(),
        &hooks,
        RefreshScheduler::new(runtime.handle().clone()),
    );

    let refresh_tasks = match materializer.provision(config)? {
        Provisioned::Created(materialized) => materialized.refresh_tasks,
        Provisioned::Reused(_) => 0,
    };

    if !cli.detach {
        return attach::attach(
            port.as_ref(),
            &handoff,
            config.session_name(),
            config.focus_window(),
        );
    }

    if refresh_tasks > 0 {
        info!(refresh_tasks, "refreshing panes until interrupted");
        eprintln!(
            "Session '{}' is ready; refreshing {} pane(s), press Ctrl-C to stop.",
            config.session_name(),
            refresh_tasks
        );
        runtime.block_on(tokio::signal::ctrl_c())?;
    }
    Ok(())
}
