//! keymap-playground - try keymap presets against live key presses.
//!
//! Responsibilities:
//! - Build a keymap from a preset, config overlay and CLI flags.
//! - Feed crossterm key events to the dispatcher and report the winner.
//!
//! Does NOT handle:
//! - Persisting any configuration.
//!
//! Invariants:
//! - Raw mode is always restored on exit, including panics (`TerminalGuard`).
//! - Logs go to a file, never to the raw-mode terminal.

use std::cell::Cell;
use std::io::Write;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use keymap::{
    BindingDecl, BindingOptions, DispatchOutcome, Keymap, KeymapConfig, KeymapPreset, bind_many,
    handler,
};

/// Command-line arguments for keymap-playground.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables (KEYMAP_PRESET, KEYMAP_SCOPE, KEYMAP_ACTIVE)
/// 3. Defaults
#[derive(Debug, Parser)]
#[command(
    name = "keymap-playground",
    about = "Dispatch live key presses through a keymap preset",
    version,
    after_help = "Examples:\n  keymap-playground\n  keymap-playground --preset vim\n  keymap-playground --preset emacs --list\n  RUST_LOG=keymap=debug keymap-playground --log-dir /tmp/keymap\n"
)]
struct Cli {
    /// Preset to load (default, vim, emacs)
    #[arg(long, short = 'p')]
    preset: Option<KeymapPreset>,

    /// Initial scope
    #[arg(long, short = 's')]
    scope: Option<String>,

    /// Override a binding, as id=combo (repeatable)
    #[arg(long = "bind", value_name = "ID=COMBO")]
    overrides: Vec<String>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,

    /// Print the bindings and exit
    #[arg(long)]
    list: bool,
}

/// Restores the terminal when dropped.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

fn build_config(cli: &Cli) -> Result<KeymapConfig> {
    let mut config = KeymapConfig::default().from_env()?;
    if let Some(preset) = cli.preset {
        config.preset = preset;
    }
    if let Some(scope) = &cli.scope {
        config.scope = Some(scope.clone());
    }
    for entry in &cli.overrides {
        let (id, combo) = entry
            .split_once('=')
            .with_context(|| format!("--bind expects ID=COMBO, got '{}'", entry))?;
        config
            .overrides
            .insert(id.trim().to_string(), combo.trim().to_string());
    }
    config.validate()?;
    Ok(config)
}

fn print_bindings(keymap: &Keymap, out: &mut impl Write) -> Result<()> {
    for category in keymap.categories() {
        write!(out, "{}\r\n", category)?;
        for binding in keymap.bindings_by_category(&category) {
            let scope = binding
                .scope
                .as_deref()
                .map(|s| format!(" [{}]", s))
                .unwrap_or_default();
            write!(
                out,
                "  {:<14} {:<20} {}{}\r\n",
                binding.combo.to_string(),
                binding.id,
                binding.description.as_deref().unwrap_or(""),
                scope
            )?;
        }
    }
    for conflict in keymap.conflicts() {
        write!(
            out,
            "conflict: {} -> {} shadows {:?}\r\n",
            conflict.combo, conflict.winner, conflict.shadowed
        )?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    std::fs::create_dir_all(&cli.log_dir)?;
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "keymap-playground.log");
    let (non_blocking, _guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();

    let config = build_config(&cli)?;
    let keymap = Keymap::from_config(&config);
    let mut stdout = std::io::stdout();

    if cli.list {
        print_bindings(&keymap, &mut stdout)?;
        return Ok(());
    }

    let quit = Rc::new(Cell::new(false));
    let flag = quit.clone();
    keymap.replace_handler("app.exit", handler(move || flag.set(true)));

    let handle = keymap.handle();
    let scope_switch = |scope: Option<&'static str>| {
        let handle = handle.clone();
        handler(move || {
            if let Err(e) = handle.set_scope(scope) {
                tracing::error!(error = %e, "Failed to switch scope");
            }
        })
    };
    let _scope_bindings = bind_many(
        &handle,
        vec![
            BindingDecl::new("playground.scope.vim", "alt+v", scope_switch(Some("vim")))
                .options(BindingOptions::default().category("Playground").priority(200)),
            BindingDecl::new("playground.scope.emacs", "alt+e", scope_switch(Some("emacs")))
                .options(BindingOptions::default().category("Playground").priority(200)),
            BindingDecl::new("playground.scope.global", "alt+g", scope_switch(None))
                .options(BindingOptions::default().category("Playground").priority(200)),
        ],
    )?;

    enable_raw_mode()?;
    let _terminal = TerminalGuard;

    print_bindings(&keymap, &mut stdout)?;
    write!(stdout, "\r\nPress keys; Ctrl+C exits.\r\n")?;
    stdout.flush()?;

    while !quit.get() {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let scope = keymap.scope();
        match keymap.dispatch_key(key) {
            DispatchOutcome::Handled { id } => {
                write!(stdout, "{:?} -> {} (scope: {:?})\r\n", key.code, id, scope)?;
            }
            DispatchOutcome::Unhandled => {
                write!(stdout, "{:?} -> unhandled (scope: {:?})\r\n", key.code, scope)?;
            }
        }
        stdout.flush()?;
    }

    tracing::info!("Playground exited");
    Ok(())
}
