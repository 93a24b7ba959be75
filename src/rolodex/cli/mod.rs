//! # CLI Layer
//!
//! The interactive front end. It is the only place that touches stdin,
//! stdout, environment variables and exit codes.
//!
//! - [`args`]: process flags
//! - [`parse`]: turns one input line into an [`parse::Input`]
//! - [`render`]: prints a `CmdResult`
//!
//! [`run`] wires it up: flags and config resolve the snapshot path, the
//! directory is loaded once, the loop runs until an exit command or end of
//! input, and the directory is saved before leaving. Validation, not-found
//! and usage errors are printed and the loop continues. A failed save is
//! returned to `main` and ends the process with a non-zero code.

mod args;
mod parse;
mod render;

use args::Cli;
use clap::Parser;
use directories::ProjectDirs;
use parse::{parse_line, Input};
use rolodex::api::RolodexApi;
use rolodex::commands::hello::GREETING;
use rolodex::commands::CmdResult;
use rolodex::config::RolodexConfig;
use rolodex::error::{Result, RolodexError};
use rolodex::store::fs::FileStore;
use rolodex::store::SnapshotStore;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const HOME_ENV: &str = "ROLODEX_HOME";
const FAREWELL: &str = "Good bye!";

struct AppContext {
    api: RolodexApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let mut ctx = init_context(&cli)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    repl(&mut ctx.api, stdin.lock(), &mut stdout.lock())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config_dir = cli.config_dir.clone().unwrap_or_else(|| default_config_dir(&cwd));
    let config = RolodexConfig::load(&config_dir)?;
    debug!(config_dir = %config_dir.display(), ?config, "loaded config");

    let page_size = cli.page_size.unwrap_or(config.page_size);
    if page_size == 0 {
        return Err(RolodexError::Config("page size must be at least 1".to_string()));
    }
    let snapshot = match &cli.file {
        Some(file) => cwd.join(file),
        None => config.snapshot_path(&cwd),
    };

    let store = FileStore::new(snapshot);
    debug!(snapshot = %store.path().display(), page_size, "opening contacts");
    let api = RolodexApi::open(store, page_size)?;
    Ok(AppContext { api })
}

fn default_config_dir(cwd: &std::path::Path) -> PathBuf {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return PathBuf::from(home);
    }
    ProjectDirs::from("com", "rolodex", "rolodex")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| cwd.to_path_buf())
}

/// Read commands from `input` until an exit command or end of input, then
/// save. Only the save (and I/O on `out`) can fail this function.
fn repl<S, R, W>(api: &mut RolodexApi<S>, input: R, out: &mut W) -> Result<()>
where
    S: SnapshotStore,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{}", GREETING)?;

    for line in input.lines() {
        let line = line?;
        let outcome = match parse_line(&line) {
            Ok(Input::Exit) => break,
            Ok(Input::Empty) => continue,
            Ok(command) => dispatch(api, command),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(result) => render::print_result(out, &result)?,
            Err(e) if e.is_recoverable() => {
                debug!(error = %e, "command failed");
                render::print_error(out, &e)?;
            }
            Err(e) => return Err(e),
        }
    }

    if let Err(e) = api.save() {
        warn!(error = %e, "could not save contacts");
        return Err(e);
    }
    writeln!(out, "{}", FAREWELL)?;
    Ok(())
}

fn dispatch<S: SnapshotStore>(api: &mut RolodexApi<S>, command: Input) -> Result<CmdResult> {
    match command {
        Input::Hello => Ok(api.hello()),
        Input::Add { name, phone } => api.add_contact(&name, &phone),
        Input::Change { name, phone } => api.change_phone(&name, &phone),
        Input::Phone { name } => api.show_phone(&name),
        Input::ShowAll => Ok(api.show_all()),
        Input::ShowBirthdays => Ok(api.show_birthdays()),
        Input::SearchPhone { fragment } => Ok(api.search_phone(&fragment)),
        Input::Delete { name } => api.delete_contact(&name),
        Input::Birthday { name, date } => api.set_birthday(&name, &date),
        Input::Empty | Input::Exit => Ok(CmdResult::default()),
    }
}
