//! # CLI Layer
//!
//! Turns parsed arguments into API calls and API results into terminal
//! output.
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Resolves the data file and builds the API
//! - `handle_*()`: Per-command handlers that call the API and print

use super::render::{print_messages, render_human_table};
use super::setup::{normalize_args, Cli, Commands};
use clap::Parser;
use humans::api::HumansApi;
use humans::config::DataPathSources;
use humans::error::{HumansError, Result};
use humans::model::Human;
use humans::store::fs::FileStore;
use log::debug;

struct AppContext {
    api: HumansApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            name,
            surname,
            zodiac,
            date,
        }) => handle_add(&mut ctx, Human::new(name, surname, zodiac, date)),
        Some(Commands::Display) | None => handle_display(&ctx),
        Some(Commands::Select { zodiac }) => handle_select(&ctx, &zodiac),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let sources = DataPathSources::from_process(cli.data.clone());
    let (path, source) = sources
        .resolve_with_source()
        .ok_or(HumansError::MissingDataPath)?;
    debug!("data file {} (from {:?})", path.display(), source);

    Ok(AppContext {
        api: HumansApi::new(FileStore::new(path)),
    })
}

fn handle_add(ctx: &mut AppContext, human: Human) -> Result<()> {
    let result = ctx.api.add_human(human)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_display(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.display_humans()?;
    print!("{}", render_human_table(&result.listed_humans));
    Ok(())
}

fn handle_select(ctx: &AppContext, zodiac: &str) -> Result<()> {
    let result = ctx.api.select_humans(zodiac)?;
    print!("{}", render_human_table(&result.listed_humans));
    Ok(())
}
