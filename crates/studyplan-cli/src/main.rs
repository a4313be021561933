//! Studyplan CLI - generate study schedules and keep them as encrypted
//! documents, spreadsheets, or CSV files.
//!
//! This is the command-line interface for Studyplan. It provides a
//! user-friendly interface to the core library functionality.

use clap::Parser;

mod action_log;
mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod ui;

use app::AppContext;
use cli::{Cli, Commands};
use commands::{
    handle_completions, handle_config, handle_convert, handle_delete, handle_generate,
    handle_history, handle_list, handle_show,
};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_format);

    if let Err(err) = run(&cli) {
        tracing::debug!(error = ?err, "Command failed");
        eprintln!("Error: {}", err);
        if let Some(hint) = errors::hint_for(&err) {
            eprintln!("{}", hint);
        }
        std::process::exit(errors::exit_code_for(&err));
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let ctx = AppContext::new(cli);

    match &cli.command {
        Commands::Generate(args) => handle_generate(&ctx, args),
        Commands::Show(args) => handle_show(&ctx, args),
        Commands::Convert(args) => handle_convert(&ctx, args),
        Commands::List(args) => handle_list(&ctx, args),
        Commands::Delete(args) => handle_delete(&ctx, args),
        Commands::History(args) => handle_history(&ctx, args),
        Commands::Config => handle_config(&ctx),
        Commands::Completions { shell } => handle_completions(*shell),
    }
}
