//! Hush CLI - a local, encrypted password vault
//!
//! This is the command-line interface for Hush. It resolves the vault path,
//! collects passwords from the terminal or the environment, and renders
//! results and errors.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod output;
mod ui;

use clap::Parser;
use hush_core::VERSION;
use tracing_subscriber::EnvFilter;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{entries, generate, implode, init, misc};
use crate::constants::LOG_ENV;
use crate::errors::Report;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(false);
        let report = Report::from_error(&e);
        tracing::debug!(error = ?e, exit_code = report.exit_code, "command failed");
        print_error(&ui_ctx, &report.message, report.hint.as_deref());
        std::process::exit(report.exit_code);
    }
}

/// Log to stderr. `--verbose` forces debug; otherwise HUSH_LOG, default warn.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Init) => {
            init::handle_init(ctx)?;
        }
        Some(Commands::Add(args)) => {
            entries::handle_add(ctx, args)?;
        }
        Some(Commands::Get(args)) => {
            entries::handle_get(ctx, args)?;
        }
        Some(Commands::Remove(args)) => {
            entries::handle_remove(ctx, args)?;
        }
        Some(Commands::List(args)) => {
            entries::handle_list(ctx, args)?;
        }
        Some(Commands::Generate(args)) => {
            generate::handle_generate(ctx, args)?;
        }
        Some(Commands::Implode(args)) => {
            implode::handle_implode(ctx, args)?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args)?;
        }
        None => {
            println!("Hush v{}", VERSION);
            println!("\nQuickstart:");
            println!("  hush init");
            println!("  hush add github");
            println!("  hush get github");
            println!("  hush generate --length 24 --save bank");
            println!("\nRun `hush --help` for full usage.");
        }
    }

    Ok(())
}
