//! Terminal host for inknote notebooks.
//!
//! This is the only place that knows about stdout/stderr, colors and exit
//! codes. Everything else goes through [`inknoteapp::api::InknoteApi`].

mod args;
mod handlers;
mod print;

use args::{Cli, Commands};
use clap::Parser;
use inknoteapp::error::Result;
use inknoteapp::init::{initialize, InknoteContext, Overrides};
use log::debug;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!("event=cli_start command={:?}", cli.command);

    let mut ctx = initialize(Overrides {
        notebook_path: cli.file,
        key: cli.key,
        strategy: cli.strategy,
        config_dir: cli.config_dir,
    })?;

    dispatch(&mut ctx, cli.command)
}

/// `-v` turns on debug output; `RUST_LOG` still wins when set.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .try_init();
}

fn dispatch(ctx: &mut InknoteContext, command: Option<Commands>) -> Result<()> {
    match command {
        Some(Commands::Init { name, force }) => handlers::handle_init(ctx, name, force),
        Some(Commands::Info) => handlers::handle_info(ctx),
        Some(Commands::Pages) | None => handlers::handle_pages(ctx),
        Some(Commands::AddPage { title }) => handlers::handle_add_page(ctx, title),
        Some(Commands::RenamePage { index, title }) => {
            handlers::handle_rename_page(ctx, index, &title)
        }
        Some(Commands::RemovePage { index }) => handlers::handle_remove_page(ctx, index),
        Some(Commands::ClearPage { index }) => handlers::handle_clear_page(ctx, index),
        Some(Commands::Draw {
            page,
            points,
            brush,
            color,
        }) => handlers::handle_draw(ctx, page, &points, &brush, color.as_deref()),
        Some(Commands::Erase { page, stroke }) => handlers::handle_erase(ctx, page, stroke),
        Some(Commands::Export { output }) => handlers::handle_export(ctx, output),
        Some(Commands::Import { input }) => handlers::handle_import(ctx, &input),
        Some(Commands::Doctor) => handlers::handle_doctor(ctx),
        Some(Commands::Rekey {
            new_key,
            new_strategy,
        }) => handlers::handle_rekey(ctx, new_key.as_deref(), new_strategy.as_deref()),
        Some(Commands::Brushes) => handlers::handle_brushes(ctx),
    }
}
