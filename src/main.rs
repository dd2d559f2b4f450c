//! progmem CLI - embed built web assets into firmware headers
//!
//! Usage: progmem <COMMAND>
//!
//! Commands:
//!   embed   Compress every asset and write the generated header
//!   check   Fail if the generated header is missing or stale
//!   list    Show the files that would be embedded
//!   symbol  Print the array symbol for a request path

mod commands;
mod ui;

use clap::Parser;

use progmem::presentation::{Cli, Commands};

use crate::ui::context::UiContext;

fn main() {
    let cli = Cli::parse();
    let ui = UiContext::new(cli.json, cli.verbose, cli.color);
    let config = cli.config.as_deref();

    let result = match &cli.command {
        Commands::Embed { source, encode } => {
            commands::embed::cmd_embed(&ui, config, source, encode).map(|()| true)
        }
        Commands::Check { source, encode } => commands::check::cmd_check(&ui, config, source, encode),
        Commands::List { source } => commands::list::cmd_list(&ui, config, source).map(|()| true),
        Commands::Symbol { paths, raw } => commands::symbol::cmd_symbol(&ui, paths, *raw).map(|()| true),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            ui::error::print_error(&err, &ui);
            std::process::exit(1);
        }
    }
}
