use anyhow::Result;
use clap::Parser;
use std::io;

use navreplay::config::Config;
use navreplay::file::loader::{open_commands, replay};
use navreplay::file::saver::{save_routes_file, write_routes};
use navreplay::history::navigator::Navigator;

/// navreplay - Replays navigation commands and prints the visited routes
#[derive(Parser)]
#[command(name = "navreplay")]
#[command(version)]
#[command(about = "Replays BACK/FORWARD/URL commands and prints every route visited", long_about = None)]
struct Cli {
    /// Command file, one command per line (omit or use - to read stdin)
    input: Option<String>,

    /// Write routes to this file instead of stdout (.gz is compressed)
    #[arg(short, long)]
    output: Option<String>,

    /// Domain shown for pages visited before any domain is known
    #[arg(long)]
    empty_domain: Option<String>,

    /// Store the effective settings in the config file before replaying
    #[arg(long)]
    save_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // CLI overrides config
    let mut config = Config::load();
    if let Some(empty_domain) = cli.empty_domain {
        config.empty_domain = empty_domain;
    }
    if cli.save_config {
        config.save()?;
        if let Some(path) = Config::config_path() {
            log::info!("Saved config to {}", path.display());
        }
    }

    let reader = open_commands(cli.input.as_deref())?;
    let mut navigator = Navigator::with_empty_domain(config.empty_domain.clone());
    let commands = replay(reader, &mut navigator)?;

    let routes = navigator.finish();
    log::info!("Replayed {} command(s), {} route(s)", commands, routes.len());

    match cli.output {
        Some(path) => save_routes_file(path, &routes, &config),
        None => write_routes(io::stdout().lock(), &routes),
    }
}
