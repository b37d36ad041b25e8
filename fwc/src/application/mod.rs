pub mod error;
pub mod handlers;

use crate::presentation::cli::{Cli, Commands};
use error::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_ENV: &str = "FWC_LOG";

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Extract {
            container,
            dest,
            exact,
            dry_run,
        } => handlers::handle_extract(container, dest, exact, dry_run),
        Commands::List { container, json } => handlers::handle_list(container, json),
        Commands::Info { container, json } => handlers::handle_info(container, json),
    }
}
