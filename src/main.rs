//! GitGrab CLI - list, select, and clone GitHub repositories

use clap::Parser;
use clap::error::ErrorKind;
use colored::Colorize;

mod cli;
mod client;
mod config;
mod error;
mod git;
mod models;
mod output;
mod prompt;
mod validate;
mod workspace;

use cli::Cli;
use config::Settings;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            // Printing help/version or a usage error is best effort
            let _ = err.print();
            std::process::exit(code);
        }
    };

    init_logging(cli.debug);

    let settings = Settings::from_env();
    log::debug!("Resolved settings: {:?}", settings);

    if let Err(err) = cli::grab::run(&cli, &settings).await {
        eprintln!("{} {}", "Error:".red().bold(), err.to_string().red());
        if let Some(help) = err.remediation() {
            eprintln!("\n{}", help.yellow());
        }
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise `warn`, or `debug` with `--debug`.
fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
    log::debug!("Logger initialized at {} level", level);
}
