use clap::Parser;
use tracing::debug;

use linkdeck::cli::Cli;
use linkdeck::config;
use linkdeck::interfaces::{cli, tui};
use linkdeck::logging::{self, LogTarget};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let args = Cli::parse();

    config::init_config();
    let config = config::get_config();

    match args.command {
        Some(command) => {
            // Guard must outlive the command so buffered logs flush.
            let _guard = logging::init_logging(&config.logging, LogTarget::Stderr);
            debug!("CLI mode, backend: {}", config.api_base());

            if let Err(e) = cli::run_cli_command(command, config).await {
                match e.downcast_ref::<linkdeck::errors::ServiceError>() {
                    Some(service_error) => eprintln!("{}", service_error.format_colored()),
                    None => eprintln!("Error: {:#}", e),
                }
                std::process::exit(1);
            }
        }
        None => {
            let _guard = logging::init_logging(&config.logging, LogTarget::Terminal);
            debug!("TUI mode, backend: {}", config.api_base());

            if let Err(e) = tui::run_tui(config).await {
                eprintln!("Error: {:#}", e);
                std::process::exit(1);
            }
        }
    }
}
