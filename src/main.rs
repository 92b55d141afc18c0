use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use multicloud_pricing::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = cli::Cli::parse();

    init_tracing();

    // Dispatch to appropriate command handler
    match args.get_command() {
        cli::Commands::Start => {
            commands::start::execute(args.config.clone()).await?;
        }
        cli::Commands::Quote {
            service,
            quantity,
            region,
        } => {
            commands::quote::execute(&args.config, &service, quantity, region.as_deref())?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&args.config)?,
            cli::ConfigCommands::Validate => commands::config::validate(&args.config)?,
        },
        cli::Commands::Version => {
            println!("Multi-Cloud Pricing v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
