//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use f1_cli::{
    cli::{Commands, F1},
    commands::{
        drivers::handle_drivers, points::handle_points, results::handle_results,
        standings::handle_standings, status::handle_status,
    },
    service::DataService,
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let app = F1::parse();
    let service = DataService::new(app.season, app.refresh)?;

    match app.command {
        Commands::Drivers {
            detailed,
            team,
            name,
        } => handle_drivers(&service, detailed, team, name).await?,

        Commands::Standings {
            constructors,
            json,
            verbose,
        } => handle_standings(&service, constructors, json, verbose).await?,

        Commands::Results { location, sprint } => {
            handle_results(&service, location, sprint).await?
        }

        Commands::Points { name } => handle_points(&service, name).await?,

        Commands::Status => handle_status(&service).await?,
    }

    Ok(())
}
