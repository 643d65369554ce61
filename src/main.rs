//! Entry point: parse CLI and dispatch to command handlers.

use athlete_search::{
    cli::{AthleteSearch, Commands},
    commands::{
        load_csv::handle_load_csv,
        search::{handle_age, handle_championship, handle_name, handle_skill},
    },
    Result,
};
use clap::Parser;

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = AthleteSearch::parse();

    match app.command {
        Commands::Name { term, json } => handle_name(&term.join(" "), json).await?,

        Commands::Skill { term, json } => handle_skill(&term.join(" "), json).await?,

        Commands::Championship { term, json } => {
            handle_championship(&term.join(" "), json).await?
        }

        Commands::Age { min, max, json } => handle_age(min, max, json).await?,

        Commands::LoadCsv { file, verbose } => handle_load_csv(&file, verbose).await?,
    }

    Ok(())
}
