//! lightbnb CLI - operator front end for the LightBnB data-access gateway
//!
//! Every subcommand maps to one gateway operation and prints JSON:
//! - `migrate`: create the users/properties/reservations/property_reviews tables
//! - `user` / `add-user`: look up or insert users
//! - `reservations`: a guest's past reservations
//! - `properties`: filtered property search
//! - `add-property`: add a listing to the in-memory store

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lightbnb_core::LightbnbConfig;

mod commands;
mod context;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "lightbnb",
    author,
    version,
    about = "Query the LightBnB store for users, reservations and properties"
)]
struct Cli {
    /// Config file (default: ~/.lightbnb/config.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging, including generated SQL
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create the gateway tables if they do not exist
    Migrate,
    /// Look up a user by email or id
    User(commands::users::UserArgs),
    /// Insert a user
    AddUser(commands::users::AddUserArgs),
    /// List a guest's past reservations
    Reservations(commands::reservations::ReservationsArgs),
    /// Search reviewed properties, cheapest first
    Properties(commands::properties::PropertiesArgs),
    /// Add a property to the in-memory listings (not persisted)
    AddProperty(commands::properties::AddPropertyArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    let config = LightbnbConfig::load(cli.config.as_deref()).context("Failed to load config")?;

    match cli.command {
        Commands::Migrate => commands::run_migrate(&config).await?,
        Commands::User(args) => commands::run_user(args, &config).await?,
        Commands::AddUser(args) => commands::run_add_user(args, &config).await?,
        Commands::Reservations(args) => commands::run_reservations(args, &config).await?,
        Commands::Properties(args) => commands::run_properties(args, &config).await?,
        Commands::AddProperty(args) => commands::run_add_property(args, &config).await?,
    }

    Ok(())
}
