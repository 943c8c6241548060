//! Property commands - search reviewed properties, add in-memory listings

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use lightbnb_core::{LightbnbConfig, NewProperty, PropertySearch, DEFAULT_LIMIT};
use tracing::warn;

use super::print_json;
use crate::context;

#[derive(Parser, Debug)]
pub struct PropertiesArgs {
    /// Substring the city must contain (case-sensitive)
    #[arg(long)]
    pub city: Option<String>,

    /// Owner user id
    #[arg(long)]
    pub owner_id: Option<i32>,

    /// Minimum cost per night
    #[arg(long)]
    pub min_price: Option<i32>,

    /// Maximum cost per night
    #[arg(long)]
    pub max_price: Option<i32>,

    /// Minimum average review rating
    #[arg(long)]
    pub min_rating: Option<f64>,

    /// Maximum number of properties
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: u32,
}

impl PropertiesArgs {
    fn search(&self) -> PropertySearch {
        PropertySearch {
            city: self.city.clone(),
            owner_id: self.owner_id,
            minimum_price_per_night: self.min_price,
            maximum_price_per_night: self.max_price,
            minimum_rating: self.min_rating,
        }
    }
}

#[derive(Parser, Debug)]
pub struct AddPropertyArgs {
    /// JSON file with the property fields ("-" reads stdin)
    #[arg(long)]
    pub file: PathBuf,
}

pub async fn run_properties(args: PropertiesArgs, config: &LightbnbConfig) -> Result<()> {
    let gateway = context::connect(config).await?;
    let properties = gateway.get_all_properties(&args.search(), args.limit).await?;
    print_json(&properties)
}

pub async fn run_add_property(args: AddPropertyArgs, config: &LightbnbConfig) -> Result<()> {
    let property = read_property(&args.file)?;

    // The listing store is process-local, so nothing here needs the database.
    let gateway = context::offline(config)?;
    let added = gateway.add_property(property).await;
    warn!(id = added.id, "property added to in-memory listings only; not persisted");
    print_json(&added)
}

fn read_property(path: &Path) -> Result<NewProperty> {
    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read property from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };

    serde_json::from_str(&content).context("Invalid property JSON")
}
