//! Gateway construction from configuration
//!
//! The pool and the listing store are built once here and handed to the
//! command that needs them.

use anyhow::{Context, Result};
use lightbnb_core::{Fixtures, LightbnbConfig};
use lightbnb_db::{create_lazy_pool, create_pool, Gateway, ListingStore};
use tracing::{info, warn};

/// Connect eagerly; fails fast when the store is unreachable.
pub async fn connect(config: &LightbnbConfig) -> Result<Gateway> {
    let pool = create_pool(&config.database)
        .await
        .context("Failed to connect to the LightBnB database")?;
    Ok(Gateway::new(pool, load_listings(config)?))
}

/// Build a gateway whose pool connects on first query.
pub fn offline(config: &LightbnbConfig) -> Result<Gateway> {
    let pool = create_lazy_pool(&config.database).context("Invalid database settings")?;
    Ok(Gateway::new(pool, load_listings(config)?))
}

/// Seed the listing store from the fixtures directory, if there is one.
fn load_listings(config: &LightbnbConfig) -> Result<ListingStore> {
    let dir = &config.fixtures.dir;
    if !dir.is_dir() {
        warn!(dir = %dir.display(), "fixtures directory not found, starting with no listings");
        return Ok(ListingStore::new());
    }

    let fixtures = Fixtures::load(dir)
        .with_context(|| format!("Failed to load fixtures from {}", dir.display()))?;
    info!(
        properties = fixtures.properties.len(),
        users = fixtures.users.len(),
        "fixtures loaded"
    );
    Ok(ListingStore::seeded(fixtures.properties))
}
