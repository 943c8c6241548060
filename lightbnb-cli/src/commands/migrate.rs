//! Migrate command - create the gateway tables

use anyhow::{Context, Result};
use lightbnb_core::LightbnbConfig;
use lightbnb_db::migrations;

use crate::context;

pub async fn run_migrate(config: &LightbnbConfig) -> Result<()> {
    let gateway = context::connect(config).await?;
    migrations::run(gateway.pool())
        .await
        .context("Migrations failed")?;
    Ok(())
}
