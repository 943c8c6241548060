//! Command implementations for the lightbnb CLI

pub mod migrate;
pub mod properties;
pub mod reservations;
pub mod users;

pub use migrate::run_migrate;
pub use properties::{run_add_property, run_properties};
pub use reservations::run_reservations;
pub use users::{run_add_user, run_user};

use anyhow::{Context, Result};
use serde::Serialize;

/// Print a result as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}
