//! Reservations command - a guest's past reservations

use anyhow::Result;
use clap::Parser;
use lightbnb_core::{LightbnbConfig, DEFAULT_LIMIT};

use super::print_json;
use crate::context;

#[derive(Parser, Debug)]
pub struct ReservationsArgs {
    /// Guest user id
    #[arg(long)]
    pub guest_id: i32,

    /// Maximum number of reservations
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: u32,
}

pub async fn run_reservations(args: ReservationsArgs, config: &LightbnbConfig) -> Result<()> {
    let gateway = context::connect(config).await?;
    let reservations = gateway
        .get_all_reservations(args.guest_id, args.limit)
        .await?;
    print_json(&reservations)
}
