//! User commands - look up and insert users

use anyhow::{bail, Result};
use clap::{ArgGroup, Parser};
use lightbnb_core::{Email, LightbnbConfig, NewUser};
use tracing::info;

use super::print_json;
use crate::context;

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("key").required(true).args(["email", "id"])))]
pub struct UserArgs {
    /// Email address (matched case-insensitively)
    #[arg(long)]
    pub email: Option<String>,

    /// User id
    #[arg(long)]
    pub id: Option<i32>,
}

#[derive(Parser, Debug)]
pub struct AddUserArgs {
    /// Display name
    #[arg(long)]
    pub name: String,

    /// Email address (stored lowercased)
    #[arg(long)]
    pub email: String,

    /// Password hash, stored as given
    #[arg(long, env = "LIGHTBNB_PASSWORD_HASH")]
    pub password: String,
}

pub async fn run_user(args: UserArgs, config: &LightbnbConfig) -> Result<()> {
    let email = args.email.as_deref().map(Email::new);

    let gateway = context::connect(config).await?;
    let user = match (email, args.id) {
        (Some(email), _) => gateway.get_user_with_email(&email).await?,
        (None, Some(id)) => gateway.get_user_with_id(id).await?,
        (None, None) => bail!("one of --email or --id is required"),
    };

    if user.is_none() {
        info!("user not found");
    }
    print_json(&user)
}

pub async fn run_add_user(args: AddUserArgs, config: &LightbnbConfig) -> Result<()> {
    let user = NewUser {
        name: args.name,
        email: Email::new(&args.email),
        password: args.password,
    };

    let gateway = context::connect(config).await?;
    let created = gateway.add_user(&user).await?;
    print_json(&created)
}
