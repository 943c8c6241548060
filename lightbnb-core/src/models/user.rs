//! User records

use serde::{Deserialize, Serialize};

use super::Email;

/// User row as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Opaque password hash; hashing happens upstream of the gateway.
    pub password: String,
}

/// Payload for inserting a user
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: Email,
    pub password: String,
}
