//! lightbnb-core: domain types shared by the LightBnB gateway crates
//!
//! Models, email normalization, property search options, configuration
//! and JSON fixture loading. Nothing here touches the database.

pub mod config;
pub mod error;
pub mod fixtures;
pub mod models;

pub use config::LightbnbConfig;
pub use error::{CoreError, Result};
pub use fixtures::Fixtures;
pub use models::{
    Email, NewProperty, NewUser, Property, PropertySearch, PropertyWithRating, Reservation,
    ReservationWithProperty, User, DEFAULT_LIMIT,
};
