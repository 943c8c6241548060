//! lightbnb-db: PostgreSQL query gateway for LightBnB
//!
//! Users, past reservations and property search are read from the store;
//! new properties go to an in-memory listing map.

pub mod error;
pub mod gateway;
pub mod listings;
pub mod migrations;
pub mod pool;
pub mod repos;
pub mod search;

pub use error::{GatewayError, GatewayResult};
pub use gateway::Gateway;
pub use listings::ListingStore;
pub use pool::{connect_options, create_lazy_pool, create_pool};
pub use repos::{PropertyRepo, ReservationRepo, UserRepo};
