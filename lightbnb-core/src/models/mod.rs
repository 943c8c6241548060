//! Domain models
//!
//! Input that must be normalized (emails) is normalized when the type is
//! built; no other input checks happen in this layer.

pub mod email;
pub mod property;
pub mod reservation;
pub mod search;
pub mod user;

pub use email::Email;
pub use property::{NewProperty, Property, PropertyWithRating};
pub use reservation::{Reservation, ReservationWithProperty};
pub use search::{PropertySearch, DEFAULT_LIMIT};
pub use user::{NewUser, User};
