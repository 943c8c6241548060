//! Repository implementations for database access
//!
//! Each repository borrows the pool and issues exactly one statement per
//! call. Rows are decoded with `try_get`, so a schema mismatch surfaces as
//! a query error instead of a panic.

pub mod properties;
pub mod reservations;
pub mod users;

pub use properties::PropertyRepo;
pub use reservations::ReservationRepo;
pub use users::UserRepo;

use lightbnb_core::Property;
use sqlx::postgres::PgRow;
use sqlx::Row;

/// Qualified property columns, shared by every query that returns properties.
pub(crate) const PROPERTY_COLUMNS: &str = "properties.id, properties.owner_id, properties.title, \
     properties.description, properties.thumbnail_photo_url, properties.cover_photo_url, \
     properties.cost_per_night, properties.parking_spaces, properties.number_of_bathrooms, \
     properties.number_of_bedrooms, properties.country, properties.street, properties.city, \
     properties.province, properties.post_code, properties.active";

pub(crate) fn property_from_row(row: &PgRow) -> Result<Property, sqlx::Error> {
    Ok(Property {
        id: row.try_get("id")?,
        owner_id: row.try_get("owner_id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        thumbnail_photo_url: row.try_get("thumbnail_photo_url")?,
        cover_photo_url: row.try_get("cover_photo_url")?,
        cost_per_night: row.try_get("cost_per_night")?,
        parking_spaces: row.try_get("parking_spaces")?,
        number_of_bathrooms: row.try_get("number_of_bathrooms")?,
        number_of_bedrooms: row.try_get("number_of_bedrooms")?,
        country: row.try_get("country")?,
        street: row.try_get("street")?,
        city: row.try_get("city")?,
        province: row.try_get("province")?,
        post_code: row.try_get("post_code")?,
        active: row.try_get("active")?,
    })
}
