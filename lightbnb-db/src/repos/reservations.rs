//! Reservation repository
//!
//! Past reservations for a guest, each joined with its property and the
//! property's average review rating.

use lightbnb_core::{Reservation, ReservationWithProperty};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use super::{property_from_row, PROPERTY_COLUMNS};
use crate::error::GatewayResult;

/// Reservation repository
pub struct ReservationRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ReservationRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List a guest's completed reservations, oldest start date first.
    ///
    /// Only properties with at least one review appear, since the rating
    /// average comes from an inner join.
    pub async fn past_for_guest(
        &self,
        guest_id: i32,
        limit: u32,
    ) -> GatewayResult<Vec<ReservationWithProperty>> {
        let sql = past_for_guest_sql();
        let rows = sqlx::query(&sql)
            .bind(guest_id)
            .bind(i64::from(limit))
            .fetch_all(self.pool)
            .await?;

        let items = rows
            .iter()
            .map(reservation_from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(items)
    }
}

fn past_for_guest_sql() -> String {
    format!(
        r#"
        SELECT
            {PROPERTY_COLUMNS},
            reservations.id AS reservation_id,
            reservations.start_date,
            reservations.end_date,
            reservations.guest_id,
            avg(property_reviews.rating)::float8 AS average_rating
        FROM properties
        JOIN reservations ON reservations.property_id = properties.id
        JOIN property_reviews ON property_reviews.property_id = properties.id
        JOIN users ON users.id = reservations.guest_id
        WHERE users.id = $1 AND reservations.end_date < now()
        GROUP BY properties.id, reservations.id
        ORDER BY reservations.start_date
        LIMIT $2
        "#
    )
}

fn reservation_from_row(row: &PgRow) -> Result<ReservationWithProperty, sqlx::Error> {
    let property = property_from_row(row)?;
    Ok(ReservationWithProperty {
        reservation: Reservation {
            id: row.try_get("reservation_id")?,
            start_date: row.try_get("start_date")?,
            end_date: row.try_get("end_date")?,
            property_id: property.id,
            guest_id: row.try_get("guest_id")?,
        },
        property,
        average_rating: row.try_get("average_rating")?,
    })
}
