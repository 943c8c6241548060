//! Reservations

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Property;

/// Reservation row as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub property_id: i32,
    pub guest_id: i32,
}

/// A guest's past reservation together with the reserved property
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReservationWithProperty {
    pub reservation: Reservation,
    pub property: Property,
    pub average_rating: f64,
}
