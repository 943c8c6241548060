//! Property search options

use serde::Deserialize;

/// Default number of rows returned by list operations
pub const DEFAULT_LIMIT: u32 = 10;

/// Optional filters for property search.
///
/// Absent fields add no predicate. Prices are compared against
/// `cost_per_night` in the unit the store uses.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PropertySearch {
    /// Substring match on city
    pub city: Option<String>,
    pub owner_id: Option<i32>,
    pub minimum_price_per_night: Option<i32>,
    pub maximum_price_per_night: Option<i32>,
    /// Lower bound on the average review rating
    pub minimum_rating: Option<f64>,
}

impl PropertySearch {
    /// Filter by city substring.
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn owner(mut self, owner_id: i32) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    /// Restrict `cost_per_night` to the given bounds.
    pub fn price_between(mut self, minimum: Option<i32>, maximum: Option<i32>) -> Self {
        self.minimum_price_per_night = minimum;
        self.maximum_price_per_night = maximum;
        self
    }

    pub fn minimum_rating(mut self, rating: f64) -> Self {
        self.minimum_rating = Some(rating);
        self
    }

    /// True when no filter is set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
