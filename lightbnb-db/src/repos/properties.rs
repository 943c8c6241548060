//! Property repository

use lightbnb_core::{PropertySearch, PropertyWithRating};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use super::property_from_row;
use crate::error::GatewayResult;
use crate::search::search_query;

/// Property repository
pub struct PropertyRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PropertyRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Search reviewed properties, cheapest first.
    pub async fn search(
        &self,
        search: &PropertySearch,
        limit: u32,
    ) -> GatewayResult<Vec<PropertyWithRating>> {
        let mut builder = search_query(search, limit);
        tracing::debug!(sql = builder.sql(), ?search, limit, "property search");

        let rows = builder.build().fetch_all(self.pool).await?;
        let items = rows
            .iter()
            .map(rated_property_from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(items)
    }
}

fn rated_property_from_row(row: &PgRow) -> Result<PropertyWithRating, sqlx::Error> {
    Ok(PropertyWithRating {
        property: property_from_row(row)?,
        average_rating: row.try_get("average_rating")?,
    })
}
