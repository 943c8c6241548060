//! Schema bootstrap for the gateway tables
//!
//! Every statement is `IF NOT EXISTS`, so running twice is harmless.

use sqlx::PgPool;

use crate::error::{GatewayError, GatewayResult};

const TABLES: [(&str, &str); 4] = [
    (
        "users",
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id SERIAL PRIMARY KEY NOT NULL,
            name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL UNIQUE,
            password VARCHAR(255) NOT NULL
        )
        "#,
    ),
    (
        "properties",
        r#"
        CREATE TABLE IF NOT EXISTS properties (
            id SERIAL PRIMARY KEY NOT NULL,
            owner_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            title VARCHAR(255) NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            thumbnail_photo_url VARCHAR(255) NOT NULL DEFAULT '',
            cover_photo_url VARCHAR(255) NOT NULL DEFAULT '',
            cost_per_night INTEGER NOT NULL DEFAULT 0,
            parking_spaces INTEGER NOT NULL DEFAULT 0,
            number_of_bathrooms INTEGER NOT NULL DEFAULT 0,
            number_of_bedrooms INTEGER NOT NULL DEFAULT 0,
            country VARCHAR(255) NOT NULL DEFAULT '',
            street VARCHAR(255) NOT NULL DEFAULT '',
            city VARCHAR(255) NOT NULL,
            province VARCHAR(255) NOT NULL DEFAULT '',
            post_code VARCHAR(255) NOT NULL DEFAULT '',
            active BOOLEAN NOT NULL DEFAULT TRUE
        )
        "#,
    ),
    (
        "reservations",
        r#"
        CREATE TABLE IF NOT EXISTS reservations (
            id SERIAL PRIMARY KEY NOT NULL,
            start_date DATE NOT NULL,
            end_date DATE NOT NULL,
            property_id INTEGER NOT NULL REFERENCES properties(id) ON DELETE CASCADE,
            guest_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE
        )
        "#,
    ),
    (
        "property_reviews",
        r#"
        CREATE TABLE IF NOT EXISTS property_reviews (
            id SERIAL PRIMARY KEY NOT NULL,
            guest_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            property_id INTEGER NOT NULL REFERENCES properties(id) ON DELETE CASCADE,
            reservation_id INTEGER NOT NULL REFERENCES reservations(id) ON DELETE CASCADE,
            rating SMALLINT NOT NULL DEFAULT 0,
            message TEXT
        )
        "#,
    ),
];

const INDEXES: [&str; 5] = [
    "CREATE INDEX IF NOT EXISTS idx_properties_owner ON properties(owner_id)",
    "CREATE INDEX IF NOT EXISTS idx_properties_city ON properties(city)",
    "CREATE INDEX IF NOT EXISTS idx_reservations_guest ON reservations(guest_id)",
    "CREATE INDEX IF NOT EXISTS idx_reservations_property ON reservations(property_id)",
    "CREATE INDEX IF NOT EXISTS idx_property_reviews_property ON property_reviews(property_id)",
];

/// Create all gateway tables and indexes.
pub async fn run(pool: &PgPool) -> GatewayResult<()> {
    tracing::info!("Running LightBnB migrations...");

    for (table, ddl) in TABLES {
        sqlx::query(ddl)
            .execute(pool)
            .await
            .map_err(GatewayError::Migration)?;
        tracing::debug!(table, "table ready");
    }

    for ddl in INDEXES {
        sqlx::query(ddl)
            .execute(pool)
            .await
            .map_err(GatewayError::Migration)?;
    }

    tracing::info!("LightBnB migrations complete");
    Ok(())
}
