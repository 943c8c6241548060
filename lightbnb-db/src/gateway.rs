//! Query gateway shared by callers
//!
//! Built once at start-up from a pool and a listing store, then cloned into
//! whatever needs it. Every failure is logged here and returned; lookups
//! report absence as `Ok(None)`.

use std::sync::Arc;

use lightbnb_core::{
    Email, NewProperty, NewUser, Property, PropertySearch, PropertyWithRating,
    ReservationWithProperty, User,
};
use sqlx::PgPool;

use crate::error::{GatewayError, GatewayResult};
use crate::listings::ListingStore;
use crate::repos::{PropertyRepo, ReservationRepo, UserRepo};

/// Data-access facade over the store and the in-memory listings
#[derive(Clone)]
pub struct Gateway {
    inner: Arc<GatewayInner>,
}

struct GatewayInner {
    pool: PgPool,
    listings: ListingStore,
}

impl Gateway {
    pub fn new(pool: PgPool, listings: ListingStore) -> Self {
        Self {
            inner: Arc::new(GatewayInner { pool, listings }),
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    pub fn listings(&self) -> &ListingStore {
        &self.inner.listings
    }

    /// Look up a user by email; the email is already lowercased by `Email`.
    pub async fn get_user_with_email(&self, email: &Email) -> GatewayResult<Option<User>> {
        UserRepo::new(self.pool())
            .find_by_email(email)
            .await
            .inspect_err(|e| log_failure("get_user_with_email", e))
    }

    pub async fn get_user_with_id(&self, id: i32) -> GatewayResult<Option<User>> {
        UserRepo::new(self.pool())
            .find_by_id(id)
            .await
            .inspect_err(|e| log_failure("get_user_with_id", e))
    }

    /// Insert a user and return the row the store reports.
    pub async fn add_user(&self, user: &NewUser) -> GatewayResult<User> {
        let created = UserRepo::new(self.pool())
            .create(user)
            .await
            .inspect_err(|e| log_failure("add_user", e))?;
        tracing::info!(id = created.id, "user added");
        Ok(created)
    }

    /// Completed reservations for a guest, oldest first, at most `limit`.
    pub async fn get_all_reservations(
        &self,
        guest_id: i32,
        limit: u32,
    ) -> GatewayResult<Vec<ReservationWithProperty>> {
        ReservationRepo::new(self.pool())
            .past_for_guest(guest_id, limit)
            .await
            .inspect_err(|e| log_failure("get_all_reservations", e))
    }

    /// Reviewed properties matching `search`, cheapest first, at most `limit`.
    pub async fn get_all_properties(
        &self,
        search: &PropertySearch,
        limit: u32,
    ) -> GatewayResult<Vec<PropertyWithRating>> {
        PropertyRepo::new(self.pool())
            .search(search, limit)
            .await
            .inspect_err(|e| log_failure("get_all_properties", e))
    }

    /// Add a property to the in-memory listings. Never touches the store.
    pub async fn add_property(&self, property: NewProperty) -> Property {
        self.listings().add(property).await
    }
}

fn log_failure(operation: &'static str, err: &GatewayError) {
    tracing::error!(operation, error = %err, "query error");
}
