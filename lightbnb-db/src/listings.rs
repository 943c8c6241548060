//! In-memory property listings
//!
//! New properties are added here, not to the relational store. Ids are
//! `current count + 1`, computed and inserted under one write lock.

use std::collections::BTreeMap;

use lightbnb_core::{NewProperty, Property};
use tokio::sync::RwLock;

/// Process-local property map keyed by id
#[derive(Debug, Default)]
pub struct ListingStore {
    listings: RwLock<BTreeMap<i32, Property>>,
}

impl ListingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing map, typically the `properties.json` fixture.
    pub fn seeded(listings: BTreeMap<i32, Property>) -> Self {
        Self {
            listings: RwLock::new(listings),
        }
    }

    /// Insert a property under the next id and return it.
    ///
    /// When the seed has gaps, `count + 1` can hit an existing key; the old
    /// entry is replaced.
    pub async fn add(&self, property: NewProperty) -> Property {
        let mut listings = self.listings.write().await;
        let id = next_id(listings.len());
        let property = property.with_id(id);

        if let Some(replaced) = listings.insert(id, property.clone()) {
            tracing::warn!(id, title = %replaced.title, "listing id already taken, replaced");
        }
        tracing::debug!(id, title = %property.title, "listing added");
        property
    }

    pub async fn get(&self, id: i32) -> Option<Property> {
        self.listings.read().await.get(&id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.listings.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.listings.read().await.is_empty()
    }
}

/// `count + 1`, pinned at `i32::MAX` once the count no longer fits.
fn next_id(count: usize) -> i32 {
    i32::try_from(count).map_or(i32::MAX, |count| count.saturating_add(1))
}
