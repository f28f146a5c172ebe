// src/loader.rs

//! Fetch records through the API client and hand them to the state store.

use futures::try_join;

use crate::api::{ApiClient, Transport};
use crate::error::Result;
use crate::models::{Event, Store};
use crate::state::AppStore;

/// Featured events and stores, fetched together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeaturedCatalog {
    pub events: Vec<Event>,
    pub stores: Vec<Store>,
}

/// Fetch all events and stores concurrently and replace both slices.
///
/// The store is written only if both requests succeed; on failure it is left
/// as it was and the first error is returned.
pub async fn load_catalog<T: Transport>(client: &ApiClient<T>, store: &mut AppStore) -> Result<()> {
    let events_api = client.events();
    let stores_api = client.stores();
    let (events, stores) = try_join!(events_api.get_all(), stores_api.get_all())?;

    log::info!(
        "Loaded {} events and {} stores from {}",
        events.len(),
        stores.len(),
        client.base_url()
    );

    store.set_events(events);
    store.set_stores(stores);
    Ok(())
}

/// Fetch the featured events and stores concurrently.
pub async fn load_featured<T: Transport>(client: &ApiClient<T>) -> Result<FeaturedCatalog> {
    let events_api = client.events();
    let stores_api = client.stores();
    let (events, stores) = try_join!(events_api.get_featured(), stores_api.get_featured())?;
    Ok(FeaturedCatalog { events, stores })
}
