// src/state/mod.rs

//! Application state shared by the UI.
//!
//! [`AppState`] holds three independent slices: the loaded events, the
//! loaded stores and the selected city. [`AppStore`] owns one `AppState`
//! per application instance and replaces slices through its setters.
//!
//! No slice is derived from another: `events` is never filtered by
//! `selected_city`; that composition is left to consumers.

mod store;

pub use store::{AppStore, SubscriptionId};

use crate::models::{Event, Store, StateConfig};

/// One independently replaceable field of [`AppState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slice {
    Events,
    Stores,
    SelectedCity,
}

/// Snapshot of the application state.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub events: Vec<Event>,
    pub stores: Vec<Store>,
    pub selected_city: String,
}

impl AppState {
    /// Empty collections with the given city selected.
    pub fn with_city(city: impl Into<String>) -> Self {
        Self {
            events: Vec::new(),
            stores: Vec::new(),
            selected_city: city.into(),
        }
    }

    pub fn from_config(config: &StateConfig) -> Self {
        Self::with_city(config.default_city.clone())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&StateConfig::default())
    }
}
