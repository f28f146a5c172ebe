//! State container with setter actions and change subscriptions.

use std::fmt;

use super::{AppState, Slice};
use crate::models::{Event, StateConfig, Store};

/// Handle returned by [`AppStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&AppState, Slice) + Send>;

/// Owns the application state for one application instance.
///
/// Every setter takes `&mut self` and replaces a whole slice, so each write
/// is a single transition. Listeners run synchronously after the write,
/// in subscription order.
pub struct AppStore {
    state: AppState,
    initial: AppState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl AppStore {
    /// Create a store with the default city ("Dallas").
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    /// Create a store with a different initial city.
    pub fn with_city(city: impl Into<String>) -> Self {
        Self::with_state(AppState::with_city(city))
    }

    pub fn from_config(config: &StateConfig) -> Self {
        Self::with_state(AppState::from_config(config))
    }

    fn with_state(state: AppState) -> Self {
        Self {
            initial: state.clone(),
            state,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    // --- Reads ---

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn events(&self) -> &[Event] {
        &self.state.events
    }

    pub fn stores(&self) -> &[Store] {
        &self.state.stores
    }

    pub fn selected_city(&self) -> &str {
        &self.state.selected_city
    }

    // --- Actions ---

    /// Replace the events slice.
    pub fn set_events(&mut self, events: Vec<Event>) {
        self.state.events = events;
        self.notify(Slice::Events);
    }

    /// Replace the stores slice.
    pub fn set_stores(&mut self, stores: Vec<Store>) {
        self.state.stores = stores;
        self.notify(Slice::Stores);
    }

    /// Replace the selected city.
    pub fn set_selected_city(&mut self, city: impl Into<String>) {
        self.state.selected_city = city.into();
        self.notify(Slice::SelectedCity);
    }

    /// Restore the state the store was created with. Listeners are kept.
    pub fn reset(&mut self) {
        self.state = self.initial.clone();
        for slice in [Slice::Events, Slice::Stores, Slice::SelectedCity] {
            self.notify(slice);
        }
    }

    // --- Subscriptions ---

    /// Register a listener called after every slice replacement.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&AppState, Slice) + Send + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, slice: Slice) {
        log::debug!("State slice {:?} replaced", slice);
        let state = &self.state;
        for (_, listener) in self.listeners.iter_mut() {
            listener(state, slice);
        }
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AppStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppStore")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::models::EventCategory;

    fn sample_event(id: &str) -> Event {
        Event {
            id: id.to_string(),
            title: format!("Sale {id}"),
            description: "Everything must go".to_string(),
            location: "Dallas".to_string(),
            date: Utc.with_ymd_and_hms(2025, 6, 7, 13, 0, 0).unwrap(),
            image_url: None,
            price: Some("Free".to_string()),
            category: EventCategory::GarageSale,
            featured: None,
        }
    }

    #[test]
    fn test_default_city() {
        let store = AppStore::new();
        assert_eq!(store.selected_city(), "Dallas");
        assert!(store.events().is_empty());
        assert!(store.stores().is_empty());
    }

    #[test]
    fn test_set_city_leaves_other_slices() {
        let mut store = AppStore::new();
        store.set_events(vec![sample_event("1")]);
        let before = store.state().clone();

        store.set_selected_city("Austin");

        assert_eq!(store.selected_city(), "Austin");
        assert_eq!(store.events(), before.events.as_slice());
        assert_eq!(store.stores(), before.stores.as_slice());
    }

    #[test]
    fn test_set_events_replaces_whole_slice() {
        let mut store = AppStore::new();
        store.set_events(vec![sample_event("1"), sample_event("2")]);
        store.set_events(vec![sample_event("3")]);

        let ids: Vec<_> = store.events().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["3"]);
    }

    #[test]
    fn test_events_not_filtered_by_city() {
        let mut store = AppStore::new();
        store.set_events(vec![sample_event("1")]);
        store.set_selected_city("Houston");
        assert_eq!(store.events().len(), 1);
    }

    #[test]
    fn test_subscribers_see_new_state() {
        let mut store = AppStore::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        store.subscribe(move |state, slice| {
            sink.lock().unwrap().push((slice, state.selected_city.clone()));
        });

        store.set_selected_city("Fort Worth");
        store.set_stores(Vec::new());

        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![
                (Slice::SelectedCity, "Fort Worth".to_string()),
                (Slice::Stores, "Fort Worth".to_string()),
            ]
        );
    }

    #[test]
    fn test_unsubscribe() {
        let mut store = AppStore::new();
        let calls = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&calls);
        let id = store.subscribe(move |_, _| *counter.lock().unwrap() += 1);

        store.set_selected_city("Plano");
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set_selected_city("Irving");

        assert_eq!(*calls.lock().unwrap(), 1);
    }

    #[test]
    fn test_reset_restores_initial_city() {
        let mut store = AppStore::with_city("Austin");
        store.set_selected_city("Waco");
        store.set_events(vec![sample_event("1")]);

        store.reset();
        assert_eq!(store.selected_city(), "Austin");
        assert!(store.events().is_empty());
    }
}
