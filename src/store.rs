//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Mutation results
//! are written back here so every view of a dream stays current.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::EventPage;
use crate::models::{CurrentUser, Dream, Event, FavoriteState};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Event whose dreams are loaded
    pub event: Option<Event>,
    /// Dreams of the loaded event
    pub dreams: Vec<Dream>,
    /// Logged-in viewer, if any
    pub current_user: Option<CurrentUser>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the loaded event page
pub fn store_load_event_page(store: &AppStore, page: EventPage) {
    *store.event().write() = Some(page.event);
    *store.dreams().write() = page.dreams;
    *store.current_user().write() = page.current_user;
}

/// Record the viewer from any page query
pub fn store_set_current_user(store: &AppStore, user: Option<CurrentUser>) {
    *store.current_user().write() = user;
}

/// Apply a `toggleFavorite` result
pub fn store_set_favorite(store: &AppStore, state: &FavoriteState) {
    if let Some(dream) = store.dreams().write().iter_mut().find(|d| d.id == state.id) {
        dream.favorite = state.favorite;
    }
}

/// Insert a created dream or replace an edited one with the server's copy
pub fn store_upsert_dream(store: &AppStore, dream: Dream) {
    let dreams_field = store.dreams();
    let mut dreams = dreams_field.write();
    match dreams.iter().position(|d| d.id == dream.id) {
        Some(index) => dreams[index] = dream,
        None => dreams.push(dream),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dream(id: &str, favorite: bool) -> Dream {
        let mut dream: Dream = serde_json::from_value(serde_json::json!({
            "id": id,
            "title": format!("Dream {}", id),
            "slug": format!("dream-{}", id),
        }))
        .unwrap();
        dream.favorite = favorite;
        dream
    }

    fn loaded_store() -> AppStore {
        let store = Store::new(AppState::default());
        store_load_event_page(
            &store,
            EventPage {
                event: Event { id: "e1".into(), slug: "borderland".into(), title: "Borderland".into() },
                dreams: vec![dream("1", false), dream("2", true)],
                current_user: None,
            },
        );
        store
    }

    #[test]
    fn test_set_favorite_updates_matching_dream() {
        let store = loaded_store();
        store_set_favorite(&store, &FavoriteState { id: "1".into(), favorite: true });

        let state = store.get_untracked();
        assert!(state.dreams[0].favorite);
        assert!(state.dreams[1].favorite);
    }

    #[test]
    fn test_upsert_replaces_and_appends() {
        let store = loaded_store();

        let mut edited = dream("2", false);
        edited.title = "Renamed".into();
        edited.published = false;
        store_upsert_dream(&store, edited);
        store_upsert_dream(&store, dream("3", false));

        let state = store.get_untracked();
        assert_eq!(state.dreams.len(), 3);
        assert_eq!(state.dreams[1].title, "Renamed");
        assert!(!state.dreams[1].favorite, "flags come from the mutation response");
        assert!(!state.dreams[1].published);
        assert_eq!(state.dreams[2].id, "3");
        assert_eq!(state.event.unwrap().slug, "borderland");
    }
}
