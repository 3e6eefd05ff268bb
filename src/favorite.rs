//! Favorite Toggle
//!
//! One `toggleFavorite` call per activation while none is in flight; the
//! returned flag is written back to the store.

use crate::api::DreamApi;
use crate::single_flight::SingleFlight;
use crate::store::{store_set_favorite, AppStore};

/// Toggle `dream_id` for the viewer.
///
/// Returns the server's new flag, or `None` when the trigger was rejected
/// as in flight or the mutation failed (failures are logged only).
pub async fn toggle_favorite(
    api: &dyn DreamApi,
    flight: &SingleFlight,
    store: &AppStore,
    dream_id: &str,
) -> Option<bool> {
    match flight.run(|| api.toggle_favorite(dream_id)).await? {
        Ok(state) => {
            tracing::info!(dream = %state.id, favorite = state.favorite, "favorite toggled");
            store_set_favorite(store, &state);
            Some(state.favorite)
        }
        Err(err) => {
            tracing::error!(dream = %dream_id, error = %err, "toggle favorite failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, ApiResult, DreamInput, DreamPage, EventPage};
    use crate::models::{Dream, FavoriteState};
    use crate::store::AppState;
    use async_trait::async_trait;
    use futures::channel::oneshot;
    use futures::{pin_mut, poll};
    use leptos::prelude::*;
    use reactive_stores::Store;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Counts toggles; the first one waits on `gate`
    struct GatedApi {
        calls: AtomicUsize,
        gate: Mutex<Option<oneshot::Receiver<()>>>,
        fail: bool,
    }

    impl GatedApi {
        fn new(gate: Option<oneshot::Receiver<()>>, fail: bool) -> Self {
            Self { calls: AtomicUsize::new(0), gate: Mutex::new(gate), fail }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait(?Send)]
    impl DreamApi for GatedApi {
        async fn toggle_favorite(&self, dream_id: &str) -> ApiResult<FavoriteState> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let gate = self.gate.lock().unwrap().take();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            if self.fail {
                return Err(ApiError::GraphQl("Not a member".into()));
            }
            Ok(FavoriteState { id: dream_id.to_string(), favorite: true })
        }

        async fn create_dream(&self, _event_id: &str, _input: &DreamInput) -> ApiResult<Dream> {
            unreachable!()
        }

        async fn edit_dream(&self, _dream_id: &str, _input: &DreamInput) -> ApiResult<Dream> {
            unreachable!()
        }

        async fn event_page(&self, _event_slug: &str) -> ApiResult<EventPage> {
            unreachable!()
        }

        async fn dream_page(&self, _event_slug: &str, _dream_slug: &str) -> ApiResult<DreamPage> {
            unreachable!()
        }
    }

    fn store_with_dream() -> AppStore {
        let dream: Dream =
            serde_json::from_value(serde_json::json!({ "id": "d1", "title": "Sauna", "slug": "sauna" })).unwrap();
        Store::new(AppState { event: None, dreams: vec![dream], current_user: None })
    }

    #[tokio::test]
    async fn test_double_activation_sends_one_mutation() {
        let (tx, rx) = oneshot::channel();
        let api = GatedApi::new(Some(rx), false);
        let store = store_with_dream();
        let flight = SingleFlight::new();

        let first = toggle_favorite(&api, &flight, &store, "d1");
        pin_mut!(first);
        assert!(poll!(first.as_mut()).is_pending());
        assert!(flight.is_busy());

        assert_eq!(toggle_favorite(&api, &flight, &store, "d1").await, None);
        assert_eq!(api.calls(), 1);

        tx.send(()).unwrap();
        assert_eq!(first.await, Some(true));
        assert_eq!(api.calls(), 1);
        assert!(store.get_untracked().dreams[0].favorite);
        assert!(!flight.is_busy());
    }

    #[tokio::test]
    async fn test_failure_is_logged_and_releases_flight() {
        let api = GatedApi::new(None, true);
        let store = store_with_dream();
        let flight = SingleFlight::new();

        assert_eq!(toggle_favorite(&api, &flight, &store, "d1").await, None);
        assert!(!store.get_untracked().dreams[0].favorite);
        assert!(!flight.is_busy());

        assert_eq!(toggle_favorite(&api, &flight, &store, "d1").await, None);
        assert_eq!(api.calls(), 2);
    }
}
