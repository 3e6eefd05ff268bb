//! Create Dream Page

use leptos::prelude::*;
use leptos_router::hooks::use_params;

use super::{spawn_load, EventParams, LoadError, Loaded, LoadingNote};
use crate::api::ApiError;
use crate::components::DreamForm;
use crate::context::use_app_context;
use crate::models::Event;
use crate::store::{store_load_event_page, use_app_store, AppStateStoreFields};

#[component]
pub fn CreateDreamPage() -> impl IntoView {
    let params = use_params::<EventParams>();
    let event_slug = Memo::new(move |_| params.get().ok().and_then(|p| p.event).unwrap_or_default());

    let ctx = use_app_context();
    let store = use_app_store();
    let event = RwSignal::new(Loaded::<Event>::Loading);

    Effect::new(move |_| {
        let slug = event_slug.get();
        if slug.is_empty() {
            return;
        }
        // Reuse the event already loaded by the event page
        if let Some(cached) = store.event().get_untracked().filter(|e| e.slug == slug) {
            event.set(Loaded::Ready(cached));
            return;
        }
        let api = ctx.api();
        spawn_load("event", event, async move {
            let page = api.event_page(&slug).await?;
            let loaded = page.event.clone();
            store_load_event_page(&store, page);
            Ok::<_, ApiError>(loaded)
        });
    });

    view! {
        <section class="form-page">
            <h1>"Create dream"</h1>
            {move || match event.get() {
                Loaded::Loading => view! { <LoadingNote /> }.into_any(),
                Loaded::Failed(message) => view! { <LoadError message=message /> }.into_any(),
                Loaded::Ready(event) => view! { <DreamForm dream=None event=event /> }.into_any(),
            }}
        </section>
    }
}
