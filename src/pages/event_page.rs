//! Event Page
//!
//! Grid of dream cards for one event.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params;

use super::{spawn_load, EventParams, LoadError, Loaded, LoadingNote};
use crate::api::ApiError;
use crate::components::DreamCard;
use crate::context::use_app_context;
use crate::paths::create_dream_path;
use crate::store::{store_load_event_page, use_app_store, AppStateStoreFields};

#[component]
pub fn EventPage() -> impl IntoView {
    let params = use_params::<EventParams>();
    let event_slug = Memo::new(move |_| params.get().ok().and_then(|p| p.event).unwrap_or_default());

    let ctx = use_app_context();
    let store = use_app_store();
    let status = RwSignal::new(Loaded::<()>::Loading);

    Effect::new(move |_| {
        let slug = event_slug.get();
        if slug.is_empty() {
            return;
        }
        let api = ctx.api();
        spawn_load("event", status, async move {
            let page = api.event_page(&slug).await?;
            store_load_event_page(&store, page);
            Ok::<_, ApiError>(())
        });
    });

    let dream_grid = move || {
        let Some(event) = store.event().get() else {
            return view! { <LoadError message="Event not loaded".to_string() /> }.into_any();
        };
        let user = store.current_user().get();
        let create_link = user.is_some().then(|| {
            view! {
                <A href=create_dream_path(&event.slug)>
                    <span class="btn-primary">"Create dream"</span>
                </A>
            }
        });
        let grid_event = event.clone();

        view! {
            <header class="event-header">
                <h1>{event.title.clone()}</h1>
                {create_link}
            </header>
            <Show
                when=move || !store.dreams().with(Vec::is_empty)
                fallback=|| view! { <p class="empty-state">"No dreams yet."</p> }
            >
                <div class="dream-grid">
                    <For
                        each=move || store.dreams().get()
                        key=|dream| dream.id.clone()
                        children={
                            let event = grid_event.clone();
                            let user = user.clone();
                            move |dream| view! {
                                <DreamCard dream=dream event=event.clone() current_user=user.clone() />
                            }
                        }
                    />
                </div>
            </Show>
        }
        .into_any()
    };

    view! {
        <section class="event-page">
            {move || match status.get() {
                Loaded::Loading => view! { <LoadingNote /> }.into_any(),
                Loaded::Failed(message) => view! { <LoadError message=message /> }.into_any(),
                Loaded::Ready(()) => dream_grid().into_any(),
            }}
        </section>
    }
}
