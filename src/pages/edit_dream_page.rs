//! Edit Dream Page

use leptos::prelude::*;
use leptos_router::hooks::use_params;

use super::{spawn_load, DreamParams, LoadError, Loaded, LoadingNote};
use crate::api::DreamPage;
use crate::components::DreamForm;
use crate::context::use_app_context;

#[component]
pub fn EditDreamPage() -> impl IntoView {
    let params = use_params::<DreamParams>();
    let slugs = Memo::new(move |_| {
        let p = params.get().unwrap_or_default();
        (p.event.unwrap_or_default(), p.dream.unwrap_or_default())
    });

    let ctx = use_app_context();
    let page = RwSignal::new(Loaded::<DreamPage>::Loading);

    Effect::new(move |_| {
        let (event_slug, dream_slug) = slugs.get();
        if event_slug.is_empty() || dream_slug.is_empty() {
            return;
        }
        let api = ctx.api();
        spawn_load("dream", page, async move { api.dream_page(&event_slug, &dream_slug).await });
    });

    view! {
        <section class="form-page">
            <h1>"Edit dream"</h1>
            {move || match page.get() {
                Loaded::Loading => view! { <LoadingNote /> }.into_any(),
                Loaded::Failed(message) => view! { <LoadError message=message /> }.into_any(),
                Loaded::Ready(data) => view! {
                    <DreamForm dream=Some(data.dream) event=data.event editing=true />
                }
                .into_any(),
            }}
        </section>
    }
}
