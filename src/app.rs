//! Dreams Frontend App
//!
//! Root component: provides services and state, then routes.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::api::GraphqlClient;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::pages::{CreateDreamPage, DreamPage, EditDreamPage, EventPage};
use crate::store::AppState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let api = Arc::new(GraphqlClient::new(config.graphql_endpoint.clone()));

    // Provide context to all children
    provide_context(AppContext::new(api, config));
    provide_context(Store::new(AppState::default()));

    view! {
        <Router>
            <main class="app-layout">
                <Routes fallback=|| view! { <p class="page-error">"404 - Page Not Found"</p> }>
                    <Route path=path!("/:event") view=EventPage />
                    <Route path=path!("/:event/create-dream") view=CreateDreamPage />
                    <Route path=path!("/:event/:dream") view=DreamPage />
                    <Route path=path!("/:event/:dream/edit") view=EditDreamPage />
                </Routes>
            </main>
        </Router>
    }
}
