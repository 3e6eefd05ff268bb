//! Routed Pages
//!
//! Each page reads its slugs from the route, runs one query and renders the
//! result, a loading note, or the error message inline.

mod create_dream_page;
mod dream_page;
mod edit_dream_page;
mod event_page;

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::params::Params;

use crate::api::ApiResult;

pub use create_dream_page::CreateDreamPage;
pub use dream_page::DreamPage;
pub use edit_dream_page::EditDreamPage;
pub use event_page::EventPage;

/// Route params for event-level pages
#[derive(Params, PartialEq, Clone, Default)]
pub struct EventParams {
    pub event: Option<String>,
}

/// Route params for dream-level pages
#[derive(Params, PartialEq, Clone, Default)]
pub struct DreamParams {
    pub event: Option<String>,
    pub dream: Option<String>,
}

/// Query state of a page
#[derive(Debug, Clone, PartialEq)]
pub enum Loaded<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Loaded<T> {
    pub fn from_result(result: ApiResult<T>) -> Self {
        match result {
            Ok(value) => Loaded::Ready(value),
            Err(err) => Loaded::Failed(err.to_string()),
        }
    }
}

/// Run a page query and publish its outcome into `state`
pub fn spawn_load<T, Fut>(query: &'static str, state: RwSignal<Loaded<T>>, load: Fut)
where
    T: Send + Sync + 'static,
    Fut: Future<Output = ApiResult<T>> + 'static,
{
    state.set(Loaded::Loading);
    spawn_local(async move {
        tracing::debug!(query, "loading page data");
        let result = load.await;
        if let Err(err) = &result {
            tracing::warn!(query, error = %err, "page query failed");
        }
        let _ = state.try_set(Loaded::from_result(result));
    });
}

#[component]
pub fn LoadingNote() -> impl IntoView {
    view! { <p class="page-loading">"Loading..."</p> }
}

#[component]
pub fn LoadError(message: String) -> impl IntoView {
    view! { <p class="page-error" role="alert">{message}</p> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;

    #[test]
    fn test_loaded_from_result_keeps_raw_message() {
        assert_eq!(Loaded::from_result(Ok(3)), Loaded::Ready(3));
        assert_eq!(
            Loaded::<i32>::from_result(Err(ApiError::NotFound("dream sauna".into()))),
            Loaded::Failed(ApiError::NotFound("dream sauna".into()).to_string())
        );
    }
}
