//! Dream Card Component
//!
//! Summary tile shown in the event grid. The whole card links to the dream;
//! the favorite and comment controls inside it swallow that navigation.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use web_sys::MouseEvent;

use super::icons::{CommentIcon, HeartOutlineIcon, HeartSolidIcon};
use super::progress_bar::ProgressBar;
use crate::color::string_to_hsl_color;
use crate::context::use_app_context;
use crate::favorite::toggle_favorite;
use crate::host::{Navigator, RouterNavigator};
use crate::models::{CurrentUser, Dream, Event};
use crate::paths::{dream_comments_path, dream_path};
use crate::single_flight::SingleFlight;
use crate::store::use_app_store;

/// What fills the top of the card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardCover {
    /// Small URL of the first image
    Image(String),
    /// Background colour derived from the title
    Swatch(String),
}

impl CardCover {
    pub fn for_dream(dream: &Dream) -> Self {
        match dream.images.first() {
            Some(image) => CardCover::Image(image.small.clone()),
            None => CardCover::Swatch(string_to_hsl_color(&dream.title)),
        }
    }
}

/// `current/goal`, or `None` when the dream has no grant goal
pub fn grants_label(dream: &Dream) -> Option<String> {
    dream
        .goal_grants()
        .map(|goal| format!("{}/{}", dream.current_number_of_grants, goal))
}

fn can_favorite(current_user: Option<&CurrentUser>) -> bool {
    current_user.is_some_and(CurrentUser::is_member)
}

#[component]
pub fn DreamCard(dream: Dream, event: Event, current_user: Option<CurrentUser>) -> impl IntoView {
    let cover = match CardCover::for_dream(&dream) {
        CardCover::Image(url) => view! {
            <img class="dream-card-cover" src=url alt=dream.title.clone() />
        }
        .into_any(),
        CardCover::Swatch(color) => view! {
            <div class="dream-card-cover" style=format!("background-color: {}", color)></div>
        }
        .into_any(),
    };

    let progress = grants_label(&dream).map(|label| {
        view! {
            <div class="dream-card-progress">
                <ProgressBar
                    current=dream.current_number_of_grants
                    min=dream.min_goal_grants
                    max=dream.max_goal_grants
                />
                <span class="dream-card-grants">{label}</span>
            </div>
        }
    });

    let favorite = can_favorite(current_user.as_ref())
        .then(|| view! { <FavoriteButton dream_id=dream.id.clone() favorite=dream.favorite /> });

    let href = dream_path(&event.slug, &dream.slug);
    let comments_path = dream_comments_path(&event.slug, &dream.slug);
    let navigate = use_navigate();
    let open_comments = move |ev: MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        RouterNavigator::new(navigate.clone()).push(&comments_path);
    };

    view! {
        <div class="dream-card">
            <A href=href>
                {cover}
                <div class="dream-card-body">
                    <h3 class="dream-card-title">{dream.title.clone()}</h3>
                    {(!dream.published).then(|| view! {
                        <span class="dream-card-unpublished">"Unpublished"</span>
                    })}
                    <p class="dream-card-summary">{dream.summary.clone().unwrap_or_default()}</p>
                </div>
                <div class="dream-card-footer">
                    {progress}
                    <div class="dream-card-actions">
                        <span class="dream-card-comments" role="link" on:click=open_comments>
                            <CommentIcon class="icon" />
                            <span>{dream.number_of_comments}</span>
                        </span>
                        {favorite}
                    </div>
                </div>
            </A>
        </div>
    }
}

/// Heart toggle; shows whatever flag the server last returned
#[component]
fn FavoriteButton(dream_id: String, favorite: bool) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let flight = SingleFlight::new();
    let favorite = RwSignal::new(favorite);

    let toggle = move |ev: MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        let api = ctx.api();
        let dream_id = dream_id.clone();
        spawn_local(async move {
            if let Some(flag) = toggle_favorite(api.as_ref(), &flight, &store, &dream_id).await {
                let _ = favorite.try_set(flag);
            }
        });
    };

    view! {
        <button
            class="dream-card-favorite"
            aria-pressed=move || favorite.get().to_string()
            disabled=move || flight.is_busy()
            on:click=toggle
        >
            <Show
                when=move || favorite.get()
                fallback=|| view! { <HeartOutlineIcon class="icon" /> }
            >
                <HeartSolidIcon class="icon icon-favorite" />
            </Show>
        </button>
    }
}
