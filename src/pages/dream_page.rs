//! Dream Detail Page
//!
//! Full view of one dream: images, funding, budget, description and the
//! comment thread under the `#comments` anchor.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_params};

use super::{spawn_load, DreamParams, LoadError, Loaded, LoadingNote};
use crate::api::DreamPage as DreamPageData;
use crate::components::{CoinIcon, ProgressBar};
use crate::context::use_app_context;
use crate::markdown::render_markdown;
use crate::models::{BudgetItem, Comment, CurrentUser, Dream};
use crate::paths::{edit_dream_path, event_path, COMMENTS_ANCHOR};
use crate::store::{store_set_current_user, use_app_store};

/// Cocreators and event admins may edit
pub fn can_edit(dream: &Dream, user: Option<&CurrentUser>) -> bool {
    user.is_some_and(|user| {
        dream.is_cocreator(&user.id) || user.membership.as_ref().is_some_and(|m| m.is_admin)
    })
}

/// Sum of the budget rows as `(min, max)`; a row without max counts its min
pub fn budget_totals(items: &[BudgetItem]) -> (i64, i64) {
    items.iter().fold((0, 0), |(min, max), item| {
        (min + item.min, max + item.max.unwrap_or(item.min))
    })
}

fn scroll_to_anchor(anchor: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(anchor));
    if let Some(element) = element {
        element.scroll_into_view();
    }
}

#[component]
pub fn DreamPage() -> impl IntoView {
    let params = use_params::<DreamParams>();
    let slugs = Memo::new(move |_| {
        let p = params.get().unwrap_or_default();
        (p.event.unwrap_or_default(), p.dream.unwrap_or_default())
    });

    let ctx = use_app_context();
    let store = use_app_store();
    let page = RwSignal::new(Loaded::<DreamPageData>::Loading);

    Effect::new(move |_| {
        let (event_slug, dream_slug) = slugs.get();
        if event_slug.is_empty() || dream_slug.is_empty() {
            return;
        }
        let api = ctx.api();
        spawn_load("dream", page, async move { api.dream_page(&event_slug, &dream_slug).await });
    });

    Effect::new(move |_| {
        if let Loaded::Ready(data) = page.get() {
            store_set_current_user(&store, data.current_user);
        }
    });

    // Content renders after the browser's own anchor jump
    let location = use_location();
    Effect::new(move |_| {
        let ready = page.with(|p| matches!(p, Loaded::Ready(_)));
        if ready && location.hash.get().trim_start_matches('#') == COMMENTS_ANCHOR {
            scroll_to_anchor(COMMENTS_ANCHOR);
        }
    });

    view! {
        <section class="dream-page">
            {move || match page.get() {
                Loaded::Loading => view! { <LoadingNote /> }.into_any(),
                Loaded::Failed(message) => view! { <LoadError message=message /> }.into_any(),
                Loaded::Ready(data) => view! { <DreamDetail data=data /> }.into_any(),
            }}
        </section>
    }
}

#[component]
fn DreamDetail(data: DreamPageData) -> impl IntoView {
    let DreamPageData { event, dream, current_user } = data;
    let editable = can_edit(&dream, current_user.as_ref());
    let (budget_min, budget_max) = budget_totals(&dream.budget_items);

    let images = dream
        .images
        .iter()
        .map(|image| view! { <img class="dream-image" src=image.large.clone() alt=dream.title.clone() /> })
        .collect_view();

    let grants = dream.goal_grants().map(|goal| {
        view! {
            <div class="dream-grants">
                <ProgressBar
                    current=dream.current_number_of_grants
                    min=dream.min_goal_grants
                    max=dream.max_goal_grants
                />
                <span>{format!("{}/{} grants", dream.current_number_of_grants, goal)}</span>
            </div>
        }
    });

    let goals = (dream.min_goal.is_some() || dream.max_goal.is_some()).then(|| {
        let text = match (dream.min_goal, dream.max_goal) {
            (Some(min), Some(max)) => format!("Funding goal {} – {}", min, max),
            (Some(min), None) => format!("Funding goal {}", min),
            (None, Some(max)) => format!("Funding goal up to {}", max),
            (None, None) => String::new(),
        };
        view! {
            <p class="dream-goals">
                <CoinIcon class="icon" />
                {text}
            </p>
        }
    });

    let budget = (!dream.budget_items.is_empty()).then(|| {
        let rows = dream
            .budget_items
            .iter()
            .map(|item| {
                view! {
                    <tr>
                        <td>{item.description.clone()}</td>
                        <td class="num">{item.min}</td>
                        <td class="num">{item.max.map(|m| m.to_string()).unwrap_or_default()}</td>
                    </tr>
                }
            })
            .collect_view();
        view! {
            <table class="budget-table">
                <thead>
                    <tr><th>"Item"</th><th>"Min"</th><th>"Max"</th></tr>
                </thead>
                <tbody>{rows}</tbody>
                <tfoot>
                    <tr><td>"Total"</td><td class="num">{budget_min}</td><td class="num">{budget_max}</td></tr>
                </tfoot>
            </table>
        }
    });

    let cocreators = dream
        .cocreators
        .iter()
        .map(|c| view! { <li>{c.user.name.clone().unwrap_or_else(|| c.user.id.clone())}</li> })
        .collect_view();

    let edit_link = editable.then(|| {
        view! {
            <A href=edit_dream_path(&event.slug, &dream.slug)>
                <span class="btn-secondary">"Edit"</span>
            </A>
        }
    });

    view! {
        <nav class="breadcrumb">
            <A href=event_path(&event.slug)>{event.title.clone()}</A>
        </nav>
        <header class="dream-header">
            <h1>{dream.title.clone()}</h1>
            {(!dream.published).then(|| view! { <span class="dream-unpublished">"Unpublished"</span> })}
            {edit_link}
        </header>
        <div class="dream-images">{images}</div>
        <p class="dream-summary">{dream.summary.clone().unwrap_or_default()}</p>
        {grants}
        {goals}
        <div class="markdown" inner_html=render_markdown(dream.description.as_deref().unwrap_or_default())></div>
        {budget}
        <section class="dream-cocreators">
            <h2>"Co-creators"</h2>
            <ul>{cocreators}</ul>
        </section>
        <CommentList comments=dream.comments.clone() count=dream.number_of_comments />
    }
}

#[component]
fn CommentList(comments: Vec<Comment>, count: i64) -> impl IntoView {
    let items = comments
        .into_iter()
        .map(|comment| {
            let author = comment.author.name.clone().unwrap_or_else(|| "Anonymous".to_string());
            view! {
                <li class="comment">
                    <div class="comment-meta">
                        {comment.author.avatar.clone().map(|src| view! { <img class="avatar" src=src alt="" /> })}
                        <strong>{author}</strong>
                        <span class="comment-date">{comment.created_at.clone().unwrap_or_default()}</span>
                    </div>
                    <div class="markdown" inner_html=render_markdown(&comment.content)></div>
                </li>
            }
        })
        .collect_view();

    view! {
        <section id=COMMENTS_ANCHOR class="dream-comments">
            <h2>{format!("Comments ({})", count)}</h2>
            <ul>{items}</ul>
        </section>
    }
}
