//! Dream Form Component
//!
//! Create/edit form for a dream. All editing happens on a local
//! [`DreamDraft`]; nothing reaches the server until a valid submit.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use web_sys::SubmitEvent;

use super::budget_items_editor::{BudgetColumn, BudgetItemsEditor};
use super::image_upload::ImageUpload;
use crate::context::use_app_context;
use crate::form::{
    submit_dream, DreamDraft, FormErrors, FormMode, SubmitOutcome, SubmitTarget, SUMMARY_MAX_CHARS,
};
use crate::host::{BrowserAlerter, RouterNavigator};
use crate::markdown::render_markdown;
use crate::models::{Dream, Event};
use crate::single_flight::SingleFlight;
use crate::store::{store_upsert_dream, use_app_store};

fn submit_target(dream: Option<&Dream>, event: &Event, editing: bool) -> SubmitTarget {
    match dream {
        Some(dream) if editing => SubmitTarget::Edit { dream_id: dream.id.clone() },
        _ => SubmitTarget::Create { event_id: event.id.clone() },
    }
}

fn initial_draft(dream: Option<&Dream>, editing: bool) -> DreamDraft {
    let mode = if editing { FormMode::Edit } else { FormMode::Create };
    match dream {
        Some(dream) => DreamDraft::from_dream(dream, mode),
        None => DreamDraft::create(),
    }
}

/// Inline message for one field path
#[component]
fn FieldError(errors: RwSignal<FormErrors>, #[prop(into)] path: String) -> impl IntoView {
    move || {
        errors.with(|e| {
            e.get(&path)
                .map(|message| view! { <p class="field-error">{message.to_string()}</p> })
        })
    }
}

#[component]
pub fn DreamForm(dream: Option<Dream>, event: Event, #[prop(optional)] editing: bool) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let navigate = use_navigate();

    let target = submit_target(dream.as_ref(), &event, editing);
    let draft = RwSignal::new(initial_draft(dream.as_ref(), editing));
    let errors = RwSignal::new(FormErrors::default());
    let flight = SingleFlight::new();
    let (preview, set_preview) = signal(false);
    let event_slug = event.slug.clone();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let api = ctx.api();
        let navigator = RouterNavigator::new(navigate.clone());
        let target = target.clone();
        let event_slug = event_slug.clone();
        let snapshot = draft.get_untracked();
        spawn_local(async move {
            let outcome = flight
                .run(|| submit_dream(api.as_ref(), &navigator, &BrowserAlerter, &target, &event_slug, &snapshot))
                .await;
            match outcome {
                Some(SubmitOutcome::Invalid(found)) => {
                    let _ = errors.try_set(found);
                }
                Some(SubmitOutcome::Saved { dream, .. }) => store_upsert_dream(&store, dream),
                Some(SubmitOutcome::Failed(_)) => {
                    let _ = errors.try_set(FormErrors::default());
                }
                None => tracing::debug!("submit ignored while a save is in flight"),
            }
        });
    };

    let summary_len = move || draft.with(|d| d.summary.chars().count());
    let images = Memo::new(move |_| draft.with(|d| d.images.clone()));
    let budget_items = Memo::new(move |_| draft.with(|d| d.budget_items.clone()));

    view! {
        <form class="dream-form" novalidate=true on:submit=on_submit>
            <div class="form-field">
                <label for="dream-title">"Title"</label>
                <input
                    id="dream-title"
                    type="text"
                    class:input-invalid=move || errors.with(|e| e.contains("title"))
                    prop:value=move || draft.with(|d| d.title.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.set_title(value));
                    }
                />
                <FieldError errors=errors path="title" />
            </div>

            <div class="form-field">
                <label for="dream-slug">"Slug"</label>
                <input
                    id="dream-slug"
                    type="text"
                    class:input-invalid=move || errors.with(|e| e.contains("slug"))
                    prop:value=move || draft.with(|d| d.slug.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.set_slug(value));
                    }
                    on:blur=move |_| draft.update(DreamDraft::blur_slug)
                />
                <FieldError errors=errors path="slug" />
            </div>

            <div class="form-field">
                <label for="dream-summary">"Summary"</label>
                <textarea
                    id="dream-summary"
                    rows="2"
                    maxlength=SUMMARY_MAX_CHARS.to_string()
                    class:input-invalid=move || errors.with(|e| e.contains("summary"))
                    prop:value=move || draft.with(|d| d.summary.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.summary = value);
                    }
                ></textarea>
                <span class="field-hint">{move || format!("{}/{}", summary_len(), SUMMARY_MAX_CHARS)}</span>
                <FieldError errors=errors path="summary" />
            </div>

            <div class="form-field">
                <div class="form-field-header">
                    <label for="dream-description">"Description"</label>
                    <button
                        type="button"
                        class="btn-link"
                        on:click=move |_| set_preview.update(|p| *p = !*p)
                    >
                        {move || if preview.get() { "Edit" } else { "Preview" }}
                    </button>
                </div>
                <Show
                    when=move || preview.get()
                    fallback=move || view! {
                        <textarea
                            id="dream-description"
                            rows="10"
                            prop:value=move || draft.with(|d| d.description.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.description = value);
                            }
                        ></textarea>
                    }
                >
                    <div
                        class="markdown-preview"
                        inner_html=move || draft.with(|d| render_markdown(&d.description))
                    ></div>
                </Show>
            </div>

            <div class="form-field">
                <label>"Images"</label>
                <ImageUpload
                    images=images
                    errors=errors
                    on_add=move |image| {
                        draft.update(|d| {
                            d.add_image(image);
                        });
                    }
                    on_remove=move |id| draft.update(|d| d.remove_image(id))
                />
            </div>

            <div class="form-row">
                <div class="form-field">
                    <label for="dream-min-goal">"Minimum funding goal"</label>
                    <input
                        id="dream-min-goal"
                        type="number"
                        class:input-invalid=move || errors.with(|e| e.contains("min_goal"))
                        prop:value=move || draft.with(|d| d.min_goal.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.min_goal = value);
                        }
                    />
                    <FieldError errors=errors path="min_goal" />
                </div>
                <div class="form-field">
                    <label for="dream-max-goal">"Maximum funding goal"</label>
                    <input
                        id="dream-max-goal"
                        type="number"
                        class:input-invalid=move || errors.with(|e| e.contains("max_goal"))
                        prop:value=move || draft.with(|d| d.max_goal.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.max_goal = value);
                        }
                    />
                    <FieldError errors=errors path="max_goal" />
                </div>
            </div>

            <div class="form-field">
                <label>"Budget"</label>
                <BudgetItemsEditor
                    items=budget_items
                    errors=errors
                    on_add=move |_| {
                        draft.update(|d| {
                            d.add_budget_item();
                        });
                    }
                    on_remove=move |id| draft.update(|d| d.remove_budget_item(id))
                    on_change=move |(id, column, value): (_, BudgetColumn, String)| {
                        draft.update(|d| d.update_budget_item(id, |item| column.apply(item, value)));
                    }
                />
            </div>

            <div class="form-actions">
                <button type="submit" class="btn-primary" disabled=move || flight.is_busy()>
                    {move || match (flight.is_busy(), editing) {
                        (true, _) => "Saving...",
                        (false, true) => "Save",
                        (false, false) => "Create",
                    }}
                </button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dream() -> Dream {
        serde_json::from_value(serde_json::json!({ "id": "d1", "title": "Sauna", "slug": "sauna" })).unwrap()
    }

    fn event() -> Event {
        Event { id: "e1".into(), slug: "borderland".into(), title: "Borderland".into() }
    }

    #[test]
    fn test_target_follows_editing_flag() {
        let d = dream();
        assert_eq!(submit_target(Some(&d), &event(), true), SubmitTarget::Edit { dream_id: "d1".into() });
        assert_eq!(submit_target(None, &event(), true), SubmitTarget::Create { event_id: "e1".into() });
        assert_eq!(submit_target(Some(&d), &event(), false), SubmitTarget::Create { event_id: "e1".into() });
    }

    #[test]
    fn test_initial_draft_mode() {
        assert_eq!(initial_draft(None, false).mode(), FormMode::Create);

        let mut draft = initial_draft(Some(&dream()), true);
        assert_eq!(draft.mode(), FormMode::Edit);
        draft.set_title("Other".into());
        assert_eq!(draft.slug, "sauna");
    }
}
