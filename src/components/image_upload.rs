//! Image Upload Component
//!
//! Edits the ordered `{small, large}` image list of a dream. Files are stored
//! by the upload service; this editor attaches the resulting URLs. Rows are
//! keyed by [`ImageId`] so a removal never moves another row's error.

use leptos::prelude::*;

use super::remove_confirm_button::RemoveConfirmButton;
use crate::form::{image_field, FormErrors, ImageDraft, ImageId};
use crate::models::Image;

/// Image built from the two URL inputs; an empty large URL reuses the small one
pub fn image_from_inputs(small: &str, large: &str) -> Option<Image> {
    let small = small.trim();
    let large = large.trim();
    if small.is_empty() {
        return None;
    }
    let large = if large.is_empty() { small } else { large };
    Some(Image::new(small, large))
}

#[component]
pub fn ImageUpload(
    #[prop(into)] images: Signal<Vec<ImageDraft>>,
    errors: RwSignal<FormErrors>,
    #[prop(into)] on_add: Callback<Image>,
    #[prop(into)] on_remove: Callback<ImageId>,
) -> impl IntoView {
    let (small_url, set_small_url) = signal(String::new());
    let (large_url, set_large_url) = signal(String::new());

    let add = move |_| {
        if let Some(image) = image_from_inputs(&small_url.get_untracked(), &large_url.get_untracked()) {
            on_add.run(image);
            set_small_url.set(String::new());
            set_large_url.set(String::new());
        }
    };

    view! {
        <div class="image-upload">
            <ul class="image-upload-list">
                <For
                    each=move || images.get()
                    key=|draft| draft.id
                    children=move |draft| {
                        view! { <ImageRow draft=draft errors=errors on_remove=on_remove /> }
                    }
                />
            </ul>
            <div class="image-upload-add">
                <input
                    type="url"
                    placeholder="Image URL"
                    prop:value=move || small_url.get()
                    on:input=move |ev| set_small_url.set(event_target_value(&ev))
                />
                <input
                    type="url"
                    placeholder="Large image URL (optional)"
                    prop:value=move || large_url.get()
                    on:input=move |ev| set_large_url.set(event_target_value(&ev))
                />
                <button type="button" class="btn-secondary" on:click=add>
                    "Add image"
                </button>
            </div>
        </div>
    }
}

#[component]
fn ImageRow(draft: ImageDraft, errors: RwSignal<FormErrors>, on_remove: Callback<ImageId>) -> impl IntoView {
    let id = draft.id;
    let field_error = move || {
        errors.with(|e| {
            e.get(&image_field(id, "small"))
                .or_else(|| e.get(&image_field(id, "large")))
                .map(|message| view! { <p class="field-error">{message.to_string()}</p> })
        })
    };

    view! {
        <li class="image-upload-item">
            <img src=draft.image.small alt="" />
            <RemoveConfirmButton label="Remove image" on_confirm=move |_| on_remove.run(id) />
            {field_error}
        </li>
    }
}
