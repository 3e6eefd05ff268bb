//! Remove Confirm Button Component
//!
//! Inline two-step remove control used by the form's list editors.

use leptos::prelude::*;

/// Inline remove confirmation button
///
/// Shows a × button initially. When clicked, shows "Remove?" with ✓/✗ buttons.
///
/// # Arguments
/// * `label` - Accessible name of the initial button (e.g. "Remove image")
/// * `on_confirm` - Callback to execute when user confirms removal
#[component]
pub fn RemoveConfirmButton(
    #[prop(into)] label: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show when=move || !confirming.get()>
            <button
                type="button"
                class="remove-btn"
                aria-label=label.clone()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirming.set(true);
                }
            >
                "×"
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="remove-confirm">
                <span class="remove-confirm-text">"Remove?"</span>
                <button
                    type="button"
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    type="button"
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
