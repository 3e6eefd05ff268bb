//! Budget Items Editor Component
//!
//! Rows are keyed by their stable id, so removing a row never shifts the
//! inputs or errors of the rows after it.

use leptos::prelude::*;

use super::remove_confirm_button::RemoveConfirmButton;
use crate::form::{budget_field, BudgetItemDraft, BudgetItemId, FormErrors};

/// Editable column of a budget row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetColumn {
    Description,
    Min,
    Max,
}

impl BudgetColumn {
    pub fn apply(self, item: &mut BudgetItemDraft, value: String) {
        match self {
            BudgetColumn::Description => item.description = value,
            BudgetColumn::Min => item.min = value,
            BudgetColumn::Max => item.max = value,
        }
    }

    fn field(self) -> &'static str {
        match self {
            BudgetColumn::Description => "description",
            BudgetColumn::Min => "min",
            BudgetColumn::Max => "max",
        }
    }
}

#[component]
pub fn BudgetItemsEditor(
    #[prop(into)] items: Signal<Vec<BudgetItemDraft>>,
    errors: RwSignal<FormErrors>,
    #[prop(into)] on_add: Callback<()>,
    #[prop(into)] on_remove: Callback<BudgetItemId>,
    #[prop(into)] on_change: Callback<(BudgetItemId, BudgetColumn, String)>,
) -> impl IntoView {
    view! {
        <div class="budget-items">
            <div class="budget-items-header">
                <span>"Description"</span>
                <span>"Min"</span>
                <span>"Max"</span>
            </div>
            <For
                each=move || items.get()
                key=|item| item.id
                children=move |item| {
                    view! { <BudgetItemRow item=item errors=errors on_remove=on_remove on_change=on_change /> }
                }
            />
            <button type="button" class="btn-secondary" on:click=move |_| on_add.run(())>
                "Add budget item"
            </button>
        </div>
    }
}

#[component]
fn BudgetItemRow(
    item: BudgetItemDraft,
    errors: RwSignal<FormErrors>,
    on_remove: Callback<BudgetItemId>,
    on_change: Callback<(BudgetItemId, BudgetColumn, String)>,
) -> impl IntoView {
    let id = item.id;

    let cell = move |column: BudgetColumn, initial: String, input_type: &'static str, placeholder: &'static str| {
        let error = move || {
            errors.with(|e| {
                e.get(&budget_field(id, column.field()))
                    .map(|message| view! { <p class="field-error">{message.to_string()}</p> })
            })
        };
        view! {
            <div class="budget-item-cell">
                <input
                    type=input_type
                    placeholder=placeholder
                    class:input-invalid=move || errors.with(|e| e.contains(&budget_field(id, column.field())))
                    prop:value=initial
                    on:input=move |ev| on_change.run((id, column, event_target_value(&ev)))
                />
                {error}
            </div>
        }
    };

    view! {
        <div class="budget-item-row">
            {cell(BudgetColumn::Description, item.description, "text", "Description")}
            {cell(BudgetColumn::Min, item.min, "number", "Min")}
            {cell(BudgetColumn::Max, item.max, "number", "Max")}
            <RemoveConfirmButton label="Remove budget item" on_confirm=move |_| on_remove.run(id) />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::DreamDraft;

    #[test]
    fn test_column_edits_only_its_field() {
        let mut draft = DreamDraft::create();
        let id = draft.add_budget_item();

        draft.update_budget_item(id, |item| BudgetColumn::Min.apply(item, "25".into()));
        draft.update_budget_item(id, |item| BudgetColumn::Description.apply(item, "Lumber".into()));

        let row = &draft.budget_items[0];
        assert_eq!((row.description.as_str(), row.min.as_str(), row.max.as_str()), ("Lumber", "25", "0"));
        assert_eq!(BudgetColumn::Max.field(), "max");
    }
}
