//! Todo Filter Panel Component
//!
//! Accumulates the five list criteria locally and emits one snapshot
//! only on explicit Apply. Reset restores every field to its neutral
//! value and immediately emits that neutral snapshot.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::{DueDateFilter, FilterCriteria, PriorityFilter, StatusFilter};

#[component]
pub fn TodoFilterPanel(#[prop(into)] on_change: Callback<FilterCriteria>) -> impl IntoView {
    let (status, set_status) = signal(StatusFilter::All);
    let (priority, set_priority) = signal(PriorityFilter::All);
    let (category, set_category) = signal(String::new());
    let (due_date, set_due_date) = signal(DueDateFilter::All);
    let (search_term, set_search_term) = signal(String::new());

    let apply = move |_| {
        on_change.run(FilterCriteria::normalized(
            status.get(),
            priority.get(),
            &category.get(),
            due_date.get(),
            &search_term.get(),
        ));
    };

    let reset = move |_| {
        set_status.set(StatusFilter::All);
        set_priority.set(PriorityFilter::All);
        set_category.set(String::new());
        set_due_date.set(DueDateFilter::All);
        set_search_term.set(String::new());
        // Reset is itself an apply.
        on_change.run(FilterCriteria::default());
    };

    view! {
        <div class="filter-panel">
            <div class="filter-grid">
                <div class="filter-field">
                    <label>"Search"</label>
                    <input
                        type="text"
                        placeholder="Search by title..."
                        prop:value=move || search_term.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_search_term.set(input.value());
                        }
                    />
                </div>

                <div class="filter-field">
                    <label>"Status"</label>
                    <select
                        prop:value=move || status.get().as_str()
                        on:change=move |ev| {
                            let target = ev.target().unwrap();
                            let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                            set_status.set(StatusFilter::from_value(&select.value()));
                        }
                    >
                        <option value="all">"All"</option>
                        <option value="pending">"Pending"</option>
                        <option value="completed">"Completed"</option>
                    </select>
                </div>

                <div class="filter-field">
                    <label>"Priority"</label>
                    <select
                        prop:value=move || priority.get().as_str()
                        on:change=move |ev| {
                            let target = ev.target().unwrap();
                            let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                            set_priority.set(PriorityFilter::from_value(&select.value()));
                        }
                    >
                        <option value="all">"All Priorities"</option>
                        <option value="Low">"Low"</option>
                        <option value="Medium">"Medium"</option>
                        <option value="High">"High"</option>
                    </select>
                </div>

                <div class="filter-field">
                    <label>"Category"</label>
                    <input
                        type="text"
                        placeholder="Filter by category..."
                        prop:value=move || category.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_category.set(input.value());
                        }
                    />
                </div>

                <div class="filter-field">
                    <label>"Due Date"</label>
                    <select
                        prop:value=move || due_date.get().as_str()
                        on:change=move |ev| {
                            let target = ev.target().unwrap();
                            let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                            set_due_date.set(DueDateFilter::from_value(&select.value()));
                        }
                    >
                        <option value="all">"All Dates"</option>
                        <option value="today">"Today"</option>
                        <option value="upcoming">"Upcoming"</option>
                        <option value="overdue">"Overdue"</option>
                    </select>
                </div>
            </div>

            <div class="filter-actions">
                <button type="button" class="reset-btn" on:click=reset>
                    "Reset Filters"
                </button>
                <button type="button" class="apply-btn" on:click=apply>
                    "Apply Filters"
                </button>
            </div>
        </div>
    }
}
