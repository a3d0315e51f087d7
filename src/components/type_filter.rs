//! Type Filter Component
//!
//! Category filter buttons: "All" plus one per known type.

use leptos::prelude::*;

use crate::type_colors::{type_color, type_names};

/// Type filter buttons for the catalog
#[component]
pub fn TypeFilter(
    selected: Signal<Option<String>>,
    on_change: impl Fn(Option<String>) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="type-filter">
            <button
                class=move || if selected.get().is_none() { "type-btn active" } else { "type-btn" }
                on:click=move |_| on_change(None)
            >
                "All"
            </button>
            {type_names().map(move |name| {
                let is_selected = move || selected.with(|s| s.as_deref() == Some(name));
                view! {
                    <button
                        class=move || if is_selected() { "type-btn active" } else { "type-btn" }
                        style=format!("border-color: {};", type_color(name))
                        on:click=move |_| on_change(Some(name.to_string()))
                    >
                        {name}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
