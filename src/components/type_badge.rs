//! Type Badge Component
//!
//! Color-coded type label and move chip.

use leptos::prelude::*;

use crate::type_colors::{move_color, type_color};

#[component]
pub fn TypeBadge(#[prop(into)] name: String) -> impl IntoView {
    let style = format!("background-color: {};", type_color(&name));
    view! {
        <span class="type-badge" style=style>{name}</span>
    }
}

/// Move name on its type's color
#[component]
pub fn MoveChip(#[prop(into)] name: String, #[prop(into)] category: String) -> impl IntoView {
    let style = format!("background-color: {};", move_color(&category));
    view! {
        <div class="move-chip" style=style title=category>{name}</div>
    }
}
