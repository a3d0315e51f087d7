//! Item Card Component
//!
//! One catalog entry linking to its detail page.

use leptos::prelude::*;

use crate::components::TypeBadge;
use crate::context::use_app_context;
use crate::models::ItemSummary;
use crate::route::Route;

#[component]
pub fn ItemCard(item: ItemSummary) -> impl IntoView {
    let ctx = use_app_context();
    let route = Route::Detail(item.name.clone());
    let href = route.to_path();

    // Keep the real href for middle-click, handle plain clicks in-app
    let on_click = move |ev: web_sys::MouseEvent| {
        if ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        ctx.navigate(route.clone());
    };

    view! {
        <a class="item-card" href=href on:click=on_click>
            <img class="item-image" src=item.image_url.clone() alt=item.name.clone() loading="lazy" />
            <h3 class="item-name">{item.name.clone()}</h3>
            <p class="item-number">{format!("#{}", item.id)}</p>
            {item.category.map(|category| view! { <TypeBadge name=category /> })}
        </a>
    }
}
