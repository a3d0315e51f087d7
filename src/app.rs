//! Pokedex Frontend App
//!
//! Root component: owns the route and switches between pages.

use leptos::ev;
use leptos::prelude::*;

use crate::api::{BrowserTransport, Client};
use crate::components::{CatalogPage, DetailPage, NotFoundPage};
use crate::config::ApiConfig;
use crate::context::{self, AppContext};
use crate::route::Page;

#[component]
pub fn App() -> impl IntoView {
    let (route, set_route) = signal(context::current_route());

    // Provide context to all children
    let ctx = AppContext::new((route, set_route), Client::new(BrowserTransport, ApiConfig::default()));
    provide_context(ctx);

    // Back/forward buttons
    let _ = window_event_listener(ev::popstate, move |_| ctx.sync_from_location());

    // Only a page change remounts; a new detail name reuses the detail page
    let page = Memo::new(move |_| route.with(|r| r.page()));
    let detail_name = Signal::derive(move || {
        route.with(|r| r.item_name().map(str::to_string).unwrap_or_default())
    });

    view! {
        <div class="app-layout">
            {move || match page.get() {
                Page::Catalog => view! { <CatalogPage /> }.into_any(),
                Page::Detail => view! { <DetailPage name=detail_name /> }.into_any(),
                Page::NotFound => view! { <NotFoundPage /> }.into_any(),
            }}
        </div>
    }
}
