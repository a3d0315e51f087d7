//! Catalog Page Component
//!
//! Paginated card grid with name search and type filter.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalog::{self, CatalogState};
use crate::components::{ErrorBanner, ItemCard, TypeFilter};
use crate::context::use_app_context;

#[component]
pub fn CatalogPage() -> impl IntoView {
    let ctx = use_app_context();
    let state = RwSignal::new(CatalogState::new(ctx.api().config().page_size));

    let load_more = move || {
        let Some(offset) = state.try_update(|s| s.begin_load()).flatten() else {
            return;
        };
        let api = ctx.api();
        log::info!("[Catalog] Loading page at offset {}", offset);
        spawn_local(async move {
            let result = catalog::load_page(&*api, offset).await;
            match &result {
                Ok(page) => log::info!("[Catalog] Loaded {} items at offset {}", page.items.len(), offset),
                Err(err) => log::error!("[Catalog] Page at offset {} failed: {}", offset, err),
            }
            // None once this page has been left
            if state.try_update(|s| s.finish_load(offset, result)) == Some(false) {
                log::debug!("[Catalog] Dropped stale page at offset {}", offset);
            }
        });
    };

    // First page on mount
    Effect::new(move |_| load_more());

    let visible = Memo::new(move |_| state.with(|s| s.visible()));
    let loaded = move || state.with(|s| s.items.len());
    let loading = move || state.with(|s| s.is_loading());
    let error = move || state.with(|s| s.error().map(|e| e.to_string()));
    let can_load_more = move || state.with(|s| !s.exhausted && s.error().is_none());
    let has_no_matches = move || loaded() > 0 && visible.with(|v| v.is_empty());
    let selected_category = Signal::derive(move || state.with(|s| s.category.clone()));

    view! {
        <div class="catalog-page">
            <h1 class="catalog-title">"Pokédex"</h1>

            <div class="catalog-controls">
                <input
                    class="search-input"
                    type="search"
                    placeholder="Search by name..."
                    prop:value=move || state.with(|s| s.search.clone())
                    on:input=move |ev| {
                        let term = event_target_value(&ev);
                        state.update(|s| s.search = term);
                    }
                />
                <TypeFilter
                    selected=selected_category
                    on_change=move |category| state.update(|s| s.category = category)
                />
            </div>

            <div class="item-grid">
                <For
                    each=move || visible.get()
                    key=|item| item.id
                    children=move |item| view! { <ItemCard item=item /> }
                />
            </div>

            <Show when=has_no_matches>
                <p class="empty-message">"Nothing loaded so far matches."</p>
            </Show>

            <p class="item-count">
                {move || format!("{} of {} loaded", visible.with(|v| v.len()), loaded())}
            </p>

            {move || error().map(|message| view! {
                <ErrorBanner message=message on_retry=Callback::new(move |_: ()| load_more()) />
            })}

            <Show when=loading>
                <div class="loading">"Loading..."</div>
            </Show>

            <Show when=move || can_load_more() && !loading()>
                <button class="load-more-btn" on:click=move |_| load_more()>
                    "Load more"
                </button>
            </Show>
        </div>
    }
}
