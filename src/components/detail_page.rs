//! Detail Page Component
//!
//! Artwork, types, abilities and the first moves of one creature.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ErrorBanner, MoveChip, TypeBadge};
use crate::context::use_app_context;
use crate::detail::{self, DetailState, LoadGuard};
use crate::models::ItemDetail;
use crate::route::Route;

#[component]
pub fn DetailPage(#[prop(into)] name: Signal<String>) -> impl IntoView {
    let ctx = use_app_context();
    let (state, set_state) = signal(DetailState::Loading);
    let (retry, set_retry) = signal(0u32);
    let guard = LoadGuard::default();

    // Reload when the name changes or on retry
    Effect::new(move |_| {
        let name = name.get();
        let _ = retry.get();
        // Route already left the detail page
        if name.is_empty() {
            return;
        }
        let ticket = guard.issue();
        let guard = guard.clone();
        let api = ctx.api();

        set_state.set(DetailState::Loading);
        log::info!("[Detail] Loading {}", name);
        spawn_local(async move {
            let Some(result) = detail::load_for_ticket(&*api, &name, &guard, ticket).await else {
                log::debug!("[Detail] Discarding stale response for {}", name);
                return;
            };
            match &result {
                Ok(detail) => log::info!(
                    "[Detail] Loaded {} ({} abilities, {} moves)",
                    detail.name,
                    detail.abilities.len(),
                    detail.moves.len()
                ),
                Err(err) => log::error!("[Detail] Failed to load {}: {}", name, err),
            }
            let _ = set_state.try_set(DetailState::from(result));
        });
    });

    let on_retry = Callback::new(move |_: ()| set_retry.update(|n| *n += 1));

    view! {
        <div class="back-bar">
            <button class="back-btn" on:click=move |_| ctx.navigate(Route::Catalog)>
                "Home"
            </button>
        </div>

        <div class="detail-page">
            {move || match state.get() {
                DetailState::Loading => view! { <p class="loading">"Loading..."</p> }.into_any(),
                DetailState::Ready(detail) => view! { <DetailView detail=detail /> }.into_any(),
                DetailState::Failed(err) if err.is_not_found() => view! {
                    <p class="not-found">{format!("No creature named \"{}\".", name.get())}</p>
                }.into_any(),
                DetailState::Failed(err) => view! {
                    <ErrorBanner message=err.to_string() on_retry=on_retry />
                }.into_any(),
            }}
        </div>
    }
}

#[component]
fn DetailView(detail: ItemDetail) -> impl IntoView {
    let ItemDetail { id, name, image_url, categories, abilities, moves } = detail;

    view! {
        <div class="detail-header">
            {image_url.map(|src| view! { <img class="detail-image" src=src alt=name.clone() /> })}
            <div class="detail-title">
                <h1 class="detail-name">{name.clone()}</h1>
                <p class="item-number">{format!("#{}", id)}</p>
                {categories.into_iter().map(|category| view! { <TypeBadge name=category /> }).collect_view()}
            </div>
        </div>

        <section class="detail-section">
            <h2>"Abilities"</h2>
            <ul class="ability-list">
                {abilities.into_iter().map(|ability| view! {
                    <li class="ability-item">
                        <strong>{ability.name}</strong>
                        ": "
                        {ability.effect_text.unwrap_or_else(|| "No English description.".to_string())}
                    </li>
                }).collect_view()}
            </ul>
        </section>

        <section class="detail-section">
            <h2>"Moves"</h2>
            <div class="move-list">
                {moves.into_iter().map(|mv| view! {
                    <MoveChip name=mv.name category=mv.category />
                }).collect_view()}
            </div>
        </section>
    }
}
