use leptos::prelude::*;

use crate::context::use_app_context;
use crate::route::Route;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let ctx = use_app_context();
    let path = move || ctx.route.with(|r| r.to_path());

    view! {
        <div class="not-found-page">
            <h1>"Page not found"</h1>
            <p>{move || format!("Nothing lives at {}.", path())}</p>
            <button class="back-btn" on:click=move |_| ctx.navigate(Route::Catalog)>
                "Back to the list"
            </button>
        </div>
    }
}
