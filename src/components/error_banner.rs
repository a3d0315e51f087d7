//! Error Banner Component
//!
//! Inline failure message with a retry action.

use leptos::prelude::*;

/// Error message plus a "Retry" button
///
/// # Arguments
/// * `message` - Text shown to the user
/// * `on_retry` - Callback to execute when the user retries
#[component]
pub fn ErrorBanner(
    #[prop(into)] message: String,
    #[prop(into)] on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="error-banner" role="alert">
            <span class="error-text">{message}</span>
            <button
                class="retry-btn"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_retry.run(());
                }
            >
                "Retry"
            </button>
        </div>
    }
}
