//! Application Context
//!
//! Shared state provided via Leptos Context API: the current route and the
//! API client.

use std::sync::Arc;

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::api::Client;
use crate::route::Route;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current route - read
    pub route: ReadSignal<Route>,
    /// Current route - write
    set_route: WriteSignal<Route>,
    api: StoredValue<Arc<Client>>,
}

impl AppContext {
    pub fn new(route: (ReadSignal<Route>, WriteSignal<Route>), api: Client) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            api: StoredValue::new(Arc::new(api)),
        }
    }

    pub fn api(&self) -> Arc<Client> {
        self.api.get_value()
    }

    /// Push a history entry and switch pages
    pub fn navigate(&self, route: Route) {
        let path = route.to_path();
        log::debug!("[Route] navigate to {}", path);
        if let Err(err) = push_history(&path) {
            log::warn!("[Route] pushState failed for {}: {:?}", path, err);
        }
        self.set_route.set(route);
    }

    /// Re-read the location after back/forward
    pub fn sync_from_location(&self) {
        self.set_route.set(current_route());
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Route for the browser's current path
pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .map(|path| Route::parse(&path))
        .unwrap_or(Route::Catalog)
}

fn push_history(path: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    window.history()?.push_state_with_url(&JsValue::NULL, "", Some(path))
}
