//! In-memory transport for tests.

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;

use super::Transport;
use crate::error::{FetchError, FetchResult};

#[derive(Default)]
pub struct FakeTransport {
    bodies: RefCell<HashMap<String, String>>,
    failures: RefCell<HashMap<String, FetchError>>,
    /// Cooperative yields before answering, to reorder completions
    delays: RefCell<HashMap<String, usize>>,
    requested: RefCell<Vec<String>>,
    /// URLs in the order their responses resolved
    answered: RefCell<Vec<String>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, url: &str, body: &str) {
        self.bodies.borrow_mut().insert(url.to_string(), body.to_string());
    }

    pub fn fail(&self, url: &str, error: FetchError) {
        self.failures.borrow_mut().insert(url.to_string(), error);
    }

    pub fn recover(&self, url: &str) {
        self.failures.borrow_mut().remove(url);
    }

    pub fn delay(&self, url: &str, yields: usize) {
        self.delays.borrow_mut().insert(url.to_string(), yields);
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }

    pub fn answered(&self) -> Vec<String> {
        self.answered.borrow().clone()
    }

    pub fn count_matching(&self, needle: &str) -> usize {
        self.requested.borrow().iter().filter(|url| url.contains(needle)).count()
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn get(&self, url: &str) -> FetchResult<String> {
        self.requested.borrow_mut().push(url.to_string());

        let yields = self.delays.borrow().get(url).copied().unwrap_or(0);
        for _ in 0..yields {
            tokio::task::yield_now().await;
        }
        self.answered.borrow_mut().push(url.to_string());

        if let Some(err) = self.failures.borrow().get(url) {
            return Err(err.clone());
        }
        self.bodies
            .borrow()
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(url.to_string()))
    }
}

// ========================
// Fixtures
// ========================

pub const BASE: &str = "http://api";

/// Registers a list endpoint page and one record per name.
/// Record ids follow the list position so derived ids line up.
pub fn seed_catalog(transport: &FakeTransport, names: &[&str], page_size: u32) {
    let total = names.len() as u32;
    let mut offset = 0u32;
    while offset < total {
        let end = (offset + page_size).min(total);
        let results: Vec<String> = names[offset as usize..end as usize]
            .iter()
            .enumerate()
            .map(|(i, name)| {
                format!(
                    r#"{{"name":"{}","url":"{}/pokemon/{}/"}}"#,
                    name,
                    BASE,
                    offset + i as u32 + 1
                )
            })
            .collect();
        let next = if end < total { "\"more\"" } else { "null" };
        transport.insert(
            &format!("{}/pokemon?limit={}&offset={}", BASE, page_size, offset),
            &format!(
                r#"{{"count":{},"next":{},"previous":null,"results":[{}]}}"#,
                total,
                next,
                results.join(",")
            ),
        );
        offset = end;
    }

    for (i, name) in names.iter().enumerate() {
        let category = if i % 2 == 0 { "grass" } else { "fire" };
        transport.insert(
            &format!("{}/pokemon/{}", BASE, name),
            &record_json(i as u32 + 1, name, &[category], &[], &[]),
        );
    }
}

/// Minimal `/pokemon/{name}` body
pub fn record_json(
    id: u32,
    name: &str,
    types: &[&str],
    abilities: &[(&str, &str)],
    moves: &[(&str, &str)],
) -> String {
    let types: Vec<String> = types
        .iter()
        .enumerate()
        .map(|(i, t)| format!(r#"{{"slot":{},"type":{{"name":"{}","url":""}}}}"#, i + 1, t))
        .collect();
    let abilities: Vec<String> = abilities
        .iter()
        .enumerate()
        .map(|(i, (n, u))| {
            format!(
                r#"{{"ability":{{"name":"{}","url":"{}"}},"is_hidden":false,"slot":{}}}"#,
                n,
                u,
                i + 1
            )
        })
        .collect();
    let moves: Vec<String> = moves
        .iter()
        .map(|(n, u)| format!(r#"{{"move":{{"name":"{}","url":"{}"}}}}"#, n, u))
        .collect();
    format!(
        r#"{{"id":{},"name":"{}","sprites":{{"front_default":"front/{}.png","other":{{"official-artwork":{{"front_default":"art/{}.png"}}}}}},"types":[{}],"abilities":[{}],"moves":[{}]}}"#,
        id,
        name,
        id,
        id,
        types.join(","),
        abilities.join(","),
        moves.join(",")
    )
}
