//! Catalog Logic
//!
//! Page loading, the accumulated item list and the read-side filter.

use futures::future::try_join_all;

use crate::api::{PokeApi, Transport};
use crate::error::{FetchError, FetchResult};
use crate::models::ItemSummary;

/// Number shown on a card, derived from list position
pub fn sequential_id(offset: u32, index: usize) -> u32 {
    offset + index as u32 + 1
}

/// One fetched page, in list order
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPage {
    pub items: Vec<ItemSummary>,
    /// False once the list endpoint reports no next page
    pub has_more: bool,
}

/// Fetch a page of names, then every record of that page concurrently.
/// Any failed record fails the whole page.
pub async fn load_page<T: Transport>(api: &PokeApi<T>, offset: u32) -> FetchResult<LoadedPage> {
    let config = api.config();
    let list = api.list(config.page_size, offset).await?;

    let lookups = list.results.iter().enumerate().map(|(index, entry)| async move {
        let id = sequential_id(offset, index);
        let record = api.pokemon(&entry.name).await?;
        if record.id != id {
            log::warn!(
                "[Catalog] {} is #{} upstream but #{} by list position",
                entry.name,
                record.id,
                id
            );
        }
        Ok::<_, FetchError>(ItemSummary {
            name: entry.name.clone(),
            id,
            image_url: record
                .sprites
                .best()
                .map(str::to_string)
                .unwrap_or_else(|| config.sprite_url(id)),
            category: record.type_names().into_iter().next(),
        })
    });

    // try_join_all keeps input order regardless of completion order
    let items = try_join_all(lookups).await?;
    Ok(LoadedPage {
        items,
        has_more: list.next.is_some(),
    })
}

/// Case-insensitive name match plus optional exact category match
pub fn apply_filter(items: &[ItemSummary], term: &str, category: Option<&str>) -> Vec<ItemSummary> {
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .filter(|item| match category {
            Some(wanted) => item.category.as_deref() == Some(wanted),
            None => true,
        })
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading {
        offset: u32,
    },
    Failed(FetchError),
}

/// Catalog page state, owned by one `CatalogPage`
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    /// Append-only
    pub items: Vec<ItemSummary>,
    pub next_offset: u32,
    pub page_size: u32,
    pub search: String,
    pub category: Option<String>,
    pub status: LoadStatus,
    pub exhausted: bool,
}

impl CatalogState {
    pub fn new(page_size: u32) -> Self {
        Self {
            items: Vec::new(),
            next_offset: 0,
            page_size,
            search: String::new(),
            category: None,
            status: LoadStatus::Idle,
            exhausted: false,
        }
    }

    /// Reserve the next page. `None` while a page is in flight or the list
    /// is exhausted.
    pub fn begin_load(&mut self) -> Option<u32> {
        if self.is_loading() || self.exhausted {
            return None;
        }
        let offset = self.next_offset;
        self.status = LoadStatus::Loading { offset };
        Some(offset)
    }

    /// Apply a completed load. Returns false for stale completions.
    pub fn finish_load(&mut self, offset: u32, result: FetchResult<LoadedPage>) -> bool {
        if self.status != (LoadStatus::Loading { offset }) {
            return false;
        }
        match result {
            Ok(page) => {
                self.items.extend(page.items);
                self.next_offset += self.page_size;
                self.exhausted = !page.has_more;
                self.status = LoadStatus::Idle;
            }
            Err(err) => {
                self.status = LoadStatus::Failed(err);
            }
        }
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, LoadStatus::Loading { .. })
    }

    pub fn error(&self) -> Option<&FetchError> {
        match &self.status {
            LoadStatus::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn visible(&self) -> Vec<ItemSummary> {
        apply_filter(&self.items, &self.search, self.category.as_deref())
    }
}
