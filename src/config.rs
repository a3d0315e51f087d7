//! API Configuration
//!
//! Endpoint locations and paging constants.

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_SPRITE_BASE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

/// Items fetched per "load more"
pub const PAGE_SIZE: u32 = 10;
/// Moves resolved on the detail page
pub const MOVE_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base URL without trailing slash
    pub base_url: String,
    /// Raw sprite directory, used when a record has no artwork
    pub sprite_base: String,
    pub page_size: u32,
    pub move_limit: usize,
    /// Language tag for ability effect text
    pub language: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            sprite_base: DEFAULT_SPRITE_BASE.to_string(),
            page_size: PAGE_SIZE,
            move_limit: MOVE_LIMIT,
            language: "en".to_string(),
        }
    }
}

impl ApiConfig {
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn sprite_url(&self, id: u32) -> String {
        format!("{}/{}.png", self.sprite_base, id)
    }
}
