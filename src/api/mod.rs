//! PokeAPI Client
//!
//! Typed endpoint wrappers over a pluggable transport, organized by resource.

mod browser;
#[cfg(test)]
pub mod fake;

use async_trait::async_trait;
use percent_encoding::utf8_percent_encode;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::{FetchError, FetchResult};
use crate::models::{AbilityRecord, ListPage, MoveRecord, PokemonRecord};
use crate::route::PATH_SEGMENT;

pub use browser::BrowserTransport;

/// Fetches a URL and returns the response body
#[async_trait(?Send)]
pub trait Transport {
    async fn get(&self, url: &str) -> FetchResult<String>;
}

/// Client used by the running app
pub type Client = PokeApi<BrowserTransport>;

pub struct PokeApi<T> {
    transport: T,
    config: ApiConfig,
}

impl<T: Transport> PokeApi<T> {
    pub fn new(transport: T, config: ApiConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn list_url(&self, limit: u32, offset: u32) -> String {
        format!("{}/pokemon?limit={}&offset={}", self.config.base_url, limit, offset)
    }

    pub fn pokemon_url(&self, key: &str) -> String {
        let key = key.trim().to_lowercase();
        format!(
            "{}/pokemon/{}",
            self.config.base_url,
            utf8_percent_encode(&key, PATH_SEGMENT)
        )
    }

    // ========================
    // Endpoints
    // ========================

    pub async fn list(&self, limit: u32, offset: u32) -> FetchResult<ListPage> {
        self.get_json(&self.list_url(limit, offset)).await
    }

    /// Full record by numeric id or name
    pub async fn pokemon(&self, key: &str) -> FetchResult<PokemonRecord> {
        // `{base}/pokemon/` is the list endpoint, never a record
        if key.trim().is_empty() {
            return Err(FetchError::NotFound(self.pokemon_url(key)));
        }
        self.get_json(&self.pokemon_url(key)).await
    }

    pub async fn ability(&self, url: &str) -> FetchResult<AbilityRecord> {
        self.get_json(url).await
    }

    pub async fn move_detail(&self, url: &str) -> FetchResult<MoveRecord> {
        self.get_json(url).await
    }

    async fn get_json<D: DeserializeOwned>(&self, url: &str) -> FetchResult<D> {
        let body = self.transport.get(url).await?;
        serde_json::from_str(&body).map_err(|e| FetchError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::fake::FakeTransport;
    use super::*;

    fn api() -> PokeApi<FakeTransport> {
        PokeApi::new(FakeTransport::new(), ApiConfig::default().with_base_url("http://api"))
    }

    #[test]
    fn test_urls() {
        let api = api();
        assert_eq!(api.list_url(10, 20), "http://api/pokemon?limit=10&offset=20");
        assert_eq!(api.pokemon_url("Bulbasaur"), "http://api/pokemon/bulbasaur");
        assert_eq!(api.pokemon_url("mr mime"), "http://api/pokemon/mr%20mime");
        assert_eq!(api.pokemon_url(" Mr-Mime "), "http://api/pokemon/mr-mime");
    }

    #[tokio::test]
    async fn test_decodes_list() {
        let api = api();
        api.transport().insert(
            "http://api/pokemon?limit=2&offset=0",
            r#"{"count": 1302, "next": "n", "previous": null,
                "results": [{"name": "bulbasaur", "url": "u/1"}, {"name": "ivysaur", "url": "u/2"}]}"#,
        );

        let page = api.list(2, 0).await.unwrap();
        assert_eq!(page.count, 1302);
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[1].name, "ivysaur");
    }

    #[tokio::test]
    async fn test_missing_url_is_not_found() {
        let api = api();
        let err = api.pokemon("missingno").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_blank_name_is_never_requested() {
        let api = api();
        let err = api.pokemon("  ").await.unwrap_err();
        assert!(err.is_not_found());
        assert!(api.transport().requested().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let api = api();
        api.transport().insert("http://api/pokemon/pikachu", r#"{"name": "pikachu"}"#);

        match api.pokemon("pikachu").await {
            Err(FetchError::Decode { url, .. }) => assert_eq!(url, "http://api/pokemon/pikachu"),
            other => panic!("expected decode error, got {:?}", other),
        }
    }
}
