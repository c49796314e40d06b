//! Rick and Morty API client

use std::sync::OnceLock;

use async_trait::async_trait;

use crate::state::{CharacterPage, FilterState};

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },
    #[error("response parse error: {0}")]
    Parse(String),
}

/// Source of character listing pages.
#[async_trait]
pub trait CharacterApi: Send + Sync {
    /// Base listing endpoint, without query.
    fn listing_url(&self) -> &str;

    /// Fetch one listing page by absolute URL (used to follow `info.next`).
    async fn fetch_url(&self, url: &str) -> Result<CharacterPage, ApiError>;

    async fn fetch_page(&self, page: u32, filters: &FilterState) -> Result<CharacterPage, ApiError> {
        let url = page_url(self.listing_url(), page, filters);
        self.fetch_url(&url).await
    }
}

/// `{base}?page=n` followed by the non-empty filter fields.
pub fn page_url(base: &str, page: u32, filters: &FilterState) -> String {
    let mut url = format!("{base}?page={page}");
    for (field, value) in filters.active() {
        url.push('&');
        url.push_str(field.key());
        url.push('=');
        url.push_str(&urlencoding::encode(value));
    }
    url
}

pub struct HttpCharacterApi {
    client: &'static reqwest::Client,
    base_url: String,
}

impl HttpCharacterApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: http_client(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl CharacterApi for HttpCharacterApi {
    fn listing_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch_url(&self, url: &str) -> Result<CharacterPage, ApiError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Parse(e.to_string()))
    }
}

fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(reqwest::Client::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://rickandmortyapi.com/api/character";

    #[test]
    fn page_url_without_filters() {
        assert_eq!(page_url(BASE, 1, &FilterState::default()), format!("{BASE}?page=1"));
    }

    #[test]
    fn page_url_omits_empty_fields_and_keeps_order() {
        let filters = FilterState {
            species: "Human".into(),
            status: String::new(),
            gender: "Female".into(),
        };
        assert_eq!(
            page_url(BASE, 3, &filters),
            format!("{BASE}?page=3&species=Human&gender=Female")
        );
    }

    #[test]
    fn page_url_encodes_values() {
        let filters = FilterState {
            species: "Mythological Creature".into(),
            ..Default::default()
        };
        assert_eq!(
            page_url(BASE, 2, &filters),
            format!("{BASE}?page=2&species=Mythological%20Creature")
        );
    }

    #[test]
    fn status_error_names_url() {
        let error = ApiError::Status {
            status: 404,
            url: "https://example.test".into(),
        };
        assert_eq!(error.to_string(), "unexpected status 404 from https://example.test");
    }
}
