//! Startup configuration resolved from the command line

use crate::state::Theme;

pub const DEFAULT_API_URL: &str = "https://rickandmortyapi.com/api/character";

/// Upper bound on pages walked when collecting filter options.
pub const DEFAULT_FILTER_PAGE_CAP: usize = 100;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Listing endpoint; page and filter queries are appended to it
    pub api_base: String,
    pub filter_page_cap: usize,
    pub theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_URL.to_string(),
            filter_page_cap: DEFAULT_FILTER_PAGE_CAP,
            theme: Theme::default(),
        }
    }
}

impl AppConfig {
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }
}
