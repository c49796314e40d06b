//! Startup walk over every listing page to collect filter values

use serde::{Deserialize, Serialize};

use crate::api::CharacterApi;
use crate::state::{Character, FilterField};

/// Distinct values seen per filter field, in first-seen order
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub species: Vec<String>,
    pub status: Vec<String>,
    pub gender: Vec<String>,
}

impl FilterOptions {
    pub fn values(&self, field: FilterField) -> &[String] {
        match field {
            FilterField::Species => &self.species,
            FilterField::Status => &self.status,
            FilterField::Gender => &self.gender,
        }
    }

    fn values_mut(&mut self, field: FilterField) -> &mut Vec<String> {
        match field {
            FilterField::Species => &mut self.species,
            FilterField::Status => &mut self.status,
            FilterField::Gender => &mut self.gender,
        }
    }

    /// Record the non-empty attributes of `character`.
    pub fn absorb(&mut self, character: &Character) {
        for field in FilterField::ALL {
            let value = field.value_of(character);
            if value.is_empty() {
                continue;
            }
            let values = self.values_mut(field);
            if !values.iter().any(|seen| seen == value) {
                values.push(value.to_string());
            }
        }
    }
}

/// How the walk ended
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectOutcome {
    /// The last page had no next link
    Complete,
    /// Stopped at the page cap with a next link still pending
    Truncated { max_pages: usize },
    /// A request or decode failed; options gathered so far are kept
    Aborted { error: String },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilterCollection {
    pub options: FilterOptions,
    pub pages_fetched: usize,
    pub outcome: CollectOutcome,
}

/// Follow `info.next` from the listing endpoint, one request at a time,
/// for at most `max_pages` pages.
pub async fn collect_filter_options(api: &dyn CharacterApi, max_pages: usize) -> FilterCollection {
    let mut options = FilterOptions::default();
    let mut pages_fetched = 0;
    let mut next_url = Some(api.listing_url().to_string());

    let outcome = loop {
        let Some(url) = next_url.take() else {
            break CollectOutcome::Complete;
        };
        if pages_fetched >= max_pages {
            tracing::warn!(max_pages, pending = %url, "filter option walk truncated");
            break CollectOutcome::Truncated { max_pages };
        }

        match api.fetch_url(&url).await {
            Ok(page) => {
                pages_fetched += 1;
                for character in &page.results {
                    options.absorb(character);
                }
                next_url = page.info.next;
            }
            Err(error) => {
                tracing::error!(%error, %url, pages_fetched, "filter option walk failed");
                break CollectOutcome::Aborted {
                    error: error.to_string(),
                };
            }
        }
    };

    tracing::info!(
        pages_fetched,
        species = options.species.len(),
        status = options.status.len(),
        gender = options.gender.len(),
        "filter options collected"
    );

    FilterCollection {
        options,
        pages_fetched,
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::api::ApiError;
    use crate::state::{CharacterPage, PageInfo};

    const BASE: &str = "mock://characters";

    /// Serves canned pages keyed by URL; unknown URLs fail.
    struct PagedApi {
        pages: HashMap<String, CharacterPage>,
    }

    impl PagedApi {
        /// Chain `species_per_page` so page N links to page N+1.
        fn chain(species_per_page: &[&[&str]]) -> Self {
            let mut pages = HashMap::new();
            for (index, species) in species_per_page.iter().enumerate() {
                let url = page_link(index);
                let next = (index + 1 < species_per_page.len()).then(|| page_link(index + 1));
                let results = species
                    .iter()
                    .enumerate()
                    .map(|(offset, species)| Character {
                        id: (index * 10 + offset) as u32,
                        name: format!("Character {index}-{offset}"),
                        species: species.to_string(),
                        status: "Alive".into(),
                        gender: if offset % 2 == 0 { "Male" } else { "" }.into(),
                        ..Default::default()
                    })
                    .collect();
                pages.insert(
                    url,
                    CharacterPage {
                        results,
                        info: PageInfo { next, prev: None },
                    },
                );
            }
            Self { pages }
        }
    }

    fn page_link(index: usize) -> String {
        if index == 0 {
            BASE.to_string()
        } else {
            format!("{BASE}?page={}", index + 1)
        }
    }

    #[async_trait]
    impl CharacterApi for PagedApi {
        fn listing_url(&self) -> &str {
            BASE
        }

        async fn fetch_url(&self, url: &str) -> Result<CharacterPage, ApiError> {
            self.pages.get(url).cloned().ok_or(ApiError::Status {
                status: 500,
                url: url.to_string(),
            })
        }
    }

    fn as_set(values: &[String]) -> HashSet<&str> {
        values.iter().map(String::as_str).collect()
    }

    #[tokio::test]
    async fn walks_every_page_and_deduplicates() {
        let api = PagedApi::chain(&[&["Human", "Human"], &["Alien", "Human"]]);

        let collection = collect_filter_options(&api, 10).await;

        assert_eq!(collection.outcome, CollectOutcome::Complete);
        assert_eq!(collection.pages_fetched, 2);
        assert_eq!(as_set(&collection.options.species), HashSet::from(["Human", "Alien"]));
        assert_eq!(collection.options.species.len(), 2);
        assert_eq!(collection.options.status, vec!["Alive".to_string()]);
        // Empty genders are skipped.
        assert_eq!(collection.options.gender, vec!["Male".to_string()]);
    }

    #[tokio::test]
    async fn page_order_does_not_change_the_set() {
        let forward = collect_filter_options(&PagedApi::chain(&[&["Human"], &["Alien"]]), 10).await;
        let reverse = collect_filter_options(&PagedApi::chain(&[&["Alien"], &["Human"]]), 10).await;

        assert_eq!(
            as_set(&forward.options.species),
            as_set(&reverse.options.species)
        );
    }

    #[tokio::test]
    async fn stops_at_page_cap() {
        let api = PagedApi::chain(&[&["Human"], &["Alien"], &["Robot"]]);

        let collection = collect_filter_options(&api, 2).await;

        assert_eq!(collection.outcome, CollectOutcome::Truncated { max_pages: 2 });
        assert_eq!(collection.pages_fetched, 2);
        assert_eq!(collection.options.species, vec!["Human".to_string(), "Alien".to_string()]);
    }

    #[tokio::test]
    async fn failure_keeps_partial_options() {
        let mut api = PagedApi::chain(&[&["Human"], &["Alien"], &["Robot"]]);
        api.pages.remove(&page_link(1));

        let collection = collect_filter_options(&api, 10).await;

        assert!(matches!(collection.outcome, CollectOutcome::Aborted { .. }));
        assert_eq!(collection.pages_fetched, 1);
        assert_eq!(collection.options.species, vec!["Human".to_string()]);
    }
}
