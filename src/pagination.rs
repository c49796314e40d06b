//! Page/filter state machine and the results surface it drives

use serde::{Deserialize, Serialize};

use crate::cards::{render_card, FlipCard, SKELETON_COUNT};
use crate::state::{CharacterPage, FilterField, FilterState};

/// Cards rendered per page, whatever the upstream page size.
pub const PAGE_CARD_LIMIT: usize = 6;

/// Shown in place of the cards when a page load fails.
pub const LOAD_FAILURE_MESSAGE: &str = "No characters found.";

/// Everything needed to issue one page request
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub token: u64,
    pub page: u32,
    pub filters: FilterState,
}

/// What happened to a completed request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Rendered,
    Failed,
    /// A newer request was issued; the response was dropped
    Stale,
}

/// Render target the controller writes to.
pub trait ResultsSurface {
    /// Replace the results with `SKELETON_COUNT` placeholders.
    fn show_skeletons(&mut self);
    /// Replace the results with `cards`.
    fn show_cards(&mut self, cards: Vec<FlipCard>);
    /// Replace the results with `message`.
    fn show_failure(&mut self, message: &str);
    fn set_navigation(&mut self, prev_enabled: bool, next_enabled: bool);
    fn next_enabled(&self) -> bool;
}

/// Owns the current page, the filter selection and the request sequence
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaginationController {
    current_page: u32,
    filters: FilterState,
    latest_token: u64,
}

impl Default for PaginationController {
    fn default() -> Self {
        Self::new()
    }
}

impl PaginationController {
    pub fn new() -> Self {
        Self {
            current_page: 1,
            filters: FilterState::default(),
            latest_token: 0,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn latest_token(&self) -> u64 {
        self.latest_token
    }

    /// Start a load of the current page: skeletons go up and a fresh token is issued.
    pub fn load(&mut self, surface: &mut impl ResultsSurface) -> PageRequest {
        self.latest_token += 1;
        surface.show_skeletons();
        PageRequest {
            token: self.latest_token,
            page: self.current_page,
            filters: self.filters.clone(),
        }
    }

    pub fn prev(&mut self, surface: &mut impl ResultsSurface) -> Option<PageRequest> {
        if self.current_page <= 1 {
            return None;
        }
        self.current_page -= 1;
        Some(self.load(surface))
    }

    pub fn next(&mut self, surface: &mut impl ResultsSurface) -> Option<PageRequest> {
        if !surface.next_enabled() {
            return None;
        }
        self.current_page += 1;
        Some(self.load(surface))
    }

    /// Any filter change goes back to page 1.
    pub fn set_filter(
        &mut self,
        field: FilterField,
        value: &str,
        surface: &mut impl ResultsSurface,
    ) -> PageRequest {
        self.current_page = 1;
        self.filters.set(field, value);
        self.load(surface)
    }

    /// Apply the result of request `token` to `surface`.
    pub fn complete(
        &mut self,
        token: u64,
        result: Result<CharacterPage, String>,
        surface: &mut impl ResultsSurface,
    ) -> LoadOutcome {
        if token != self.latest_token {
            return LoadOutcome::Stale;
        }

        match result {
            Ok(page) => {
                let labels = self.filters.applied_labels();
                let cards = page
                    .results
                    .iter()
                    .take(PAGE_CARD_LIMIT)
                    .map(|character| FlipCard::new(render_card(character, &labels)))
                    .collect();
                surface.show_cards(cards);
                surface.set_navigation(page.info.prev.is_some(), page.info.next.is_some());
                LoadOutcome::Rendered
            }
            Err(_) => {
                surface.show_failure(LOAD_FAILURE_MESSAGE);
                surface.set_navigation(false, false);
                LoadOutcome::Failed
            }
        }
    }
}

/// Contents of the results area
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ResultsView {
    Skeleton { count: usize },
    Cards(Vec<FlipCard>),
    Failed(String),
}

/// The on-screen results area and navigation buttons
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResultsArea {
    pub view: ResultsView,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    /// Card under the cursor
    pub selected: usize,
}

impl Default for ResultsArea {
    fn default() -> Self {
        Self {
            view: ResultsView::Skeleton {
                count: SKELETON_COUNT,
            },
            prev_enabled: false,
            next_enabled: false,
            selected: 0,
        }
    }
}

impl ResultsSurface for ResultsArea {
    fn show_skeletons(&mut self) {
        self.view = ResultsView::Skeleton {
            count: SKELETON_COUNT,
        };
        self.selected = 0;
    }

    fn show_cards(&mut self, cards: Vec<FlipCard>) {
        self.view = ResultsView::Cards(cards);
        self.selected = 0;
    }

    fn show_failure(&mut self, message: &str) {
        self.view = ResultsView::Failed(message.to_string());
        self.selected = 0;
    }

    fn set_navigation(&mut self, prev_enabled: bool, next_enabled: bool) {
        self.prev_enabled = prev_enabled;
        self.next_enabled = next_enabled;
    }

    fn next_enabled(&self) -> bool {
        self.next_enabled
    }
}

impl ResultsArea {
    pub fn is_loading(&self) -> bool {
        matches!(self.view, ResultsView::Skeleton { .. })
    }

    pub fn cards(&self) -> &[FlipCard] {
        match &self.view {
            ResultsView::Cards(cards) => cards,
            _ => &[],
        }
    }

    pub fn card_count(&self) -> usize {
        self.cards().len()
    }

    pub fn kind_label(&self) -> &'static str {
        match self.view {
            ResultsView::Skeleton { .. } => "skeleton",
            ResultsView::Cards(_) => "cards",
            ResultsView::Failed(_) => "failed",
        }
    }

    /// Flip card `index`; false when there is no such card.
    pub fn toggle_flip(&mut self, index: usize) -> bool {
        match &mut self.view {
            ResultsView::Cards(cards) => match cards.get_mut(index) {
                Some(card) => {
                    card.toggle();
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    /// Move the cursor by `delta`, clamped to the rendered cards.
    pub fn move_selection(&mut self, delta: isize) -> bool {
        let count = self.card_count();
        if count == 0 {
            return false;
        }
        let next = (self.selected as isize + delta).clamp(0, count as isize - 1) as usize;
        if next == self.selected {
            return false;
        }
        self.selected = next;
        true
    }
}
