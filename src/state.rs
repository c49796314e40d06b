//! Application state - single source of truth

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;
use tui_dispatch_debug::debug::{DebugSection, DebugState, ron_string};

use crate::config::AppConfig;
use crate::dropdown::DropdownSet;
use crate::filters::FilterCollection;
use crate::pagination::{PaginationController, ResultsArea};

/// Terminals narrower than this use the compact layout (filter menu instead of filter bar).
pub const COMPACT_WIDTH: u16 = 100;

/// Skeleton shimmer timing.
pub const SKELETON_TICK_MS: u64 = 120;

/// A named place reference (origin or last known location)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
}

/// One character record as returned by the listing endpoint
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub species: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub origin: Place,
    #[serde(default)]
    pub location: Place,
}

/// Server-provided pagination links
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PageInfo {
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
}

/// One page of the listing endpoint
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterPage {
    #[serde(default)]
    pub results: Vec<Character>,
    #[serde(default)]
    pub info: PageInfo,
}

/// The three attributes a listing can be filtered by
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterField {
    Species,
    Status,
    Gender,
}

impl FilterField {
    pub const ALL: [FilterField; 3] = [FilterField::Species, FilterField::Status, FilterField::Gender];

    /// Query parameter name, also the selector key.
    pub fn key(self) -> &'static str {
        match self {
            FilterField::Species => "species",
            FilterField::Status => "status",
            FilterField::Gender => "gender",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterField::Species => "Species",
            FilterField::Status => "Status",
            FilterField::Gender => "Gender",
        }
    }

    /// Id of the primary selector bound to this field.
    pub fn dropdown_id(self) -> String {
        format!("{}{}", self.key(), crate::dropdown::PRIMARY_SUFFIX)
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    /// The attribute of `character` this field filters on.
    pub fn value_of(self, character: &Character) -> &str {
        match self {
            FilterField::Species => &character.species,
            FilterField::Status => &character.status,
            FilterField::Gender => &character.gender,
        }
    }
}

/// Current filter selection; an empty string means "no constraint"
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub species: String,
    pub status: String,
    pub gender: String,
}

impl FilterState {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Species => &self.species,
            FilterField::Status => &self.status,
            FilterField::Gender => &self.gender,
        }
    }

    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let slot = match field {
            FilterField::Species => &mut self.species,
            FilterField::Status => &mut self.status,
            FilterField::Gender => &mut self.gender,
        };
        *slot = value.into();
    }

    /// Non-empty fields in query order.
    pub fn active(&self) -> impl Iterator<Item = (FilterField, &str)> {
        FilterField::ALL
            .into_iter()
            .map(|field| (field, self.get(field)))
            .filter(|(_, value)| !value.is_empty())
    }

    /// Human-readable `Field: value` labels shown on card fronts.
    pub fn applied_labels(&self) -> Vec<String> {
        self.active()
            .map(|(field, value)| format!("{}: {}", field.label(), value))
            .collect()
    }
}

/// Color scheme toggled by the theme switch
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Resolved colors for one theme.
pub struct Palette {
    pub bg: Color,
    pub panel: Color,
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub accent_alt: Color,
    pub skeleton: Color,
    pub skeleton_alt: Color,
    pub error: Color,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon for the toggle: shows the theme a press switches to.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Dark => "\u{2600}\u{fe0f}",
            Theme::Light => "\u{1f319}",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                bg: Color::Rgb(243, 244, 246),
                panel: Color::Rgb(255, 255, 255),
                text: Color::Rgb(17, 24, 39),
                dim: Color::Rgb(75, 85, 99),
                accent: Color::Rgb(37, 99, 235),
                accent_alt: Color::Rgb(22, 163, 74),
                skeleton: Color::Rgb(209, 213, 219),
                skeleton_alt: Color::Rgb(229, 231, 235),
                error: Color::Rgb(239, 68, 68),
            },
            Theme::Dark => Palette {
                bg: Color::Rgb(17, 24, 39),
                panel: Color::Rgb(31, 41, 55),
                text: Color::Rgb(243, 244, 246),
                dim: Color::Rgb(209, 213, 219),
                accent: Color::Rgb(96, 165, 250),
                accent_alt: Color::Rgb(74, 222, 128),
                skeleton: Color::Rgb(55, 65, 81),
                skeleton_alt: Color::Rgb(75, 85, 99),
                error: Color::Rgb(248, 113, 113),
            },
        }
    }
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AppState {
    pub api_base: String,
    pub filter_page_cap: usize,

    pub pager: PaginationController,
    pub results: ResultsArea,
    pub dropdowns: DropdownSet,
    /// Startup option walk: Empty -> Loading -> Loaded
    pub filter_options: DataResource<FilterCollection>,

    pub theme: Theme,
    pub menu_open: bool,
    /// Row highlighted in the filter menu (index into `FilterField::ALL`)
    pub menu_row: usize,
    pub terminal_size: (u16, u16),
    pub tick: u64,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            api_base: config.api_base,
            filter_page_cap: config.filter_page_cap,
            pager: PaginationController::new(),
            results: ResultsArea::default(),
            dropdowns: DropdownSet::default(),
            filter_options: DataResource::Empty,
            theme: config.theme,
            menu_open: false,
            menu_row: 0,
            terminal_size: (120, 40),
            tick: 0,
        }
    }

    pub fn is_compact(&self) -> bool {
        self.terminal_size.0 < COMPACT_WIDTH
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl DebugState for AppState {
    fn debug_sections(&self) -> Vec<DebugSection> {
        vec![
            DebugSection::new("Pager")
                .entry("page", ron_string(&self.pager.current_page()))
                .entry("token", ron_string(&self.pager.latest_token()))
                .entry("filters", ron_string(self.pager.filters())),
            DebugSection::new("Results")
                .entry("view", ron_string(&self.results.kind_label()))
                .entry("cards", ron_string(&self.results.card_count()))
                .entry("selected", ron_string(&self.results.selected))
                .entry("prev", ron_string(&self.results.prev_enabled))
                .entry("next", ron_string(&self.results.next_enabled)),
            DebugSection::new("Filter options")
                .entry("loading", ron_string(&self.filter_options.is_loading()))
                .entry(
                    "outcome",
                    ron_string(&self.filter_options.data().map(|c| c.outcome.clone())),
                )
                .entry(
                    "pages",
                    ron_string(&self.filter_options.data().map(|c| c.pages_fetched)),
                ),
            DebugSection::new("UI")
                .entry("theme", ron_string(&self.theme))
                .entry("menu_open", ron_string(&self.menu_open))
                .entry("menu_row", ron_string(&self.menu_row))
                .entry("size", ron_string(&self.terminal_size)),
        ]
    }
}
