//! Actions: user intents and async results

use serde::{Deserialize, Serialize};

use crate::filters::FilterCollection;
use crate::state::{CharacterPage, FilterField};

/// Which selector produced a filter change
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterSource {
    /// Inline filter bar
    Bar,
    /// Compact filter menu
    Menu,
}

#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[action(infer_categories)]
pub enum Action {
    /// Startup: collect filter options and load page 1
    Init,

    // ===== Page category =====
    PagePrev,
    PageNext,
    /// Re-issue the current request
    PageReload,
    PageDidLoad { token: u64, page: CharacterPage },
    PageDidError { token: u64, error: String },

    // ===== Filter category =====
    FilterChange {
        field: FilterField,
        value: String,
        source: FilterSource,
    },
    FilterOptionsDidLoad(FilterCollection),

    // ===== Card category =====
    CardSelectNext,
    CardSelectPrev,
    CardFlip(usize),

    // ===== Menu category =====
    MenuToggle,
    MenuMove(i16),

    // ===== UI category =====
    UiToggleTheme,
    UiTerminalResize(u16, u16),

    /// Skeleton shimmer tick
    Tick,
    Quit,
}
