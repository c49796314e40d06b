pub mod browser;
pub mod card_grid;
pub mod filter_bar;
pub mod filter_menu;
pub mod header;
pub mod pager;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use browser::{Browser, BrowserProps};
pub use card_grid::{CardGrid, CardGridProps};
pub use filter_bar::{FilterBar, FilterBarProps};
pub use filter_menu::{FilterMenu, FilterMenuProps};
pub use header::{Header, HeaderProps};
pub use pager::{Pager, PagerProps};
