//! Effects - side effects declared by the reducer

use crate::pagination::PageRequest;

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Fetch one listing page
    LoadPage { api_base: String, request: PageRequest },
    /// Walk the listing to build filter options
    CollectFilterOptions { api_base: String, max_pages: usize },
}
