//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::{Action, FilterSource};
use crate::effect::Effect;
use crate::pagination::{LoadOutcome, PageRequest};
use crate::state::{AppState, CharacterPage, FilterField};

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        Action::Init => {
            state.filter_options = DataResource::Loading;
            let request = state.pager.load(&mut state.results);
            DispatchResult::changed_with_many(vec![
                Effect::CollectFilterOptions {
                    api_base: state.api_base.clone(),
                    max_pages: state.filter_page_cap,
                },
                load_page(state, request),
            ])
        }

        // ===== Page actions =====
        Action::PagePrev => match state.pager.prev(&mut state.results) {
            Some(request) => DispatchResult::changed_with(load_page(state, request)),
            None => DispatchResult::unchanged(),
        },

        Action::PageNext => match state.pager.next(&mut state.results) {
            Some(request) => DispatchResult::changed_with(load_page(state, request)),
            None => DispatchResult::unchanged(),
        },

        Action::PageReload => {
            let request = state.pager.load(&mut state.results);
            DispatchResult::changed_with(load_page(state, request))
        }

        Action::PageDidLoad { token, page } => complete_page(state, token, Ok(page)),

        Action::PageDidError { token, error } => complete_page(state, token, Err(error)),

        // ===== Filter actions =====
        Action::FilterChange {
            field,
            value,
            source,
        } => {
            let close_menu = source == FilterSource::Menu && state.is_compact() && state.menu_open;
            if close_menu {
                state.menu_open = false;
            }
            // Re-selecting the current value is not a change
            if state.pager.filters().get(field) == value {
                return changed_if(close_menu);
            }
            state.dropdowns.select(field, &value);
            let request = state.pager.set_filter(field, &value, &mut state.results);
            DispatchResult::changed_with(load_page(state, request))
        }

        Action::FilterOptionsDidLoad(collection) => {
            for field in FilterField::ALL {
                state
                    .dropdowns
                    .fill(&field.dropdown_id(), collection.options.values(field));
            }
            state.filter_options = DataResource::Loaded(collection);
            DispatchResult::changed()
        }

        // ===== Card actions =====
        Action::CardSelectNext => changed_if(state.results.move_selection(1)),

        Action::CardSelectPrev => changed_if(state.results.move_selection(-1)),

        Action::CardFlip(index) => {
            if state.results.toggle_flip(index) {
                state.results.selected = index;
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // ===== Menu actions =====
        Action::MenuToggle => {
            state.menu_open = !state.menu_open;
            if state.menu_open {
                state.menu_row = 0;
            }
            DispatchResult::changed()
        }

        Action::MenuMove(delta) => {
            if !state.menu_open {
                return DispatchResult::unchanged();
            }
            let last = FilterField::ALL.len() as i16 - 1;
            let row = (state.menu_row as i16 + delta).clamp(0, last) as usize;
            if row == state.menu_row {
                DispatchResult::unchanged()
            } else {
                state.menu_row = row;
                DispatchResult::changed()
            }
        }

        // ===== UI actions =====
        Action::UiToggleTheme => {
            state.theme = state.theme.toggle();
            DispatchResult::changed()
        }

        Action::UiTerminalResize(width, height) => {
            state.terminal_size = (width, height);
            DispatchResult::changed()
        }

        // ===== Global actions =====
        Action::Tick => {
            if state.results.is_loading() {
                state.tick = state.tick.wrapping_add(1);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

fn load_page(state: &AppState, request: PageRequest) -> Effect {
    Effect::LoadPage {
        api_base: state.api_base.clone(),
        request,
    }
}

fn complete_page(
    state: &mut AppState,
    token: u64,
    result: Result<CharacterPage, String>,
) -> DispatchResult<Effect> {
    match state.pager.complete(token, result, &mut state.results) {
        LoadOutcome::Stale => {
            tracing::debug!(
                token,
                latest = state.pager.latest_token(),
                "dropping stale page response"
            );
            DispatchResult::unchanged()
        }
        LoadOutcome::Rendered | LoadOutcome::Failed => {
            state.tick = 0;
            DispatchResult::changed()
        }
    }
}

fn changed_if(changed: bool) -> DispatchResult<Effect> {
    if changed {
        DispatchResult::changed()
    } else {
        DispatchResult::unchanged()
    }
}
