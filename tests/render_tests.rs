//! Render tests using RenderHarness

use rickdex::{
    cards::{FlipCard, render_card},
    components::{
        Browser, BrowserProps, CardGrid, CardGridProps, Component, FilterMenu, FilterMenuProps,
    },
    pagination::{LOAD_FAILURE_MESSAGE, ResultsArea, ResultsView},
    state::{AppState, Character, FilterField, Place, Theme},
};
use tui_dispatch::testing::*;

fn rick() -> Character {
    Character {
        id: 1,
        name: "Rick Sanchez".into(),
        species: "Human".into(),
        status: "Alive".into(),
        gender: "Male".into(),
        image: "https://rickandmortyapi.com/api/character/avatar/1.jpeg".into(),
        origin: Place {
            name: "Earth (C-137)".into(),
        },
        location: Place {
            name: "Citadel of Ricks".into(),
        },
    }
}

fn render_grid(results: &ResultsArea, width: u16, height: u16) -> String {
    let mut render = RenderHarness::new(width, height);
    let mut component = CardGrid;
    render.render_to_string_plain(|frame| {
        let props = CardGridProps {
            results,
            theme: Theme::Light,
            columns: 2,
            tick: 0,
        };
        component.render(frame, frame.area(), props);
    })
}

#[test]
fn test_render_skeletons_while_loading() {
    let results = ResultsArea::default();
    let output = render_grid(&results, 80, 30);

    assert!(output.contains('\u{2588}'), "skeleton bars expected:\n{output}");
    assert!(!output.contains(LOAD_FAILURE_MESSAGE));
}

#[test]
fn test_render_exactly_six_skeleton_cells() {
    let results = ResultsArea::default();
    let output = render_grid(&results, 80, 30);

    // One top-left border corner per placeholder block
    assert_eq!(output.matches('\u{250c}').count(), 6, "six blocks expected:\n{output}");
}

#[test]
fn test_render_card_front() {
    let card = render_card(&rick(), &["Species: Human".to_string()]);
    let results = ResultsArea {
        view: ResultsView::Cards(vec![FlipCard::new(card)]),
        ..Default::default()
    };
    let output = render_grid(&results, 100, 20);

    assert!(output.contains("Rick Sanchez"), "name expected:\n{output}");
    assert!(output.contains("ID: 1"), "id line expected:\n{output}");
    assert!(output.contains("Species: Human"), "filters line expected:\n{output}");
    assert!(!output.contains("Citadel of Ricks"), "back should be hidden:\n{output}");
}

#[test]
fn test_render_card_back_when_flipped() {
    let mut flip = FlipCard::new(render_card(&rick(), &[]));
    flip.toggle();
    let results = ResultsArea {
        view: ResultsView::Cards(vec![flip]),
        ..Default::default()
    };
    let output = render_grid(&results, 100, 20);

    assert!(output.contains("Origin: Earth (C-137)"), "origin expected:\n{output}");
    assert!(output.contains("Location: Citadel of Ricks"), "location expected:\n{output}");
}

#[test]
fn test_render_failure_message() {
    let results = ResultsArea {
        view: ResultsView::Failed(LOAD_FAILURE_MESSAGE.into()),
        ..Default::default()
    };
    let output = render_grid(&results, 80, 20);

    assert!(output.contains(LOAD_FAILURE_MESSAGE), "failure expected:\n{output}");
}

#[test]
fn test_render_wide_layout_shows_filter_bar() {
    let mut render = RenderHarness::new(120, 40);
    let mut component = Browser;
    let state = AppState::default();

    let output = render.render_to_string_plain(|frame| {
        let props = BrowserProps {
            state: &state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    });

    assert!(output.contains("RICK AND MORTY"));
    assert!(output.contains("Species (s)"), "filter bar expected:\n{output}");
    assert!(output.contains("ALL"), "sentinel option expected:\n{output}");
    assert!(output.contains("Prev") && output.contains("Next"));
}

#[test]
fn test_render_filter_menu() {
    let mut render = RenderHarness::new(80, 30);
    let mut menu = FilterMenu::new();
    let mut state = AppState::default();
    state.dropdowns.fill(
        &FilterField::Gender.dropdown_id(),
        &["Female".to_string(), "Male".to_string()],
    );

    let output = render.render_to_string_plain(|frame| {
        let props = FilterMenuProps {
            dropdowns: &state.dropdowns,
            row: 2,
            theme: state.theme,
            loading: false,
            is_focused: true,
        };
        menu.render(frame, frame.area(), props);
    });

    assert!(output.contains("Filters"), "menu title expected:\n{output}");
    assert!(output.contains("Gender"), "gender row expected:\n{output}");
    assert!(output.contains("1/3"), "gender option count expected:\n{output}");
}
