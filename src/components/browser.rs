use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    BaseStyle, Padding, StatusBar, StatusBarHint, StatusBarItem, StatusBarProps, StatusBarSection,
    StatusBarStyle,
};

use super::{
    CardGrid, CardGridProps, Component, FilterBar, FilterBarProps, Header, HeaderProps, Pager,
    PagerProps,
};
use crate::action::{Action, FilterSource};
use crate::filters::CollectOutcome;
use crate::pagination::PAGE_CARD_LIMIT;
use crate::state::{AppState, FilterField};

/// Props for Browser - read-only view of state
pub struct BrowserProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// Main screen: header, filters, cards and pager
#[derive(Default)]
pub struct Browser;

impl Browser {
    fn cycle_filter(state: &AppState, field: FilterField, step: isize) -> Option<Action> {
        let dropdown = state.dropdowns.primary_for(field)?;
        Some(Action::FilterChange {
            field,
            value: dropdown.cycled_value(step).to_string(),
            source: FilterSource::Bar,
        })
    }
}

impl Component<Action> for Browser {
    type Props<'a> = BrowserProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }
        let EventKind::Key(key) = event else {
            return None;
        };
        let state = props.state;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => Some(Action::PagePrev),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => Some(Action::PageNext),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::CardSelectNext),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::CardSelectPrev),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::CardFlip(state.results.selected)),
            KeyCode::Char(digit @ '1'..='6') => {
                let index = digit as usize - '1' as usize;
                (index < PAGE_CARD_LIMIT).then_some(Action::CardFlip(index))
            }
            KeyCode::Char('s') => Self::cycle_filter(state, FilterField::Species, 1),
            KeyCode::Char('S') => Self::cycle_filter(state, FilterField::Species, -1),
            KeyCode::Char('t') => Self::cycle_filter(state, FilterField::Status, 1),
            KeyCode::Char('T') => Self::cycle_filter(state, FilterField::Status, -1),
            KeyCode::Char('g') => Self::cycle_filter(state, FilterField::Gender, 1),
            KeyCode::Char('G') => Self::cycle_filter(state, FilterField::Gender, -1),
            KeyCode::Char('d') => Some(Action::UiToggleTheme),
            KeyCode::Char('m') => Some(Action::MenuToggle),
            KeyCode::Char('r') | KeyCode::F(5) => Some(Action::PageReload),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: BrowserProps<'_>) {
        let state = props.state;
        let compact = state.is_compact();
        let palette = state.theme.palette();

        let chunks = Layout::vertical([
            Constraint::Length(3),                           // Header
            Constraint::Length(if compact { 0 } else { 3 }), // Filter bar
            Constraint::Min(4),                              // Cards
            Constraint::Length(1),                           // Pager
            Constraint::Length(1),                           // Help bar
        ])
        .split(area);

        Header.render(
            frame,
            chunks[0],
            HeaderProps {
                page: state.pager.current_page(),
                theme: state.theme,
                compact,
                menu_open: state.menu_open,
            },
        );

        if !compact {
            FilterBar.render(
                frame,
                chunks[1],
                FilterBarProps {
                    dropdowns: &state.dropdowns,
                    theme: state.theme,
                    loading: state.filter_options.is_loading(),
                },
            );
        }

        CardGrid.render(
            frame,
            chunks[2],
            CardGridProps {
                results: &state.results,
                theme: state.theme,
                columns: if compact { 1 } else { 2 },
                tick: state.tick,
            },
        );

        Pager.render(
            frame,
            chunks[3],
            PagerProps {
                page: state.pager.current_page(),
                prev_enabled: state.results.prev_enabled,
                next_enabled: state.results.next_enabled,
                theme: state.theme,
            },
        );

        let mut hints = vec![
            StatusBarHint::new("\u{2190}/\u{2192}", "page"),
            StatusBarHint::new("\u{21b5}", "flip"),
        ];
        if compact {
            hints.push(StatusBarHint::new("m", "filters"));
        } else {
            hints.push(StatusBarHint::new("s/t/g", "filter"));
        }
        hints.push(StatusBarHint::new("d", "theme"));
        hints.push(StatusBarHint::new("q", "quit"));

        let status = filter_status(state);
        let status_items = [StatusBarItem::span(Span::styled(
            status,
            Style::default().fg(palette.accent_alt),
        ))];

        let style = StatusBarStyle {
            base: BaseStyle {
                border: None,
                padding: Padding::xy(1, 0),
                bg: Some(palette.bg),
                fg: Some(palette.text),
            },
            text: Style::default().fg(palette.dim),
            hint_key: Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
            hint_label: Style::default().fg(palette.dim),
            separator: Style::default().fg(palette.dim),
        };

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[4],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&hints).with_separator("  "),
                right: StatusBarSection::items(&status_items),
                style,
                is_focused: false,
            },
        );
    }
}

/// Short note on the option walk for the help bar.
pub fn filter_status(state: &AppState) -> &'static str {
    if state.filter_options.is_loading() {
        return "loading filters...";
    }
    match state.filter_options.data().map(|c| &c.outcome) {
        Some(CollectOutcome::Truncated { .. }) => "filters truncated",
        _ => "",
    }
}
