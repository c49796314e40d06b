use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    BaseStyle, Modal, ModalBehavior, ModalProps, ModalStyle, Padding, centered_rect,
};

use super::Component;
use super::filter_bar::selector_line;
use crate::action::{Action, FilterSource};
use crate::dropdown::DropdownSet;
use crate::state::{FilterField, Theme};

const MENU_WIDTH: u16 = 48;
const MENU_HEIGHT: u16 = 12;

/// Compact-layout menu listing the mirrored selectors
pub struct FilterMenu {
    modal: Modal,
}

pub struct FilterMenuProps<'a> {
    pub dropdowns: &'a DropdownSet,
    pub row: usize,
    pub theme: Theme,
    pub loading: bool,
    pub is_focused: bool,
}

impl Default for FilterMenu {
    fn default() -> Self {
        Self {
            modal: Modal::new(),
        }
    }
}

impl FilterMenu {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component<Action> for FilterMenu {
    type Props<'a> = FilterMenuProps<'a>;

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

        let step = match key.code {
            KeyCode::Esc | KeyCode::Char('m') => return Some(Action::MenuToggle),
            KeyCode::Char('q') => return Some(Action::Quit),
            KeyCode::Up | KeyCode::Char('k') => return Some(Action::MenuMove(-1)),
            KeyCode::Down | KeyCode::Char('j') => return Some(Action::MenuMove(1)),
            KeyCode::Left | KeyCode::Char('h') => -1,
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Enter => 1,
            _ => return None,
        };

        let field = FilterField::ALL[props.row.min(FilterField::ALL.len() - 1)];
        let Some(dropdown) = props.dropdowns.menu_dropdown(field) else {
            return None;
        };
        Some(Action::FilterChange {
            field,
            value: dropdown.cycled_value(step).to_string(),
            source: FilterSource::Menu,
        })
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let palette = props.theme.palette();
        let modal_area = centered_rect(MENU_WIDTH, MENU_HEIGHT, area);

        let mut render_content = |frame: &mut Frame, content_area: Rect| {
            let rows = Layout::vertical([
                Constraint::Length(2), // Title
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Min(1), // Hints
            ])
            .split(content_area);

            let title = Line::from(Span::styled(
                "Filters",
                Style::default()
                    .fg(palette.accent_alt)
                    .add_modifier(Modifier::BOLD),
            ));
            frame.render_widget(Paragraph::new(title), rows[0]);

            for (index, field) in FilterField::ALL.into_iter().enumerate() {
                let active = index == props.row;
                let label_style = if active {
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(palette.text)
                };
                let mut spans = vec![Span::styled(format!(" {:<8}", field.label()), label_style)];
                spans.push(Span::raw(" "));
                if let Some(dropdown) = props.dropdowns.menu_dropdown(field) {
                    spans.extend(selector_line(dropdown, props.loading, props.theme).spans);
                }
                frame.render_widget(Paragraph::new(Line::from(spans)), rows[index + 1]);
            }

            let hints = Line::from(Span::styled(
                "\u{2191}/\u{2193} field  \u{2190}/\u{2192} value  m close",
                Style::default().fg(palette.dim),
            ));
            frame.render_widget(Paragraph::new(hints), rows[4]);
        };

        self.modal.render(
            frame,
            area,
            ModalProps {
                is_open: true,
                is_focused: props.is_focused,
                area: modal_area,
                style: ModalStyle {
                    base: BaseStyle {
                        bg: Some(palette.panel),
                        padding: Padding::xy(2, 1),
                        border: None,
                        fg: Some(palette.text),
                    },
                    ..Default::default()
                },
                behavior: ModalBehavior::default(),
                on_close: || Action::MenuToggle,
                render_content: &mut render_content,
            },
        );
    }
}
