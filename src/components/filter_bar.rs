use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::action::Action;
use crate::dropdown::{Dropdown, DropdownSet};
use crate::state::{FilterField, Theme};

/// Inline row of the primary selectors
pub struct FilterBar;

pub struct FilterBarProps<'a> {
    pub dropdowns: &'a DropdownSet,
    pub theme: Theme,
    pub loading: bool,
}

impl Component<Action> for FilterBar {
    type Props<'a> = FilterBarProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let palette = props.theme.palette();
        let columns = Layout::horizontal([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

        for (field, column) in FilterField::ALL.into_iter().zip(columns.iter()) {
            let key = hotkey(field);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.dim))
                .title(format!(" {} ({key}) ", field.label()))
                .style(Style::default().bg(palette.panel).fg(palette.text));
            let line = match props.dropdowns.primary_for(field) {
                Some(dropdown) => selector_line(dropdown, props.loading, props.theme),
                None => Line::from(Span::styled("-", Style::default().fg(palette.dim))),
            };
            frame.render_widget(Paragraph::new(line).block(block), *column);
        }
    }
}

/// Key cycling `field` forward; shifted cycles backward.
pub fn hotkey(field: FilterField) -> char {
    match field {
        FilterField::Species => 's',
        FilterField::Status => 't',
        FilterField::Gender => 'g',
    }
}

/// `◂ value ▸  (i/n)` for one selector.
pub fn selector_line(dropdown: &Dropdown, loading: bool, theme: Theme) -> Line<'static> {
    let palette = theme.palette();
    let mut spans = vec![
        Span::styled("\u{25c2} ", Style::default().fg(palette.dim)),
        Span::styled(
            dropdown.selected_label().to_string(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" \u{25b8}", Style::default().fg(palette.dim)),
    ];
    let suffix = if loading && dropdown.options.len() <= 1 {
        "  loading...".to_string()
    } else {
        format!("  {}/{}", dropdown.selected + 1, dropdown.options.len())
    };
    spans.push(Span::styled(suffix, Style::default().fg(palette.dim)));
    Line::from(spans)
}
