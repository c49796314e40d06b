use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::action::Action;
use crate::state::Theme;

pub const TITLE: &str = "RICK AND MORTY";
pub const HAMBURGER: &str = "\u{2261}";

pub struct Header;

pub struct HeaderProps {
    pub page: u32,
    pub theme: Theme,
    pub compact: bool,
    pub menu_open: bool,
}

impl Component<Action> for Header {
    type Props<'a> = HeaderProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let palette = props.theme.palette();
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(palette.dim))
            .style(Style::default().bg(palette.panel).fg(palette.text));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [title_area, controls_area] =
            Layout::horizontal([Constraint::Min(1), Constraint::Length(24)]).areas(inner);

        let title = Line::from(vec![
            Span::styled(
                TITLE,
                Style::default()
                    .fg(palette.accent_alt)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  page {}", props.page), Style::default().fg(palette.dim)),
        ]);
        frame.render_widget(Paragraph::new(title), title_area);

        let menu_style = if props.menu_open {
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.dim)
        };
        let mut controls = vec![
            Span::styled("d ", Style::default().fg(palette.dim)),
            Span::raw(props.theme.icon()),
        ];
        if props.compact {
            controls.push(Span::raw("   "));
            controls.push(Span::styled(format!("m {HAMBURGER}"), menu_style));
        }
        frame.render_widget(Paragraph::new(Line::from(controls).right_aligned()), controls_area);
    }
}
