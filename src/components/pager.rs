use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::state::Theme;

pub const PREV_LABEL: &str = "\u{25c0} Prev";
pub const NEXT_LABEL: &str = "Next \u{25b6}";

/// Prev/next buttons around the page number
pub struct Pager;

pub struct PagerProps {
    pub page: u32,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub theme: Theme,
}

impl Component<Action> for Pager {
    type Props<'a> = PagerProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let palette = props.theme.palette();
        let button = |enabled: bool| {
            if enabled {
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(palette.dim)
                    .add_modifier(Modifier::DIM | Modifier::CROSSED_OUT)
            }
        };

        let line = Line::from(vec![
            Span::styled(PREV_LABEL, button(props.prev_enabled)),
            Span::styled(
                format!("   Page {}   ", props.page),
                Style::default().fg(palette.text),
            ),
            Span::styled(NEXT_LABEL, button(props.next_enabled)),
        ])
        .centered();
        frame.render_widget(
            Paragraph::new(line).style(Style::default().bg(palette.bg)),
            area,
        );
    }
}
