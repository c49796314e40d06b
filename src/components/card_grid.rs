use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use super::Component;
use crate::action::Action;
use crate::cards::{Card, FlipCard, SKELETON_BARS};
use crate::pagination::{ResultsArea, ResultsView};
use crate::state::{Palette, Theme};

/// Results area: skeletons, flip cards or the failure message
pub struct CardGrid;

pub struct CardGridProps<'a> {
    pub results: &'a ResultsArea,
    pub theme: Theme,
    pub columns: u16,
    pub tick: u64,
}

impl Component<Action> for CardGrid {
    type Props<'a> = CardGridProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let palette = props.theme.palette();
        match &props.results.view {
            ResultsView::Skeleton { count } => {
                for (index, cell) in grid_cells(area, *count, props.columns).into_iter().enumerate() {
                    render_skeleton(frame, cell, &palette, props.tick, index);
                }
            }
            ResultsView::Cards(cards) => {
                let cells = grid_cells(area, cards.len(), props.columns);
                for (index, (card, cell)) in cards.iter().zip(cells).enumerate() {
                    let selected = index == props.results.selected;
                    render_card(frame, cell, card, index, selected, &palette);
                }
            }
            ResultsView::Failed(message) => {
                let text = Text::from(vec![
                    Line::default(),
                    Line::from(Span::styled(
                        message.clone(),
                        Style::default()
                            .fg(palette.error)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        "press r to retry",
                        Style::default().fg(palette.dim),
                    )),
                ]);
                frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
            }
        }
    }
}

/// Split `area` into `count` cells laid out `columns` wide.
pub fn grid_cells(area: Rect, count: usize, columns: u16) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let columns = columns.max(1) as usize;
    let rows = count.div_ceil(columns);
    let row_areas = Layout::vertical(vec![Constraint::Ratio(1, rows as u32); rows]).split(area);

    let mut cells = Vec::with_capacity(count);
    for row in row_areas.iter() {
        let col_areas =
            Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns]).split(*row);
        for cell in col_areas.iter() {
            if cells.len() == count {
                break;
            }
            cells.push(*cell);
        }
    }
    cells
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    flip: &FlipCard,
    index: usize,
    selected: bool,
    palette: &Palette,
) {
    let border = if selected {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.dim)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(format!(" {} ", index + 1))
        .style(Style::default().bg(palette.panel).fg(palette.text));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if flip.flipped {
        render_back(frame, inner, &flip.card, palette);
    } else {
        render_front(frame, inner, &flip.card, palette);
    }
}

fn render_front(frame: &mut Frame, area: Rect, card: &Card, palette: &Palette) {
    let [thumb_area, text_area] =
        Layout::horizontal([Constraint::Percentage(40), Constraint::Min(1)]).areas(area);

    let thumb = Paragraph::new(vec![
        Line::default(),
        Line::from("\u{25a3}"),
        Line::from(Span::styled(
            card.front.thumbnail.clone(),
            Style::default().fg(palette.dim),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().style(Style::default().bg(palette.skeleton_alt)));
    frame.render_widget(thumb, thumb_area);

    let mut lines = vec![
        Line::from(Span::styled(
            card.front.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            card.front.id_line.clone(),
            Style::default().fg(palette.dim),
        )),
    ];
    if let Some(filters) = &card.front.filters_line {
        lines.push(Line::from(Span::styled(
            filters.clone(),
            Style::default().fg(palette.accent),
        )));
    }
    let text = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(text, text_area);
}

fn render_back(frame: &mut Frame, area: Rect, card: &Card, palette: &Palette) {
    let mut lines = vec![Line::from(Span::styled(
        card.back.name.clone(),
        Style::default()
            .fg(palette.accent_alt)
            .add_modifier(Modifier::BOLD),
    ))];
    for (label, value) in &card.back.rows {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{label}: "),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(value.clone()),
        ]));
    }
    let text = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(text, area);
}

fn render_skeleton(frame: &mut Frame, area: Rect, palette: &Palette, tick: u64, index: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.skeleton))
        .style(Style::default().bg(palette.panel));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [thumb_area, text_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Min(1)]).areas(inner);
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.skeleton)),
        thumb_area,
    );

    let bar_width = text_area.width.saturating_sub(2) as usize;
    let shimmer = (tick / 4) as usize + index;
    let mut lines = Vec::new();
    for (bar, &(num, den)) in SKELETON_BARS.iter().enumerate() {
        let color = if (shimmer + bar) % 2 == 0 {
            palette.skeleton
        } else {
            palette.skeleton_alt
        };
        let width = bar_width * num as usize / den as usize;
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "\u{2588}".repeat(width),
            Style::default().fg(color),
        )));
    }
    let bars = Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(bars, text_area);
}
