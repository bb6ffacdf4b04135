//! Rendering for Loupe's single-screen layout: query input, suggestion
//! popup, results list, stats/pagination rows, and a key-hint footer.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::Position,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::logic::paging::page_window;
use crate::state::{Focus, Hit, SessionState};
use crate::theme::{Theme, theme};

/// Render one frame of the interface.
pub fn ui(f: &mut Frame, session: &mut SessionState) {
    let th = theme();
    let area = f.area();

    let bg = Block::default().style(Style::default().bg(th.base));
    f.render_widget(bg, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    draw_input(f, session, &th, rows[0]);
    draw_results(f, session, &th, rows[1]);
    draw_status(f, session, &th, rows[2]);
    draw_pagination(f, session, &th, rows[3]);
    draw_footer(f, &th, rows[4]);

    if session.focus == Focus::Input && !session.suggestions.is_empty() {
        draw_suggestions(f, session, &th, rows[0], rows[1]);
    }
}

fn draw_input(f: &mut Frame, session: &SessionState, th: &Theme, area: Rect) {
    let focused = session.focus == Focus::Input;
    let input_line = Line::from(vec![
        Span::styled(
            "> ",
            Style::default().fg(if focused { th.accent } else { th.overlay }),
        ),
        Span::styled(
            session.query.clone(),
            Style::default().fg(if focused { th.text } else { th.subtext }),
        ),
    ]);
    let block = Block::default()
        .title(Span::styled(
            "Loupe",
            Style::default().fg(if focused { th.accent } else { th.overlay }),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { th.accent } else { th.surface }));
    f.render_widget(Paragraph::new(input_line).block(block), area);

    if focused {
        #[allow(clippy::cast_possible_truncation)]
        let x = area.x + 1 + 2 + session.query.as_str().width().min(u16::MAX as usize) as u16;
        f.set_cursor_position(Position::new(x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

/// Lines for one suggestion row: the highlighted title, and a dimmed
/// description line when the hit carries one.
fn suggestion_lines(hit: &Hit, th: &Theme, active: bool) -> Vec<Line<'static>> {
    let base = if active {
        Style::default().fg(th.base).bg(th.accent)
    } else {
        Style::default().fg(th.text)
    };
    let accent = if active {
        base.add_modifier(Modifier::BOLD)
    } else {
        base.fg(th.highlight)
    };
    let mut title = crate::logic::markup::highlight_spans(hit.display_title(), base, accent);
    if title.is_empty() {
        title.push(Span::styled(hit.url.clone(), base));
    }
    let mut lines = vec![Line::from(title)];

    let desc_base = if active { base } else { base.fg(th.subtext) };
    let desc = crate::logic::markup::highlight_spans(hit.display_description(), desc_base, accent);
    if !desc.is_empty() {
        let mut segs = vec![Span::styled("  ".to_string(), desc_base)];
        segs.extend(desc);
        lines.push(Line::from(segs));
    }
    lines
}

fn draw_suggestions(
    f: &mut Frame,
    session: &SessionState,
    th: &Theme,
    input_area: Rect,
    below: Rect,
) {
    let mut total_lines = 0usize;
    let items: Vec<ListItem> = session
        .suggestions
        .iter()
        .enumerate()
        .map(|(i, hit)| {
            let active = session.active_suggestion == Some(i);
            let row = if active {
                Style::default().fg(th.base).bg(th.accent)
            } else {
                Style::default().fg(th.text)
            };
            let lines = suggestion_lines(hit, th, active);
            total_lines += lines.len();
            ListItem::new(lines).style(row)
        })
        .collect();

    #[allow(clippy::cast_possible_truncation)]
    let height = (total_lines.min(u16::MAX as usize) as u16 + 2).min(below.height);
    let width = input_area.width.saturating_sub(4).clamp(20, 70);
    let popup = Rect {
        x: input_area.x + 2,
        y: below.y,
        width,
        height,
    };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.overlay))
            .style(Style::default().bg(th.base)),
    );
    f.render_widget(Clear, popup);
    f.render_widget(list, popup);
}

fn draw_results(f: &mut Frame, session: &mut SessionState, th: &Theme, area: Rect) {
    let focused = session.focus == Focus::Results;
    let items: Vec<ListItem> = session
        .results
        .iter()
        .map(|hit| {
            let title_base = Style::default().fg(th.text).add_modifier(Modifier::BOLD);
            let title_accent = Style::default().fg(th.highlight).add_modifier(Modifier::BOLD);
            let mut title =
                crate::logic::markup::highlight_spans(hit.display_title(), title_base, title_accent);
            if title.is_empty() {
                title.push(Span::styled("Untitled", title_base));
            }

            let mut lines = vec![
                Line::from(title),
                Line::from(vec![
                    Span::styled(
                        format!("  {}", crate::util::host_label(&hit.url)),
                        Style::default().fg(th.green),
                    ),
                    Span::styled(format!("  {}", hit.url), Style::default().fg(th.subtext)),
                ]),
            ];
            let desc_base = Style::default().fg(th.subtext);
            let desc_accent = Style::default().fg(th.highlight);
            let desc =
                crate::logic::markup::highlight_spans(hit.display_description(), desc_base, desc_accent);
            if !desc.is_empty() {
                let mut segs = vec![Span::raw("  ")];
                segs.extend(desc);
                lines.push(Line::from(segs));
            }
            ListItem::new(lines)
        })
        .collect();

    let title = format!("Results ({})", session.results.len());
    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(
            Block::default()
                .title(Span::styled(
                    title,
                    Style::default().fg(if focused { th.accent } else { th.overlay }),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(if focused { th.accent } else { th.surface })),
        )
        .highlight_style(Style::default().bg(th.surface))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, &mut session.list_state);
}

fn draw_status(f: &mut Frame, session: &SessionState, th: &Theme, area: Rect) {
    let mut spans = Vec::new();
    if session.loading {
        spans.push(Span::styled("Searching… ", Style::default().fg(th.yellow)));
    }
    if !session.stats.is_empty() {
        spans.push(Span::styled(
            session.stats.clone(),
            Style::default().fg(th.subtext),
        ));
    }
    let total_pages = session.total_pages();
    if total_pages > 0 {
        spans.push(Span::styled(
            format!("  ·  page {}/{}", session.page + 1, total_pages),
            Style::default().fg(th.overlay),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_pagination(f: &mut Frame, session: &SessionState, th: &Theme, area: Rect) {
    let total_pages = session.total_pages();
    let mut spans: Vec<Span> = Vec::new();
    if total_pages > 0 {
        for p in page_window(session.page, total_pages) {
            let label = format!(" {} ", p + 1);
            if p == session.page {
                spans.push(Span::styled(
                    label,
                    Style::default()
                        .fg(th.base)
                        .bg(th.accent)
                        .add_modifier(Modifier::BOLD),
                ));
            } else {
                spans.push(Span::styled(label, Style::default().fg(th.subtext)));
            }
            spans.push(Span::raw(" "));
        }
    } else if session.has_more {
        spans.push(Span::styled(
            " Load more (→) ",
            Style::default().fg(th.accent),
        ));
    } else if !session.results.is_empty() {
        spans.push(Span::styled(
            "No more results",
            Style::default().fg(th.overlay),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_footer(f: &mut Frame, th: &Theme, area: Rect) {
    let hints = Line::from(Span::styled(
        " Tab panes · ↑/↓ move · Enter open/search · ←/→ page · 1-7 jump · Esc clear · Ctrl+C quit",
        Style::default().fg(th.overlay),
    ));
    f.render_widget(Paragraph::new(hints), area);
}
