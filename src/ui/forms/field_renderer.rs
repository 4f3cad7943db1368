//! Field rendering utilities for forms

use crate::state::{FieldId, FieldKind, LoanKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CURSOR: &str = "▌";

fn cursor_span() -> Span<'static> {
    Span::styled(CURSOR, Style::default().fg(Color::Green))
}

fn placeholder_span(field: FieldId) -> Span<'static> {
    Span::styled(
        field.placeholder().unwrap_or("(empty)"),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )
}

/// Lines for a choice field: the selected label between cycling arrows
fn choice_line(field: FieldId, value: &str, is_active: bool) -> Line<'static> {
    let arrow_style = if is_active {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let label = match LoanKind::from_value(value) {
        Some(kind) => Span::styled(kind.label(), Style::default().fg(Color::White)),
        None => placeholder_span(field),
    };
    Line::from(vec![
        Span::styled("◂ ", arrow_style),
        label,
        Span::styled(" ▸", arrow_style),
    ])
}

fn text_lines(field: FieldId, value: &str, is_active: bool) -> Vec<Line<'static>> {
    if value.is_empty() {
        let mut spans = Vec::new();
        if is_active {
            spans.push(cursor_span());
        }
        spans.push(placeholder_span(field));
        return vec![Line::from(spans)];
    }

    let value_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    // split('\n') rather than lines() so a trailing newline shows the cursor
    // on the new empty line
    let mut lines: Vec<Line> = value
        .split('\n')
        .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
        .collect();
    if is_active {
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor_span());
        }
    }
    lines
}

/// Draw one input of the current step
pub fn draw_field(frame: &mut Frame, area: Rect, field: FieldId, value: &str, is_active: bool) {
    let border_style = if is_active {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let content = match field.kind() {
        FieldKind::Choice => Paragraph::new(choice_line(field, value, is_active)),
        _ => Paragraph::new(text_lines(field, value, is_active)),
    };

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
