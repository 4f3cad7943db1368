//! Layout components (header, progress, footer, status bar)

use super::components::render_button;
use crate::app::App;
use crate::platform::{CALL_SHORTCUT, EMAIL_SHORTCUT};
use crate::state::{
    footer_button_spans, progress_marker_spans, Step, BUTTON_HEIGHT, HEADER_HEIGHT,
    PROGRESS_HEIGHT,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Screen regions, top to bottom
pub struct AppLayout {
    pub header: Rect,
    pub progress: Rect,
    pub card: Rect,
    pub footer: Rect,
    pub contact: Rect,
    pub status: Rect,
}

/// Split the screen into the wizard's regions. Row heights must agree with
/// the click mapping in `state::ui_area`.
pub fn create_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(PROGRESS_HEIGHT),
            Constraint::Min(0),                // Step card
            Constraint::Length(BUTTON_HEIGHT), // Back / Continue
            Constraint::Length(1),             // Contact line
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        progress: chunks[1],
        card: chunks[2],
        footer: chunks[3],
        contact: chunks[4],
        status: chunks[5],
    }
}

pub fn draw_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "AION CAPITAL",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Commercial & Residential Loans",
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Cut `area` into columns at the same spans the click mapping uses
fn split_columns(area: Rect, spans: &[(u16, u16)]) -> Vec<Rect> {
    spans
        .iter()
        .map(|&(start, end)| Rect {
            x: area.x + start,
            y: area.y,
            width: end - start,
            height: area.height,
        })
        .collect()
}

/// Draw the five step markers
pub fn draw_progress(frame: &mut Frame, area: Rect, app: &App) {
    let current = app.state.step().index();
    let chunks = split_columns(area, &progress_marker_spans(area.width));

    for (step, chunk) in Step::ALL.iter().zip(chunks.iter()) {
        let index = step.index();
        let style = if index == current {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else if index < current {
            Style::default().fg(Color::Green).add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let border_color = if index <= current {
            Color::Green
        } else {
            Color::DarkGray
        };

        let marker = Paragraph::new(Span::styled(
            format!("{}. {}", index + 1, step.label()),
            style,
        ))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        );
        frame.render_widget(marker, *chunk);
    }
}

/// Label of the primary footer button
pub fn primary_label(app: &App) -> &'static str {
    if !app.state.step().is_last() {
        "Continue"
    } else if app.is_submitting() {
        "Sending…"
    } else {
        "Send Application"
    }
}

/// Draw the Back and primary buttons side by side
pub fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = split_columns(area, &footer_button_spans(area.width));

    let wizard = &app.state.wizard;
    render_button(frame, chunks[0], "Back", false, wizard.can_retreat());

    let primary_enabled = if app.state.step().is_last() {
        wizard.can_submit()
    } else {
        app.state.can_continue()
    };
    render_button(frame, chunks[1], primary_label(app), true, primary_enabled);
}

pub fn draw_contact_line(frame: &mut Frame, area: Rect, app: &App) {
    let key_style = Style::default().fg(Color::Green);
    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(&app.config.contact_email, Style::default().fg(Color::White)),
        Span::raw("  ·  "),
        Span::styled(&app.config.contact_phone, Style::default().fg(Color::White)),
        Span::raw("    "),
        Span::styled(EMAIL_SHORTCUT, key_style),
        Span::raw(":email us  "),
        Span::styled(CALL_SHORTCUT, key_style),
        Span::raw(":call us"),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Get keyboard hints for the current step
fn step_hints(app: &App) -> &'static str {
    let step = app.state.step();
    if step.is_last() {
        "Space:agree  Enter:send  Esc:back  F1-F5:jump"
    } else if step == Step::LoanType {
        "Tab:next  ←/→:choose  Enter:continue  F1-F5:jump"
    } else if app.state.is_active_field_multiline() {
        "Tab:next  Enter:newline  PgDn:continue  Esc:back"
    } else {
        "Tab:next  Enter:continue  Esc:back  F1-F5:jump"
    }
}

pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {}", step_hints(app)),
        Style::default().fg(Color::Gray),
    )];

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}
