//! Button component for TUI

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render a bordered footer button.
///
/// The primary button is drawn in the accent color while enabled; disabled
/// buttons are grayed out regardless.
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    is_primary: bool,
    is_enabled: bool,
) {
    let (border_style, text_style) = match (is_enabled, is_primary) {
        (false, _) => (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::DarkGray),
        ),
        (true, true) => (
            Style::default().fg(Color::Green),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        (true, false) => (Style::default().fg(Color::Gray), Style::default()),
    };

    let paragraph = Paragraph::new(format!(" {content} "))
        .style(text_style)
        .alignment(Alignment::Center);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}
