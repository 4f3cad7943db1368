//! Notice dialog component

use super::base::{render_dialog, DialogConfig};
use crate::state::{Notice, NoticeKind};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

fn notice_color(kind: NoticeKind) -> Color {
    match kind {
        NoticeKind::Success => Color::Green,
        NoticeKind::Failure => Color::Red,
        NoticeKind::Blocking => Color::Yellow,
    }
}

/// Render a notice overlay centered on the screen
pub fn render_notice_dialog(frame: &mut Frame, notice: &Notice) {
    let key_style = Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to dismiss"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: notice.title(),
            color: notice_color(notice.kind),
            message: &notice.message,
            hint: Some(hint),
            ..Default::default()
        },
    );
}
