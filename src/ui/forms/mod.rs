//! Step cards: the inputs of the current wizard step

mod field_renderer;
mod review;

use crate::app::App;
use crate::state::{step_fields, FieldId, Step};
use field_renderer::draw_field;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Rows a field occupies, borders included
fn field_constraint(field: FieldId) -> Constraint {
    if field.is_multiline() {
        Constraint::Min(5)
    } else {
        Constraint::Length(3)
    }
}

/// Draw the card for the current step
pub fn draw_step(frame: &mut Frame, area: Rect, app: &App) {
    let step = app.state.step();
    let title = format!(
        " Step {} of {} · {} ",
        step.index() + 1,
        Step::ALL.len(),
        step.label()
    );
    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if step.is_last() {
        review::draw(frame, inner, app);
        return;
    }

    let fields = step_fields(step);
    let mut constraints: Vec<Constraint> = fields.iter().copied().map(field_constraint).collect();
    // Soak up the remaining rows when nothing stretches
    if !fields.iter().any(|f| f.is_multiline()) {
        constraints.push(Constraint::Min(0));
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let active = app.state.active_field();
    for (field, chunk) in fields.iter().zip(chunks.iter()) {
        draw_field(
            frame,
            *chunk,
            *field,
            app.state.form.get(*field),
            active == Some(*field),
        );
    }
}
