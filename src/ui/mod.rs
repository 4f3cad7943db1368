//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let regions = layout::create_layout(frame.area());

    layout::draw_header(frame, regions.header);
    layout::draw_progress(frame, regions.progress, app);
    forms::draw_step(frame, regions.card, app);
    layout::draw_footer(frame, regions.footer, app);
    layout::draw_contact_line(frame, regions.contact, app);
    layout::draw_status_bar(frame, regions.status, app);

    // Notices sit on top of everything
    if let Some(notice) = app.state.current_notice() {
        components::render_notice_dialog(frame, notice);
    }
}
