//! UI area positioning for mouse event handling
//!
//! The screen is a fixed vertical stack, so click targets can be resolved
//! from the terminal size alone.
//!
//! # Layout
//!
//! ```text
//! Row 0-3:   Header (title and subtitle)
//! Row 4-6:   Progress markers (one column per step)
//! Row 7+:    Step card
//! Bottom-4:  Footer buttons (Back | Continue), 3 rows
//! Bottom-1:  Contact line
//! Bottom:    Status bar
//! ```

use super::wizard::Step;

/// Height of the header (with borders)
pub const HEADER_HEIGHT: u16 = 4;

/// Height of the progress marker row (with borders)
pub const PROGRESS_HEIGHT: u16 = 3;

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Rows below the footer buttons: contact line + status bar
pub const BOTTOM_BAR_HEIGHT: u16 = 2;

/// Clickable region of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiArea {
    Header,
    Progress,
    Card,
    Footer,
    BottomBar,
}

/// Footer button under the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterButton {
    Back,
    /// Continue, or Send Application on the last step
    Primary,
}

impl UiArea {
    /// Area containing an absolute row, for a terminal of `height` rows
    pub fn at_row(row: u16, height: u16) -> Self {
        let footer_start = height.saturating_sub(BOTTOM_BAR_HEIGHT + BUTTON_HEIGHT);
        let bottom_start = height.saturating_sub(BOTTOM_BAR_HEIGHT);
        if row < HEADER_HEIGHT {
            UiArea::Header
        } else if row < HEADER_HEIGHT + PROGRESS_HEIGHT {
            UiArea::Progress
        } else if row >= bottom_start {
            UiArea::BottomBar
        } else if row >= footer_start {
            UiArea::Footer
        } else {
            UiArea::Card
        }
    }
}

/// Equal column spans `[start, end)` tiling `width` exactly. The renderer
/// lays out markers and buttons with these same spans, so hit testing never
/// disagrees with what is drawn.
pub fn column_spans(width: u16, count: usize) -> Vec<(u16, u16)> {
    let width = u32::from(width);
    let count = count as u32;
    (0..count)
        .map(|i| ((i * width / count) as u16, ((i + 1) * width / count) as u16))
        .collect()
}

pub fn progress_marker_spans(width: u16) -> Vec<(u16, u16)> {
    column_spans(width, Step::ALL.len())
}

/// Back on the left, primary on the right
pub fn footer_button_spans(width: u16) -> Vec<(u16, u16)> {
    column_spans(width, 2)
}

fn span_index(spans: &[(u16, u16)], column: u16) -> Option<usize> {
    spans
        .iter()
        .position(|&(start, end)| start <= column && column < end)
}

/// Progress marker under a click
pub fn progress_marker_at(column: u16, row: u16, width: u16, height: u16) -> Option<Step> {
    if UiArea::at_row(row, height) != UiArea::Progress {
        return None;
    }
    span_index(&progress_marker_spans(width), column).and_then(Step::from_index)
}

/// Footer button under a click
pub fn footer_button_at(column: u16, row: u16, width: u16, height: u16) -> Option<FooterButton> {
    if UiArea::at_row(row, height) != UiArea::Footer {
        return None;
    }
    match span_index(&footer_button_spans(width), column)? {
        0 => Some(FooterButton::Back),
        _ => Some(FooterButton::Primary),
    }
}
