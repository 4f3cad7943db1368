//! Application state module

mod app_state;
mod form_data;
mod step_forms;
mod ui_area;
mod validation;
mod wizard;

pub use app_state::*;
pub use form_data::*;
pub use step_forms::*;
pub use ui_area::*;
pub use wizard::*;
