//! Application state definitions

use super::form_data::{FieldId, FormData};
use super::step_forms::{step_fields, Form, StepForm};
use super::wizard::{Step, WizardState};
use std::collections::VecDeque;

/// Tone of a notice shown to the applicant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
    /// The action was refused and needs the applicant's attention first
    Blocking,
}

/// One-shot acknowledgment shown in a dialog until dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Failure,
            message: message.into(),
        }
    }

    pub fn blocking(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Blocking,
            message: message.into(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "Sent",
            NoticeKind::Failure => "Not Sent",
            NoticeKind::Blocking => "Action Needed",
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Wizard
    pub form: FormData,
    pub wizard: WizardState,

    // Focus within the current step
    pub active_form_field: usize,

    // Pending notices, oldest first
    notices: VecDeque<Notice>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            form: FormData::new(),
            wizard: WizardState::new(),
            active_form_field: 0,
            notices: VecDeque::new(),
        }
    }

    pub fn step(&self) -> Step {
        self.wizard.step()
    }

    /// Editor over the current step's fields
    pub fn step_form(&mut self) -> StepForm<'_> {
        StepForm::new(self.wizard.step(), &mut self.form, self.active_form_field)
    }

    /// Field with keyboard focus, if the step has fields
    pub fn active_field(&self) -> Option<FieldId> {
        step_fields(self.step())
            .get(self.active_form_field)
            .copied()
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.active_field().is_some_and(|f| f.is_multiline())
    }

    pub fn next_form_field(&mut self) {
        let mut form = self.step_form();
        form.next_field();
        self.active_form_field = form.active_field();
    }

    pub fn prev_form_field(&mut self) {
        let mut form = self.step_form();
        form.prev_field();
        self.active_form_field = form.active_field();
    }

    pub fn form_input_char(&mut self, c: char) {
        self.step_form().input_char(c);
    }

    pub fn form_backspace(&mut self) {
        self.step_form().backspace();
    }

    pub fn form_cycle_choice(&mut self, forward: bool) {
        self.step_form().cycle_choice(forward);
    }

    pub fn can_continue(&self) -> bool {
        self.wizard.can_continue(&self.form)
    }

    pub fn advance(&mut self) -> bool {
        let moved = self.wizard.advance(&self.form);
        if moved {
            self.active_form_field = 0;
        }
        moved
    }

    pub fn retreat(&mut self) -> bool {
        let moved = self.wizard.retreat();
        if moved {
            self.active_form_field = 0;
        }
        moved
    }

    pub fn jump_to(&mut self, index: usize) -> bool {
        let moved = self.wizard.jump_to(index);
        if moved {
            self.active_form_field = 0;
        }
        moved
    }

    pub fn toggle_consent(&mut self) {
        self.wizard.consent = !self.wizard.consent;
    }

    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push_back(notice);
    }

    pub fn has_notices(&self) -> bool {
        !self.notices.is_empty()
    }

    /// Notice currently on screen
    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    pub fn dismiss_notice(&mut self) {
        self.notices.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_fresh() {
        let state = AppState::new();
        assert_eq!(state.step(), Step::LoanType);
        assert_eq!(state.form, FormData::new());
        assert!(!state.wizard.consent);
        assert!(!state.wizard.submitting);
        assert!(!state.has_notices());
    }

    #[test]
    fn test_typing_edits_active_field() {
        let mut state = AppState::new();
        state.next_form_field();
        assert_eq!(state.active_field(), Some(FieldId::AmountDesired));
        for c in "50000".chars() {
            state.form_input_char(c);
        }
        assert_eq!(state.form.amount_desired, "50,000");
    }

    #[test]
    fn test_field_focus_resets_on_step_change() {
        let mut state = AppState::new();
        state.form_cycle_choice(true);
        state.next_form_field();
        assert!(state.advance());
        assert_eq!(state.active_field(), Some(FieldId::FirstName));
    }

    #[test]
    fn test_blocked_advance_keeps_focus() {
        let mut state = AppState::new();
        state.next_form_field();
        assert!(!state.advance());
        assert_eq!(state.active_form_field, 1);
    }

    #[test]
    fn test_multiline_detection() {
        let mut state = AppState::new();
        state.jump_to(3);
        assert!(!state.is_active_field_multiline());
        state.next_form_field();
        assert!(state.is_active_field_multiline());
    }

    #[test]
    fn test_toggle_consent() {
        let mut state = AppState::new();
        state.toggle_consent();
        assert!(state.wizard.consent);
        state.toggle_consent();
        assert!(!state.wizard.consent);
    }

    #[test]
    fn test_notices_are_fifo() {
        let mut state = AppState::new();
        state.push_notice(Notice::failure("first"));
        state.push_notice(Notice::success("second"));
        assert_eq!(state.current_notice().map(|n| n.message.as_str()), Some("first"));
        state.dismiss_notice();
        assert_eq!(
            state.current_notice().map(|n| n.kind),
            Some(NoticeKind::Success)
        );
        state.dismiss_notice();
        assert!(!state.has_notices());
        state.dismiss_notice();
        assert!(state.current_notice().is_none());
    }

    #[test]
    fn test_notice_titles() {
        assert_eq!(Notice::success("x").title(), "Sent");
        assert_eq!(Notice::failure("x").title(), "Not Sent");
        assert_eq!(Notice::blocking("x").title(), "Action Needed");
    }
}
