//! Wizard step state machine
//!
//! Five ordered steps, starting at Loan Type. Moving forward through
//! [`WizardState::advance`] is gated by the current step's validation rule;
//! moving back is always allowed. [`WizardState::jump_to`] is the progress
//! marker shortcut and is deliberately ungated, so it can move forward past
//! an invalid step.

use super::form_data::FormData;
use super::validation::step_is_valid;

/// One page of the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Step {
    #[default]
    LoanType,
    Contact,
    Business,
    LoanDetails,
    Review,
}

impl Step {
    pub const ALL: [Step; 5] = [
        Step::LoanType,
        Step::Contact,
        Step::Business,
        Step::LoanDetails,
        Step::Review,
    ];

    pub const LAST_INDEX: usize = Self::ALL.len() - 1;

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::LoanType => "type",
            Self::Contact => "contact",
            Self::Business => "business",
            Self::LoanDetails => "loan",
            Self::Review => "review",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::LoanType => "Loan Type",
            Self::Contact => "Contact",
            Self::Business => "Business",
            Self::LoanDetails => "Loan Details",
            Self::Review => "Review & Send",
        }
    }

    pub fn is_first(&self) -> bool {
        self.index() == 0
    }

    pub fn is_last(&self) -> bool {
        self.index() == Self::LAST_INDEX
    }
}

/// Wizard position plus the two flags that gate submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardState {
    step: Step,
    /// Applicant ticked the Privacy & Terms box
    pub consent: bool,
    /// A submission is outstanding
    pub submitting: bool,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    /// Whether the current step's rule holds
    pub fn can_continue(&self, form: &FormData) -> bool {
        step_is_valid(self.step, form, self.consent)
    }

    /// Whether the Send Application affordance is enabled
    pub fn can_submit(&self) -> bool {
        self.step.is_last() && self.consent && !self.submitting
    }

    pub fn can_retreat(&self) -> bool {
        !self.step.is_first()
    }

    /// Move one step forward if the current step is valid. Returns whether the step changed.
    pub fn advance(&mut self, form: &FormData) -> bool {
        if self.step.is_last() || !self.can_continue(form) {
            tracing::debug!("advance blocked on step {:?}", self.step);
            return false;
        }
        self.move_to(self.step.index() + 1)
    }

    /// Move one step back. Returns whether the step changed.
    pub fn retreat(&mut self) -> bool {
        if self.step.is_first() {
            return false;
        }
        self.move_to(self.step.index() - 1)
    }

    /// Jump straight to a step without consulting validation.
    /// Out-of-range indices are ignored.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index > Step::LAST_INDEX {
            tracing::debug!("ignoring jump to out-of-range step {index}");
            return false;
        }
        self.move_to(index)
    }

    fn move_to(&mut self, index: usize) -> bool {
        match Step::from_index(index) {
            Some(step) if step != self.step => {
                tracing::debug!("step {} -> {}", self.step.key(), step.key());
                self.step = step;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> FormData {
        FormData {
            loan_kind: "working-capital".to_string(),
            amount_desired: "50,000".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            business_name: "Engines".to_string(),
            credit_score_range: "720".to_string(),
            ..Default::default()
        }
    }

    mod step {
        use super::*;

        #[test]
        fn test_order_and_labels() {
            let labels: Vec<_> = Step::ALL.iter().map(|s| s.label()).collect();
            assert_eq!(
                labels,
                ["Loan Type", "Contact", "Business", "Loan Details", "Review & Send"]
            );
            assert_eq!(Step::ALL.len(), 5);
        }

        #[test]
        fn test_index_round_trip() {
            for (i, step) in Step::ALL.iter().enumerate() {
                assert_eq!(step.index(), i);
                assert_eq!(Step::from_index(i), Some(*step));
            }
            assert_eq!(Step::from_index(5), None);
        }

        #[test]
        fn test_first_and_last() {
            assert!(Step::LoanType.is_first());
            assert!(Step::Review.is_last());
            assert!(!Step::Business.is_first());
            assert!(!Step::Business.is_last());
        }
    }

    mod navigation {
        use super::*;

        #[test]
        fn test_starts_at_loan_type() {
            let wizard = WizardState::new();
            assert_eq!(wizard.step(), Step::LoanType);
            assert!(!wizard.consent);
            assert!(!wizard.submitting);
        }

        #[test]
        fn test_advance_blocked_by_invalid_step() {
            let mut wizard = WizardState::new();
            let form = FormData::new();
            assert!(!wizard.advance(&form));
            assert_eq!(wizard.step(), Step::LoanType);
        }

        #[test]
        fn test_advance_walks_to_review() {
            let mut wizard = WizardState::new();
            let form = valid_form();
            for expected in &Step::ALL[1..] {
                assert!(wizard.advance(&form));
                assert_eq!(wizard.step(), *expected);
            }
        }

        #[test]
        fn test_advance_stops_at_review_even_with_consent() {
            let mut wizard = WizardState::new();
            let form = valid_form();
            wizard.jump_to(4);
            wizard.consent = true;
            assert!(!wizard.advance(&form));
            assert_eq!(wizard.step(), Step::Review);
        }

        #[test]
        fn test_retreat_ignores_validity() {
            let mut wizard = WizardState::new();
            wizard.jump_to(3);
            let form = FormData::new();
            assert!(!wizard.can_continue(&form));
            assert!(wizard.retreat());
            assert_eq!(wizard.step(), Step::Business);
        }

        #[test]
        fn test_retreat_at_first_step_is_noop() {
            let mut wizard = WizardState::new();
            assert!(!wizard.can_retreat());
            assert!(!wizard.retreat());
            assert_eq!(wizard.step(), Step::LoanType);
        }

        #[test]
        fn test_jump_forward_bypasses_validation() {
            let mut wizard = WizardState::new();
            let form = FormData::new();
            assert!(!wizard.can_continue(&form));
            assert!(wizard.jump_to(4));
            assert_eq!(wizard.step(), Step::Review);
        }

        #[test]
        fn test_jump_to_same_step_reports_no_change() {
            let mut wizard = WizardState::new();
            wizard.jump_to(2);
            assert!(!wizard.jump_to(2));
            assert_eq!(wizard.step(), Step::Business);
        }

        #[test]
        fn test_jump_out_of_range_ignored() {
            let mut wizard = WizardState::new();
            wizard.jump_to(2);
            assert!(!wizard.jump_to(5));
            assert!(!wizard.jump_to(usize::MAX));
            assert_eq!(wizard.step(), Step::Business);
        }

        #[test]
        fn test_index_stays_in_range_under_any_sequence() {
            let forms = [FormData::new(), valid_form()];
            let mut wizard = WizardState::new();
            // Deterministic pseudo-random walk over every operation
            let mut seed: u64 = 0x9E37_79B9_7F4A_7C15;
            for _ in 0..2_000 {
                seed ^= seed << 13;
                seed ^= seed >> 7;
                seed ^= seed << 17;
                let form = &forms[(seed % 2) as usize];
                match (seed >> 8) % 4 {
                    0 => {
                        wizard.advance(form);
                    }
                    1 => {
                        wizard.retreat();
                    }
                    2 => {
                        wizard.jump_to((seed >> 16) as usize % 8);
                    }
                    _ => wizard.consent = !wizard.consent,
                }
                assert!(wizard.step().index() <= Step::LAST_INDEX);
            }
        }
    }

    mod submission_gate {
        use super::*;

        #[test]
        fn test_requires_review_step() {
            let mut wizard = WizardState::new();
            wizard.consent = true;
            assert!(!wizard.can_submit());
            wizard.jump_to(4);
            assert!(wizard.can_submit());
        }

        #[test]
        fn test_requires_consent() {
            let mut wizard = WizardState::new();
            wizard.jump_to(4);
            assert!(!wizard.can_submit());
        }

        #[test]
        fn test_blocked_while_submitting() {
            let mut wizard = WizardState::new();
            wizard.jump_to(4);
            wizard.consent = true;
            wizard.submitting = true;
            assert!(!wizard.can_submit());
        }
    }
}
