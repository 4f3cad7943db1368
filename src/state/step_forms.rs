//! Per-step field views
//!
//! Each step only sees the slice of [`FormData`] it edits. Key handling goes
//! through a [`StepForm`], which refuses writes to fields that belong to a
//! different step.

use super::form_data::{FieldId, FormData, LoanKind};
use super::wizard::Step;

/// Fields edited on a step, in focus order
pub fn step_fields(step: Step) -> &'static [FieldId] {
    match step {
        Step::LoanType => &[FieldId::LoanKind, FieldId::AmountDesired],
        Step::Contact => &[
            FieldId::FirstName,
            FieldId::LastName,
            FieldId::Email,
            FieldId::Phone,
        ],
        Step::Business => &[
            FieldId::BusinessName,
            FieldId::MonthlyRevenue,
            FieldId::Industry,
        ],
        Step::LoanDetails => &[FieldId::CreditScoreRange, FieldId::UseOfFunds],
        // Review only has the consent checkbox
        Step::Review => &[],
    }
}

/// Trait for moving focus between the fields of a step
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Mutable view over the fields of one step
pub struct StepForm<'a> {
    step: Step,
    data: &'a mut FormData,
    active_field_index: usize,
}

impl<'a> StepForm<'a> {
    pub fn new(step: Step, data: &'a mut FormData, active_field_index: usize) -> Self {
        let mut form = Self {
            step,
            data,
            active_field_index: 0,
        };
        form.set_active_field(active_field_index);
        form
    }

    pub fn fields(&self) -> &'static [FieldId] {
        step_fields(self.step)
    }

    pub fn owns(&self, field: FieldId) -> bool {
        self.fields().contains(&field)
    }

    pub fn active(&self) -> Option<FieldId> {
        self.fields().get(self.active_field_index).copied()
    }

    /// Replace a field's value. Returns false for fields of other steps.
    pub fn update(&mut self, field: FieldId, raw: &str) -> bool {
        if !self.owns(field) {
            tracing::warn!("{:?} is not edited on step {:?}", field, self.step);
            return false;
        }
        self.data.set(field, raw);
        true
    }

    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.active() {
            self.data.push_char(field, c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.active() {
            self.data.pop_char(field);
        }
    }

    /// Step the active choice field through its options
    pub fn cycle_choice(&mut self, forward: bool) {
        if self.active() != Some(FieldId::LoanKind) {
            return;
        }
        let current = self.data.loan_kind();
        let next = if forward {
            LoanKind::cycle_next(current)
        } else {
            LoanKind::cycle_prev(current)
        };
        self.update(FieldId::LoanKind, next.value());
    }
}

impl Form for StepForm<'_> {
    fn field_count(&self) -> usize {
        self.fields().len()
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn test_every_field_belongs_to_exactly_one_step() {
        let all: Vec<FieldId> = Step::ALL
            .iter()
            .flat_map(|s| step_fields(*s).iter().copied())
            .collect();
        let unique: HashSet<FieldId> = all.iter().copied().collect();
        assert_eq!(all.len(), 11);
        assert_eq!(unique.len(), 11);
    }

    #[test]
    fn test_contact_fields_in_order() {
        assert_eq!(
            step_fields(Step::Contact),
            &[
                FieldId::FirstName,
                FieldId::LastName,
                FieldId::Email,
                FieldId::Phone
            ]
        );
    }

    #[test]
    fn test_update_rejects_foreign_field() {
        let mut data = FormData::new();
        let mut form = StepForm::new(Step::Business, &mut data, 0);
        assert!(!form.update(FieldId::Email, "a@b.c"));
        assert!(form.update(FieldId::BusinessName, "Acme"));
        assert_eq!(data.email, "");
        assert_eq!(data.business_name, "Acme");
    }

    #[test]
    fn test_input_goes_to_active_field() {
        let mut data = FormData::new();
        let mut form = StepForm::new(Step::LoanType, &mut data, 1);
        for c in "75000".chars() {
            form.input_char(c);
        }
        form.backspace();
        assert_eq!(data.amount_desired, "7,500");
    }

    #[test]
    fn test_next_field_cycles() {
        let mut data = FormData::new();
        let mut form = StepForm::new(Step::Business, &mut data, 0);
        for _ in 0..3 {
            form.next_field();
        }
        assert_eq!(form.active_field(), 0);
    }

    #[test]
    fn test_prev_field_wraps_to_last() {
        let mut data = FormData::new();
        let mut form = StepForm::new(Step::Contact, &mut data, 0);
        form.prev_field();
        assert_eq!(form.active(), Some(FieldId::Phone));
    }

    #[test]
    fn test_set_active_field_clamps() {
        let mut data = FormData::new();
        let form = StepForm::new(Step::LoanDetails, &mut data, 100);
        assert_eq!(form.active_field(), 1);
    }

    #[test]
    fn test_cycle_choice_only_on_loan_kind() {
        let mut data = FormData::new();
        let mut form = StepForm::new(Step::LoanType, &mut data, 0);
        form.cycle_choice(true);
        form.cycle_choice(true);
        form.next_field();
        // Amount has focus now
        form.cycle_choice(true);
        assert_eq!(data.loan_kind, "working-capital");
    }

    #[test]
    fn test_review_has_no_fields() {
        let mut data = FormData::new();
        let mut form = StepForm::new(Step::Review, &mut data, 3);
        assert_eq!(form.active(), None);
        form.next_field();
        form.input_char('x');
        assert_eq!(form.active_field(), 0);
        assert_eq!(data, FormData::new());
    }
}
