//! Per-step validation rules
//!
//! Each step has one predicate over the current form data and consent flag.
//! The predicates are pure and cheap, so callers re-evaluate them on every
//! key press and every draw.

use super::form_data::FormData;
use super::wizard::Step;
use regex::Regex;
use std::sync::LazyLock;

/// Something, `@`, something, `.`, something (unanchored, single line).
/// "Something" excludes every line terminator, not just `\n`.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[^\n\r\x{2028}\x{2029}]+@[^\n\r\x{2028}\x{2029}]+\.[^\n\r\x{2028}\x{2029}]+",
    )
    .expect("email pattern is a valid regex")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Whether `step` may be left in the forward direction
pub fn step_is_valid(step: Step, form: &FormData, consent: bool) -> bool {
    match step {
        Step::LoanType => !form.loan_kind.is_empty(),
        Step::Contact => {
            !form.first_name.is_empty()
                && !form.last_name.is_empty()
                && is_valid_email(&form.email)
        }
        Step::Business => !form.business_name.is_empty(),
        Step::LoanDetails => {
            !form.amount_desired.is_empty() && !form.credit_score_range.is_empty()
        }
        Step::Review => consent,
    }
}
