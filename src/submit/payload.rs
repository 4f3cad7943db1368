//! Wire document sent to the submission sink

use crate::format::digits_only;
use crate::state::FormData;
use serde::Serialize;

/// Normalized application. Amounts carry digits only, everything else is
/// passed through as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    pub loan_kind: String,
    pub amount_desired: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub business_name: String,
    pub monthly_revenue: String,
    pub industry: String,
    pub credit_score_range: String,
    pub use_of_funds: String,
    pub consent: bool,
}

impl Payload {
    pub fn from_form(form: &FormData, consent: bool) -> Self {
        Self {
            loan_kind: form.loan_kind.clone(),
            amount_desired: digits_only(&form.amount_desired),
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            business_name: form.business_name.clone(),
            monthly_revenue: digits_only(&form.monthly_revenue),
            industry: form.industry.clone(),
            credit_score_range: form.credit_score_range.clone(),
            use_of_funds: form.use_of_funds.clone(),
            consent,
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn sample_form() -> FormData {
        FormData {
            loan_kind: "equipment".to_string(),
            amount_desired: "250,000".to_string(),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@example.com".to_string(),
            phone: "(321) 607 0070".to_string(),
            business_name: "Compilers Co".to_string(),
            monthly_revenue: "1,200,000".to_string(),
            industry: "Software".to_string(),
            credit_score_range: "760".to_string(),
            use_of_funds: "Servers\nStaff".to_string(),
        }
    }

    #[test]
    fn test_amounts_are_digits_only() {
        let payload = Payload::from_form(&sample_form(), true);
        assert_eq!(payload.amount_desired, "250000");
        assert_eq!(payload.monthly_revenue, "1200000");
    }

    #[test]
    fn test_other_fields_pass_through() {
        let payload = Payload::from_form(&sample_form(), true);
        assert_eq!(payload.phone, "(321) 607 0070");
        assert_eq!(payload.use_of_funds, "Servers\nStaff");
    }

    #[test]
    fn test_wire_shape() {
        let payload = Payload::from_form(&sample_form(), true);
        let value: Value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "loanKind": "equipment",
                "amountDesired": "250000",
                "firstName": "Grace",
                "lastName": "Hopper",
                "email": "grace@example.com",
                "phone": "(321) 607 0070",
                "businessName": "Compilers Co",
                "monthlyRevenue": "1200000",
                "industry": "Software",
                "creditScoreRange": "760",
                "useOfFunds": "Servers\nStaff",
                "consent": true
            })
        );
    }

    #[test]
    fn test_empty_optional_amount_stays_empty() {
        let mut form = sample_form();
        form.monthly_revenue.clear();
        let payload = Payload::from_form(&form, false);
        assert_eq!(payload.monthly_revenue, "");
        assert!(!payload.consent);
    }

    #[test]
    fn test_pretty_json_is_multiline() {
        let payload = Payload::from_form(&sample_form(), true);
        let pretty = payload.to_json_pretty().unwrap();
        assert!(pretty.starts_with("{\n  \"loanKind\""));
    }
}
