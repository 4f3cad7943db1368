//! Applicant form data and field descriptors

use crate::format::{format_currency, format_phone};

/// Loan categories offered on the first step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanKind {
    LineOfCredit,
    WorkingCapital,
    Equipment,
    Mortgage,
}

impl LoanKind {
    pub const ALL: [LoanKind; 4] = [
        LoanKind::LineOfCredit,
        LoanKind::WorkingCapital,
        LoanKind::Equipment,
        LoanKind::Mortgage,
    ];

    /// Value stored in the form and sent in the payload
    pub fn value(&self) -> &'static str {
        match self {
            Self::LineOfCredit => "line-of-credit",
            Self::WorkingCapital => "working-capital",
            Self::Equipment => "equipment",
            Self::Mortgage => "mortgage",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::LineOfCredit => "Line of Credit",
            Self::WorkingCapital => "Working Capital",
            Self::Equipment => "Equipment Financing",
            Self::Mortgage => "Mortgage",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.value() == value)
    }

    /// Next option, wrapping. An unset selection starts at the first option.
    pub fn cycle_next(current: Option<Self>) -> Self {
        match current {
            None => Self::ALL[0],
            Some(kind) => {
                let idx = Self::ALL.iter().position(|k| *k == kind).unwrap_or(0);
                Self::ALL[(idx + 1) % Self::ALL.len()]
            }
        }
    }

    /// Previous option, wrapping. An unset selection starts at the last option.
    pub fn cycle_prev(current: Option<Self>) -> Self {
        let len = Self::ALL.len();
        match current {
            None => Self::ALL[len - 1],
            Some(kind) => {
                let idx = Self::ALL.iter().position(|k| *k == kind).unwrap_or(0);
                Self::ALL[(idx + len - 1) % len]
            }
        }
    }
}

/// How a field accepts input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Multiline,
    Currency,
    Phone,
    /// One of [`LoanKind::ALL`]
    Choice,
}

/// Identifies one field of [`FormData`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    LoanKind,
    AmountDesired,
    FirstName,
    LastName,
    Email,
    Phone,
    BusinessName,
    MonthlyRevenue,
    Industry,
    CreditScoreRange,
    UseOfFunds,
}

impl FieldId {
    pub fn label(&self) -> &'static str {
        match self {
            Self::LoanKind => "Loan Type",
            Self::AmountDesired => "Amount Desired (USD)",
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::BusinessName => "Business Name",
            Self::MonthlyRevenue => "Monthly Revenue (USD)",
            Self::Industry => "Industry",
            Self::CreditScoreRange => "Approximate Credit Score",
            Self::UseOfFunds => "Use of Funds",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::LoanKind => FieldKind::Choice,
            Self::AmountDesired | Self::MonthlyRevenue => FieldKind::Currency,
            Self::Phone => FieldKind::Phone,
            Self::UseOfFunds => FieldKind::Multiline,
            _ => FieldKind::Text,
        }
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::LoanKind => Some("Select loan type"),
            Self::AmountDesired => Some("50,000"),
            Self::Phone => Some("(321) 607 0070"),
            Self::MonthlyRevenue => Some("120,000"),
            Self::CreditScoreRange => Some("Example: 720"),
            Self::UseOfFunds => Some("Equipment, payroll, etc."),
            _ => None,
        }
    }

    pub fn is_multiline(&self) -> bool {
        self.kind() == FieldKind::Multiline
    }
}

/// Everything the applicant has typed, in display form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
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
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::LoanKind => &self.loan_kind,
            FieldId::AmountDesired => &self.amount_desired,
            FieldId::FirstName => &self.first_name,
            FieldId::LastName => &self.last_name,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
            FieldId::BusinessName => &self.business_name,
            FieldId::MonthlyRevenue => &self.monthly_revenue,
            FieldId::Industry => &self.industry,
            FieldId::CreditScoreRange => &self.credit_score_range,
            FieldId::UseOfFunds => &self.use_of_funds,
        }
    }

    fn slot_mut(&mut self, field: FieldId) -> &mut String {
        match field {
            FieldId::LoanKind => &mut self.loan_kind,
            FieldId::AmountDesired => &mut self.amount_desired,
            FieldId::FirstName => &mut self.first_name,
            FieldId::LastName => &mut self.last_name,
            FieldId::Email => &mut self.email,
            FieldId::Phone => &mut self.phone,
            FieldId::BusinessName => &mut self.business_name,
            FieldId::MonthlyRevenue => &mut self.monthly_revenue,
            FieldId::Industry => &mut self.industry,
            FieldId::CreditScoreRange => &mut self.credit_score_range,
            FieldId::UseOfFunds => &mut self.use_of_funds,
        }
    }

    /// Store a raw value, normalizing it with the field's formatter
    pub fn set(&mut self, field: FieldId, raw: &str) {
        let value = match field.kind() {
            FieldKind::Currency => format_currency(raw),
            FieldKind::Phone => format_phone(raw),
            FieldKind::Choice => match LoanKind::from_value(raw) {
                Some(kind) => kind.value().to_string(),
                None => String::new(),
            },
            FieldKind::Text | FieldKind::Multiline => raw.to_string(),
        };
        *self.slot_mut(field) = value;
    }

    /// Append a typed character and re-run the formatter over the whole value
    pub fn push_char(&mut self, field: FieldId, c: char) {
        if field.kind() == FieldKind::Choice {
            return;
        }
        let mut raw = self.get(field).to_string();
        raw.push(c);
        self.set(field, &raw);
    }

    /// Remove the last character and re-run the formatter
    pub fn pop_char(&mut self, field: FieldId) {
        if field.kind() == FieldKind::Choice {
            self.slot_mut(field).clear();
            return;
        }
        let mut raw = self.get(field).to_string();
        raw.pop();
        self.set(field, &raw);
    }

    pub fn loan_kind(&self) -> Option<LoanKind> {
        LoanKind::from_value(&self.loan_kind)
    }
}
