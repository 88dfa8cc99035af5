use serde::{Deserialize, Serialize};
use std::fmt;

/// loan request input, used to tag validation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoanField {
    Principal,
    TermMonths,
    AnnualInterestRate,
}

impl LoanField {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanField::Principal => "principal",
            LoanField::TermMonths => "term_months",
            LoanField::AnnualInterestRate => "annual_interest_rate",
        }
    }
}

impl fmt::Display for LoanField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
