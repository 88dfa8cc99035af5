use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::CalculatorConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{LoanError, Result};
use crate::types::LoanField;

/// validated loan calculation input
///
/// Fields are private so every value in circulation has passed validation:
/// principal > 0, term_months >= 1, annual_rate >= 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LoanRequestFields")]
pub struct LoanRequest {
    principal: Money,
    term_months: u32,
    annual_rate: Rate,
    start_date: Option<NaiveDate>,
}

impl LoanRequest {
    pub fn new(principal: Money, term_months: u32, annual_rate: Rate) -> Result<Self> {
        validate_principal(principal)?;
        validate_term(term_months as i64)?;
        validate_rate(annual_rate)?;

        Ok(Self {
            principal,
            term_months,
            annual_rate,
            start_date: None,
        })
    }

    /// builder seeded with the cooperative defaults
    pub fn builder() -> LoanRequestBuilder {
        LoanRequestBuilder::new()
    }

    /// build from floating point inputs
    pub fn from_f64(principal: f64, term_months: f64, annual_rate: f64) -> Result<Self> {
        let principal = Money::try_from_f64(principal, LoanField::Principal)?;
        let annual_rate = Rate::try_from_f64(annual_rate, LoanField::AnnualInterestRate)?;

        if !term_months.is_finite() {
            return Err(LoanError::invalid(
                LoanField::TermMonths,
                format!("{} is not a finite number", term_months),
            ));
        }
        if term_months.fract() != 0.0 {
            return Err(LoanError::invalid(
                LoanField::TermMonths,
                format!("{} is not a whole number of months", term_months),
            ));
        }
        if term_months > u32::MAX as f64 {
            return Err(LoanError::invalid(
                LoanField::TermMonths,
                format!("{} months is out of range", term_months),
            ));
        }
        let term_months = validate_term(term_months as i64)?;

        Self::new(principal, term_months, annual_rate)
    }

    /// build from raw text fields as typed into a form
    pub fn from_form(amount: &str, term_months: &str, annual_rate: Rate) -> Result<Self> {
        let amount = amount.trim();
        if amount.is_empty() {
            return Err(LoanError::invalid(LoanField::Principal, "amount is empty"));
        }
        let principal = amount.parse::<Money>().map_err(|_| {
            LoanError::invalid(LoanField::Principal, format!("'{}' is not a number", amount))
        })?;

        let term = term_months.trim();
        let term = term.parse::<i64>().map_err(|_| {
            LoanError::invalid(
                LoanField::TermMonths,
                format!("'{}' is not a whole number of months", term),
            )
        })?;
        let term = validate_term(term)?;

        Self::new(principal, term, annual_rate)
    }

    /// date the loan starts; installment n falls due n months later
    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn principal(&self) -> Money {
        self.principal
    }

    pub fn term_months(&self) -> u32 {
        self.term_months
    }

    pub fn annual_rate(&self) -> Rate {
        self.annual_rate
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }
}

/// unvalidated wire form of a loan request
#[derive(Deserialize)]
struct LoanRequestFields {
    principal: Money,
    term_months: u32,
    annual_rate: Rate,
    #[serde(default)]
    start_date: Option<NaiveDate>,
}

impl TryFrom<LoanRequestFields> for LoanRequest {
    type Error = LoanError;

    fn try_from(fields: LoanRequestFields) -> Result<Self> {
        let request = LoanRequest::new(fields.principal, fields.term_months, fields.annual_rate)?;
        Ok(match fields.start_date {
            Some(date) => request.with_start_date(date),
            None => request,
        })
    }
}

/// builder for loan requests
pub struct LoanRequestBuilder {
    config: CalculatorConfig,
    amount: Option<Money>,
    rate: Option<Rate>,
    term_months: Option<u32>,
    start_date: Option<NaiveDate>,
}

impl LoanRequestBuilder {
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::cooperative())
    }

    /// missing rate and term fall back to this config's defaults
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            config,
            amount: None,
            rate: None,
            term_months: None,
            start_date: None,
        }
    }

    pub fn amount(mut self, amount: Money) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn rate(mut self, rate: Rate) -> Self {
        self.rate = Some(rate);
        self
    }

    pub fn term_months(mut self, months: u32) -> Self {
        self.term_months = Some(months);
        self
    }

    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn build(self) -> Result<LoanRequest> {
        let amount = self
            .amount
            .ok_or_else(|| LoanError::invalid(LoanField::Principal, "amount required"))?;
        let rate = self.rate.unwrap_or(self.config.default_annual_rate);
        let term = self.term_months.unwrap_or(self.config.default_term_months);

        let request = LoanRequest::new(amount, term, rate)?;
        Ok(match self.start_date {
            Some(date) => request.with_start_date(date),
            None => request,
        })
    }
}

impl Default for LoanRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_principal(principal: Money) -> Result<()> {
    if !principal.is_positive() {
        return Err(LoanError::invalid(
            LoanField::Principal,
            format!("must be greater than zero, got {}", principal),
        ));
    }
    Ok(())
}

fn validate_term(months: i64) -> Result<u32> {
    if months < 1 {
        return Err(LoanError::invalid(
            LoanField::TermMonths,
            format!("must be at least 1 month, got {}", months),
        ));
    }
    u32::try_from(months).map_err(|_| {
        LoanError::invalid(
            LoanField::TermMonths,
            format!("{} months is out of range", months),
        )
    })
}

fn validate_rate(rate: Rate) -> Result<()> {
    if rate.is_negative() {
        return Err(LoanError::invalid(
            LoanField::AnnualInterestRate,
            format!("must not be negative, got {}", rate),
        ));
    }
    Ok(())
}
