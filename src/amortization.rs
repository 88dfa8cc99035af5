use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::CalculatorConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{LoanError, Result};
use crate::request::{LoanRequest, LoanRequestBuilder};
use crate::types::LoanField;

/// one month of an amortization schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationEntry {
    /// 1-indexed installment number
    pub month: u32,
    pub due_date: Option<NaiveDate>,
    pub beginning_balance: Money,
    pub payment: Money,
    pub principal_portion: Money,
    pub interest_portion: Money,
    pub remaining_balance: Money,
    pub cumulative_interest: Money,
}

/// fixed-rate loan calculation with its full schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanCalculation {
    pub principal: Money,
    pub annual_rate: Rate,
    pub term_months: u32,
    pub monthly_payment: Money,
    /// monthly_payment * term_months
    pub total_payment: Money,
    /// total_payment - principal
    pub total_interest: Money,
    pub schedule: Vec<AmortizationEntry>,
}

/// headline figures without the schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanSummary {
    pub principal: Money,
    pub annual_rate: Rate,
    pub term_months: u32,
    pub monthly_payment: Money,
    pub total_payment: Money,
    pub total_interest: Money,
}

impl LoanCalculation {
    /// entry for a given month (1-indexed)
    pub fn entry(&self, month: u32) -> Option<&AmortizationEntry> {
        let index = month.checked_sub(1)?;
        self.schedule.get(index as usize)
    }

    /// remaining balance after the given month's installment
    pub fn balance_after(&self, month: u32) -> Money {
        if month == 0 {
            return self.principal;
        }
        self.entry(month)
            .map(|e| e.remaining_balance)
            .unwrap_or(Money::ZERO)
    }

    pub fn summary(&self) -> LoanSummary {
        LoanSummary {
            principal: self.principal,
            annual_rate: self.annual_rate,
            term_months: self.term_months,
            monthly_payment: self.monthly_payment,
            total_payment: self.total_payment,
            total_interest: self.total_interest,
        }
    }

    /// get json representation of the calculation
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("JSON error: {}", e))
    }

    /// short alias for json output
    pub fn json(&self) -> String {
        self.to_json_pretty()
    }
}

/// amortization calculator
#[derive(Debug, Clone, Default)]
pub struct AmortizationCalculator {
    config: CalculatorConfig,
}

impl AmortizationCalculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// request builder using this calculator's defaults
    pub fn request(&self) -> LoanRequestBuilder {
        LoanRequestBuilder::with_config(self.config.clone())
    }

    /// calculate payment, totals and the full schedule
    pub fn calculate(&self, request: &LoanRequest) -> Result<LoanCalculation> {
        if let Some(max) = self.config.max_term_months {
            if request.term_months() > max {
                let err = LoanError::invalid(
                    LoanField::TermMonths,
                    format!("{} months exceeds the maximum of {}", request.term_months(), max),
                );
                warn!(error = %err, "loan request rejected");
                return Err(err);
            }
        }

        calculate_loan(request).map_err(|err| {
            warn!(error = %err, "loan calculation failed");
            err
        })
    }
}

/// validate inputs and compute the loan's payment and schedule
pub fn compute_schedule(
    principal: Money,
    term_months: u32,
    annual_rate: Rate,
) -> Result<LoanCalculation> {
    let request = LoanRequest::new(principal, term_months, annual_rate).map_err(|err| {
        warn!(error = %err, "loan request rejected");
        err
    })?;
    AmortizationCalculator::default().calculate(&request)
}

/// fixed monthly installment that fully repays `principal` over `term_months`
pub fn calculate_monthly_payment(
    principal: Money,
    annual_rate: Rate,
    term_months: u32,
) -> Result<Money> {
    let request = LoanRequest::new(principal, term_months, annual_rate)?;
    installment(
        request.principal(),
        request.annual_rate().monthly_rate().as_decimal(),
        request.term_months(),
    )
}

fn calculate_loan(request: &LoanRequest) -> Result<LoanCalculation> {
    let principal = request.principal();
    let term_months = request.term_months();
    let monthly_rate = request.annual_rate().monthly_rate().as_decimal();

    let monthly_payment = installment(principal, monthly_rate, term_months)?;
    let total_payment = monthly_payment
        .checked_mul(Decimal::from(term_months))
        .ok_or_else(|| LoanError::overflow("total payment"))?;
    let total_interest = total_payment
        .checked_sub(principal)
        .ok_or_else(|| LoanError::overflow("total interest"))?;

    let schedule = build_schedule(request, monthly_rate, monthly_payment)?;

    debug!(
        principal = %principal,
        term_months,
        annual_rate = %request.annual_rate(),
        monthly_payment = %monthly_payment,
        total_interest = %total_interest,
        "computed amortization schedule"
    );

    Ok(LoanCalculation {
        principal,
        annual_rate: request.annual_rate(),
        term_months,
        monthly_payment,
        total_payment,
        total_interest,
        schedule,
    })
}

/// EMI = P * r * (1 + r)^n / ((1 + r)^n - 1), or P / n when r is zero
fn installment(principal: Money, monthly_rate: Decimal, months: u32) -> Result<Money> {
    if monthly_rate.is_zero() {
        return principal
            .checked_div(Decimal::from(months))
            .ok_or_else(|| LoanError::overflow("monthly payment"));
    }

    let base = Decimal::ONE
        .checked_add(monthly_rate)
        .ok_or_else(|| LoanError::overflow("monthly growth factor"))?;
    let growth = checked_powu(base, months)
        .ok_or_else(|| LoanError::overflow("compound factor (1 + r)^n"))?;

    // 1 + r is exact for any positive r of at most 28 decimal places, so growth > 1
    let denominator = growth - Decimal::ONE;

    // divide first so P * (1 + r)^n is never formed
    growth
        .checked_div(denominator)
        .and_then(|factor| factor.checked_mul(monthly_rate))
        .and_then(|factor| principal.checked_mul(factor))
        .ok_or_else(|| LoanError::overflow("monthly payment"))
}

fn build_schedule(
    request: &LoanRequest,
    monthly_rate: Decimal,
    payment: Money,
) -> Result<Vec<AmortizationEntry>> {
    let months = request.term_months();
    let mut schedule = Vec::with_capacity(months as usize);
    let mut balance = request.principal();
    let mut cumulative_interest = Money::ZERO;

    for month in 1..=months {
        let interest_portion = balance
            .checked_mul(monthly_rate)
            .ok_or_else(|| LoanError::overflow(format!("interest for month {}", month)))?;

        // final installment retires whatever rounding left on the balance;
        // before that, payment >= principal * r >= interest_portion
        let principal_portion = if month == months {
            balance
        } else {
            payment
                .checked_sub(interest_portion)
                .ok_or_else(|| LoanError::overflow(format!("principal for month {}", month)))?
        };

        let remaining_balance = (balance - principal_portion).max(Money::ZERO);
        cumulative_interest = cumulative_interest
            .checked_add(interest_portion)
            .ok_or_else(|| LoanError::overflow("cumulative interest"))?;

        let due_date = match request.start_date() {
            Some(start) => Some(
                start
                    .checked_add_months(Months::new(month))
                    .ok_or_else(|| LoanError::overflow(format!("due date for month {}", month)))?,
            ),
            None => None,
        };

        schedule.push(AmortizationEntry {
            month,
            due_date,
            beginning_balance: balance,
            payment,
            principal_portion,
            interest_portion,
            remaining_balance,
            cumulative_interest,
        });

        balance = remaining_balance;
    }

    Ok(schedule)
}

/// integer power by repeated squaring, None on overflow
fn checked_powu(base: Decimal, mut exp: u32) -> Option<Decimal> {
    let mut result = Decimal::ONE;
    let mut square = base;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result.checked_mul(square)?;
        }
        exp >>= 1;
        if exp > 0 {
            square = square.checked_mul(square)?;
        }
    }
    Some(result)
}
