/// form input - validating raw text fields before calculating
use loan_amortization_rs::{AmortizationCalculator, LoanError, LoanField, LoanRequest};

fn main() {
    loan_amortization_rs::init_tracing();
    println!("=== form input ===\n");

    let calculator = AmortizationCalculator::default();
    let rate = calculator.config().default_annual_rate;

    let submissions = [
        ("12000000", "12"),
        ("", "12"),
        ("2500000", "0"),
        ("abc", "6"),
        ("800000", "6"),
    ];

    for (amount, term) in submissions {
        let result = LoanRequest::from_form(amount, term, rate)
            .and_then(|request| calculator.calculate(&request));

        match result {
            Ok(calc) => println!(
                "amount '{}' term '{}': {} per month",
                amount,
                term,
                calc.monthly_payment.round_dp(0)
            ),
            Err(LoanError::InvalidInput { field, reason }) => {
                let label = match field {
                    LoanField::Principal => "loan amount",
                    LoanField::TermMonths => "loan term",
                    LoanField::AnnualInterestRate => "interest rate",
                };
                println!(
                    "amount '{}' term '{}': check {} ({})",
                    amount, term, label, reason
                );
            }
            Err(e) => println!("amount '{}' term '{}': {}", amount, term, e),
        }
    }
}
