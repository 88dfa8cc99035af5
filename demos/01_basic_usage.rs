/// basic usage - calculator with config defaults and a printed schedule
use chrono::NaiveDate;
use loan_amortization_rs::{AmortizationCalculator, CalculatorConfig, Money};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    loan_amortization_rs::init_tracing();
    println!("=== basic usage example ===\n");

    let calculator =
        AmortizationCalculator::new(CalculatorConfig::cooperative().with_max_term(60));

    // rate and term come from the cooperative defaults
    let request = calculator
        .request()
        .amount(Money::from_major(5_000_000))
        .start_date(NaiveDate::from_ymd_opt(2024, 1, 15).ok_or("bad date")?)
        .build()?;

    let calc = calculator.calculate(&request)?;

    println!("monthly payment: {}", calc.monthly_payment.round_dp(0));
    println!("total payment:   {}", calc.total_payment.round_dp(0));
    println!("total interest:  {}", calc.total_interest.round_dp(0));

    println!(
        "\n{:>5} {:>12} {:>12} {:>12} {:>14}",
        "month", "due", "principal", "interest", "balance"
    );
    for entry in &calc.schedule {
        let due = entry.due_date.map(|d| d.to_string()).unwrap_or_default();
        println!(
            "{:>5} {:>12} {:>12} {:>12} {:>14}",
            entry.month,
            due,
            entry.principal_portion.round_dp(0),
            entry.interest_portion.round_dp(0),
            entry.remaining_balance.round_dp(0),
        );
    }

    Ok(())
}
