/// json state - serialization of a full calculation
use loan_amortization_rs::{AmortizationCalculator, CalculatorConfig, LoanRequest};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== json state serialization ===\n");

    let config = CalculatorConfig::from_json(
        r#"{"default_annual_rate": "0.09", "default_term_months": 6, "max_term_months": 120}"#,
    )?;
    let calculator = AmortizationCalculator::new(config);

    let request = LoanRequest::from_f64(3_000_000.0, 6.0, 0.09)?;
    let calc = calculator.calculate(&request)?;

    println!("{}", calc.json());

    Ok(())
}
