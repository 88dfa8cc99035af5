/// quick start - minimal example to get started
use loan_amortization_rs::{compute_schedule, Money, Rate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 12,000,000 over 12 months at 12% a year
    let calc = compute_schedule(Money::from_major(12_000_000), 12, Rate::from_percentage(12))?;

    println!("{}", serde_json::to_string_pretty(&calc.summary())?);

    Ok(())
}
