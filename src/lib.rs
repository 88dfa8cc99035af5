pub mod amortization;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod request;
pub mod types;

use std::sync::Once;

// re-export key types
pub use amortization::{
    calculate_monthly_payment, compute_schedule, AmortizationCalculator, AmortizationEntry,
    LoanCalculation, LoanSummary,
};
pub use config::CalculatorConfig;
pub use decimal::{Money, Rate};
pub use errors::{LoanError, Result};
pub use request::{LoanRequest, LoanRequestBuilder};
pub use types::LoanField;

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;

static INIT_TRACING: Once = Once::new();

/// Installs a fmt subscriber filtered by `RUST_LOG`, defaulting to info for this crate.
///
/// Only needed by hosts without a subscriber of their own. Safe to call repeatedly.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("loan_amortization_rs=info"));

        if fmt().with_env_filter(filter).try_init().is_ok() {
            tracing::info!("loan amortization tracing initialized");
        }
    });
}
