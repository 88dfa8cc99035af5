use serde::{Deserialize, Serialize};

use crate::decimal::Rate;
use crate::errors::{LoanError, Result};

/// calculator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// rate applied when a request does not name one
    pub default_annual_rate: Rate,
    /// term applied when a request does not name one
    pub default_term_months: u32,
    /// longest term accepted, unbounded when absent
    #[serde(default)]
    pub max_term_months: Option<u32>,
}

impl CalculatorConfig {
    /// cooperative loan product: 12% annual, 12 month default term
    pub fn cooperative() -> Self {
        Self {
            default_annual_rate: Rate::from_percentage(12),
            default_term_months: 12,
            max_term_months: None,
        }
    }

    pub fn with_default_rate(mut self, rate: Rate) -> Self {
        self.default_annual_rate = rate;
        self
    }

    pub fn with_default_term(mut self, months: u32) -> Self {
        self.default_term_months = months;
        self
    }

    pub fn with_max_term(mut self, months: u32) -> Self {
        self.max_term_months = Some(months);
        self
    }

    /// load and validate configuration from json
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CalculatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_annual_rate.is_negative() {
            return Err(LoanError::InvalidConfiguration {
                message: format!(
                    "default annual rate must not be negative, got {}",
                    self.default_annual_rate
                ),
            });
        }

        if self.default_term_months == 0 {
            return Err(LoanError::InvalidConfiguration {
                message: "default term must be at least 1 month".to_string(),
            });
        }

        if let Some(max) = self.max_term_months {
            if max < self.default_term_months {
                return Err(LoanError::InvalidConfiguration {
                    message: format!(
                        "max term {} is shorter than default term {}",
                        max, self.default_term_months
                    ),
                });
            }
        }

        Ok(())
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::cooperative()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_cooperative_preset() {
        let config = CalculatorConfig::cooperative();
        assert_eq!(config.default_annual_rate.as_decimal(), dec!(0.12));
        assert_eq!(config.default_term_months, 12);
        assert_eq!(config.max_term_months, None);
        assert!(config.validate().is_ok());
        assert_eq!(CalculatorConfig::default(), config);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "default_annual_rate": "0.095",
            "default_term_months": 24,
            "max_term_months": 360
        }"#;

        let config = CalculatorConfig::from_json(json).unwrap();
        assert_eq!(
            config,
            CalculatorConfig::cooperative()
                .with_default_rate(Rate::from_decimal(dec!(0.095)))
                .with_default_term(24)
                .with_max_term(360)
        );
    }

    #[test]
    fn test_from_json_without_ceiling() {
        let json = r#"{"default_annual_rate": "0.12", "default_term_months": 12}"#;
        let config = CalculatorConfig::from_json(json).unwrap();
        assert_eq!(config.max_term_months, None);
    }

    #[test]
    fn test_invalid_configs() {
        let negative = CalculatorConfig::cooperative()
            .with_default_rate(Rate::from_decimal(dec!(-0.01)));
        assert!(matches!(
            negative.validate(),
            Err(LoanError::InvalidConfiguration { .. })
        ));

        let far_negative =
            CalculatorConfig::cooperative().with_default_rate(Rate::from_decimal(Decimal::MIN));
        assert!(matches!(
            far_negative.validate(),
            Err(LoanError::InvalidConfiguration { .. })
        ));

        let zero_term = CalculatorConfig::cooperative().with_default_term(0);
        assert!(zero_term.validate().is_err());

        let short_ceiling = CalculatorConfig::cooperative()
            .with_default_term(24)
            .with_max_term(12);
        assert!(short_ceiling.validate().is_err());

        assert!(matches!(
            CalculatorConfig::from_json("{not json"),
            Err(LoanError::InvalidConfiguration { .. })
        ));
    }
}
