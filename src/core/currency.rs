use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies accepted by the gateway, with their decimal precision rules
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Kenyan Shilling (2 decimal places)
    #[default]
    KES,
    /// Ugandan Shilling (no decimal places)
    UGX,
    /// Tanzanian Shilling (2 decimal places)
    TZS,
    /// US Dollar (2 decimal places)
    USD,
}

impl Currency {
    /// Returns the decimal scale for this currency
    pub fn scale(&self) -> u32 {
        match self {
            Currency::UGX => 0,
            Currency::KES | Currency::TZS | Currency::USD => 2,
        }
    }

    /// Validates that a decimal value is positive and has the correct scale for this currency
    pub fn validate_amount(&self, amount: Decimal) -> Result<(), String> {
        if amount <= Decimal::ZERO {
            return Err("Amount must be greater than zero".to_string());
        }

        let scale = amount.normalize().scale();
        let expected_scale = self.scale();
        if scale > expected_scale {
            return Err(format!(
                "{} amounts must have at most {} decimal places, got {}",
                self, expected_scale, scale
            ));
        }

        Ok(())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::KES => write!(f, "KES"),
            Currency::UGX => write!(f, "UGX"),
            Currency::TZS => write!(f, "TZS"),
            Currency::USD => write!(f, "USD"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "KES" => Ok(Currency::KES),
            "UGX" => Ok(Currency::UGX),
            "TZS" => Ok(Currency::TZS),
            "USD" => Ok(Currency::USD),
            _ => Err(format!("Invalid currency: {}", s)),
        }
    }
}
