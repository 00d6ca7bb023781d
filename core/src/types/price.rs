use crate::error::ValidationError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Amount in major currency units (euros), kept at two decimal places.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    pub const ZERO: Price = Price(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Result<Self, ValidationError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(ValidationError::NegativePrice(amount));
        }
        Ok(Self(amount.round_dp(2)))
    }

    pub fn amount(self) -> Decimal {
        self.0
    }

    /// Formats as shown on product cards, e.g. `€39.00`.
    pub fn display_eur(self) -> String {
        format!("€{:.2}", self.0)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = ValidationError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn rounds_to_cents() {
        let price = Price::new(dec("12.999")).unwrap();
        assert_eq!(price.amount(), dec("13.00"));
    }

    #[test]
    fn rejects_negative() {
        assert_eq!(
            Price::new(dec("-1")),
            Err(ValidationError::NegativePrice(dec("-1")))
        );
        assert!(Price::new(Decimal::ZERO).is_ok());
    }

    #[test]
    fn display_eur_pads_decimals() {
        assert_eq!(Price::new(dec("39")).unwrap().display_eur(), "€39.00");
        assert_eq!(Price::new(dec("12.99")).unwrap().display_eur(), "€12.99");
    }

    #[test]
    fn deserializes_from_json_number() {
        let price: Price = serde_json::from_str("9.99").unwrap();
        assert_eq!(price.amount(), dec("9.99"));
        assert!(serde_json::from_str::<Price>("-3").is_err());
    }
}
