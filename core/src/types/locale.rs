use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Storefront language. Lithuanian is the default route locale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Lt,
    En,
}

impl Locale {
    /// Locale tag understood by the commerce backend.
    pub fn medusa_tag(self) -> &'static str {
        match self {
            Locale::Lt => "lt-LT",
            Locale::En => "en-GB",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Lt => write!(f, "lt"),
            Locale::En => write!(f, "en"),
        }
    }
}

impl FromStr for Locale {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lt" => Ok(Locale::Lt),
            "en" => Ok(Locale::En),
            other => Err(ValidationError::UnknownLocale(other.to_string())),
        }
    }
}
