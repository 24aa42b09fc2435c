//! Supported dashboard locales.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Languages the dashboard ships strings for.
///
/// Portuguese is the default: the platform's home market is Brazil.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    #[default]
    Pt,
}

impl Locale {
    /// The other supported locale. The header language button flips
    /// between the two.
    pub fn toggled(self) -> Self {
        match self {
            Locale::En => Locale::Pt,
            Locale::Pt => Locale::En,
        }
    }

    /// BCP-47 tag used for locale-aware formatting.
    pub fn bcp47(self) -> &'static str {
        match self {
            Locale::En => "en-US",
            Locale::Pt => "pt-BR",
        }
    }

    /// Short code as stored in client state ("en" / "pt").
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Pt => "pt",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when parsing an unknown locale code.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported locale '{0}'")]
pub struct LocaleParseError(pub String);

impl FromStr for Locale {
    type Err = LocaleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" | "en-US" => Ok(Locale::En),
            "pt" | "pt-BR" => Ok(Locale::Pt),
            other => Err(LocaleParseError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_is_identity() {
        assert_eq!(Locale::En.toggled().toggled(), Locale::En);
        assert_eq!(Locale::Pt.toggled(), Locale::En);
    }

    #[test]
    fn parses_short_and_bcp47_codes() {
        assert_eq!("pt".parse::<Locale>().unwrap(), Locale::Pt);
        assert_eq!("en-US".parse::<Locale>().unwrap(), Locale::En);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn serializes_as_short_code() {
        assert_eq!(serde_json::to_string(&Locale::Pt).unwrap(), r#""pt""#);
        let parsed: Locale = serde_json::from_str(r#""en""#).unwrap();
        assert_eq!(parsed, Locale::En);
    }
}
