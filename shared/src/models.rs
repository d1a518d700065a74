use serde::{Deserialize, Serialize};
use std::fmt;

/// A numeric input as the user or a caller supplied it.
///
/// The tag matters: the ordinal path refuses any `Decimal`, and the cardinal
/// path refuses a `Decimal` with a fractional part unless asked to truncate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Number {
    Integer(i128),
    Decimal(f64),
}

impl Number {
    /// True for decimals carrying a non-zero fractional part.
    pub fn has_fraction(&self) -> bool {
        match self {
            Number::Integer(_) => false,
            Number::Decimal(value) => value.fract() != 0.0,
        }
    }

    /// Sign of the value as given, before any rounding. `-0.0` is not negative.
    pub fn is_negative(&self) -> bool {
        match self {
            Number::Integer(value) => *value < 0,
            Number::Decimal(value) => *value < 0.0,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(value) => write!(f, "{}", value),
            Number::Decimal(value) => write!(f, "{}", value),
        }
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(impl From<$t> for Number {
            fn from(value: $t) -> Self {
                Number::Integer(value as i128)
            }
        })*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, u8, u16, u32, u64, isize, usize);

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Decimal(value)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Decimal(value as f64)
    }
}

/// Grammatical gender, used by ordinals ("primeiro" / "primeira").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Masculine,
    Feminine,
}

impl Gender {
    pub fn from_feminine(feminine: bool) -> Self {
        if feminine {
            Gender::Feminine
        } else {
            Gender::Masculine
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionMode {
    #[default]
    Cardinal,
    Currency,
    Ordinal,
}

impl ConversionMode {
    pub const ALL: [ConversionMode; 3] = [
        ConversionMode::Cardinal,
        ConversionMode::Currency,
        ConversionMode::Ordinal,
    ];

    /// Label shown next to the mode selector, with a sample of the output.
    pub fn label(&self) -> &'static str {
        match self {
            ConversionMode::Cardinal => "Cardinal (quarenta e dois)",
            ConversionMode::Currency => "Moeda (quarenta e dois reais)",
            ConversionMode::Ordinal => "Ordinal (quadragésimo segundo)",
        }
    }
}

/// Words used to spell out a monetary amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyVocabulary {
    pub unit_singular: String,
    pub unit_plural: String,
    pub subunit_singular: String,
    pub subunit_plural: String,
    pub symbol: String,
}

impl CurrencyVocabulary {
    pub fn new(
        unit_singular: &str,
        unit_plural: &str,
        subunit_singular: &str,
        subunit_plural: &str,
        symbol: &str,
    ) -> Self {
        Self {
            unit_singular: unit_singular.to_string(),
            unit_plural: unit_plural.to_string(),
            subunit_singular: subunit_singular.to_string(),
            subunit_plural: subunit_plural.to_string(),
            symbol: symbol.to_string(),
        }
    }

    pub fn brl() -> Self {
        Self::new("real", "reais", "centavo", "centavos", "R$")
    }

    pub fn usd() -> Self {
        Self::new("dólar", "dólares", "centavo", "centavos", "US$")
    }

    pub fn eur() -> Self {
        Self::new("euro", "euros", "cêntimo", "cêntimos", "€")
    }

    pub fn unit(&self, count: u128) -> &str {
        if count > 1 {
            &self.unit_plural
        } else {
            &self.unit_singular
        }
    }

    pub fn subunit(&self, count: u128) -> &str {
        if count > 1 {
            &self.subunit_plural
        } else {
            &self.subunit_singular
        }
    }
}

impl Default for CurrencyVocabulary {
    fn default() -> Self {
        Self::brl()
    }
}

/// Built-in currency presets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    #[default]
    Brl,
    Usd,
    Eur,
}

impl CurrencyCode {
    pub fn vocabulary(&self) -> CurrencyVocabulary {
        match self {
            CurrencyCode::Brl => CurrencyVocabulary::brl(),
            CurrencyCode::Usd => CurrencyVocabulary::usd(),
            CurrencyCode::Eur => CurrencyVocabulary::eur(),
        }
    }
}
