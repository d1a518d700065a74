// Ordinal numbers from 1 to 1000.
use super::NumberConverter;
use crate::data::ordinals::{lookup, MAX_ORDINAL, MIN_ORDINAL};
use crate::error::{EngineError, EngineResult};
use serde_json::Value;
use shared::models::{Gender, Number};

/// Spells out `number` as an ordinal, e.g. 42 -> "quadragésimo segundo".
///
/// Only integers in 1..=1000 are accepted; any decimal is an `InvalidType`.
pub fn to_ordinal(number: impl Into<Number>, feminine: bool) -> EngineResult<String> {
    to_ordinal_gendered(number, Gender::from_feminine(feminine))
}

pub fn to_ordinal_gendered(number: impl Into<Number>, gender: Gender) -> EngineResult<String> {
    let number = number.into();
    let value = match number {
        Number::Integer(value) => value,
        Number::Decimal(value) => {
            return Err(EngineError::InvalidType(format!(
                "ordinais só funcionam com inteiros, recebi {}",
                value
            )))
        }
    };
    if value < MIN_ORDINAL as i128 || value > MAX_ORDINAL as i128 {
        return Err(EngineError::OutOfRange(format!(
            "ordinais suportados de {} a {}, recebi {}",
            MIN_ORDINAL, MAX_ORDINAL, value
        )));
    }

    let text = compose(value as u16, gender);
    tracing::debug!(%number, ?gender, %text, "ordinal conversion");
    Ok(text)
}

fn compose(value: u16, gender: Gender) -> String {
    if let Some(entry) = lookup(value) {
        return entry.word(gender).to_string();
    }

    let mut parts = Vec::with_capacity(3);
    let mut rest = value;

    if rest >= 100 {
        parts.push(word(rest / 100 * 100, gender));
        rest %= 100;
    }
    if rest >= 20 {
        parts.push(word(rest / 10 * 10, gender));
        rest %= 10;
    }
    if rest > 0 {
        parts.push(word(rest, gender));
    }

    parts.join(" ")
}

fn word(key: u16, gender: Gender) -> &'static str {
    // every hundred, ten and unit below 1000 is in the table
    lookup(key).map(|entry| entry.word(gender)).unwrap_or_default()
}

/// Ordinal conversion behind the `NumberConverter` seam.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ordinal {
    pub gender: Gender,
}

impl Ordinal {
    pub fn new(gender: Gender) -> Self {
        Self { gender }
    }
}

impl NumberConverter for Ordinal {
    fn name(&self) -> &str {
        "ordinal"
    }

    fn parameters(&self) -> Value {
        serde_json::json!({ "gender": self.gender })
    }

    fn convert(&self, number: Number) -> EngineResult<String> {
        to_ordinal_gendered(number, self.gender)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_hits() {
        assert_eq!(to_ordinal(1, false).unwrap(), "primeiro");
        assert_eq!(to_ordinal(1, true).unwrap(), "primeira");
        assert_eq!(to_ordinal(5, false).unwrap(), "quinto");
        assert_eq!(to_ordinal(11, false).unwrap(), "décimo primeiro");
        assert_eq!(to_ordinal(20, true).unwrap(), "vigésima");
        assert_eq!(to_ordinal(300, false).unwrap(), "trecentésimo");
        assert_eq!(to_ordinal(1000, false).unwrap(), "milésimo");
    }

    #[test]
    fn test_composed() {
        assert_eq!(to_ordinal(42, false).unwrap(), "quadragésimo segundo");
        assert_eq!(to_ordinal(42, true).unwrap(), "quadragésima segunda");
        assert_eq!(to_ordinal(101, false).unwrap(), "centésimo primeiro");
        assert_eq!(to_ordinal(115, false).unwrap(), "centésimo décimo quinto");
        assert_eq!(to_ordinal(120, false).unwrap(), "centésimo vigésimo");
        assert_eq!(
            to_ordinal(999, false).unwrap(),
            "noningentésimo nonagésimo nono"
        );
        assert_eq!(
            to_ordinal(563, true).unwrap(),
            "quingentésima sexagésima terceira"
        );
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(to_ordinal(0, false), Err(EngineError::OutOfRange(_))));
        assert!(matches!(to_ordinal(1001, false), Err(EngineError::OutOfRange(_))));
        assert!(matches!(to_ordinal(-3, false), Err(EngineError::OutOfRange(_))));
    }

    #[test]
    fn test_decimals_are_refused() {
        assert!(matches!(to_ordinal(2.5, false), Err(EngineError::InvalidType(_))));
        assert!(matches!(to_ordinal(2.0, false), Err(EngineError::InvalidType(_))));
    }

    #[test]
    fn test_every_ordinal_is_clean() {
        for n in 1..=1000u16 {
            for gender in [Gender::Masculine, Gender::Feminine] {
                let text = to_ordinal_gendered(n, gender).unwrap();
                assert!(!text.is_empty());
                assert_eq!(text.trim(), text);
                assert!(!text.contains("  "), "{} -> {:?}", n, text);
            }
        }
    }

    #[test]
    fn test_converter_trait() {
        let converter = Ordinal::new(Gender::Feminine);
        assert_eq!(converter.parameters()["gender"], "feminine");
        assert_eq!(converter.convert(Number::Integer(3)).unwrap(), "terceira");
    }
}
