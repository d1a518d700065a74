// Monetary amounts: whole units and cents, each spelled as a cardinal.
use super::cardinal::{spell_unsigned, MAX_CARDINAL};
use super::NumberConverter;
use crate::data::lexicon::{NEGATIVE_PREFIX, ZERO};
use crate::error::{EngineError, EngineResult};
use serde_json::Value;
use shared::models::{CurrencyVocabulary, Number};

/// Spells out `amount` in Brazilian reais.
pub fn to_currency(amount: impl Into<Number>) -> EngineResult<String> {
    to_currency_with(amount, &CurrencyVocabulary::default())
}

/// Spells out `amount` using the given currency vocabulary.
///
/// The amount is rounded to whole cents first, half to even, so 0.1 + 0.2
/// reads "trinta centavos".
pub fn to_currency_with(
    amount: impl Into<Number>,
    vocabulary: &CurrencyVocabulary,
) -> EngineResult<String> {
    let amount = amount.into();
    let (units, cents) = split_amount(amount)?;

    let mut parts = Vec::with_capacity(2);
    if units > 0 {
        parts.push(format!("{} {}", spell_unsigned(units)?, vocabulary.unit(units)));
    }
    if cents > 0 {
        parts.push(format!("{} {}", spell_unsigned(cents)?, vocabulary.subunit(cents)));
    }

    let spelled = if parts.is_empty() {
        format!("{} {}", ZERO, vocabulary.unit_plural)
    } else {
        parts.join(" e ")
    };
    // sign is taken before rounding: -0.001 reads "menos zero reais"
    let text = if amount.is_negative() {
        format!("{} {}", NEGATIVE_PREFIX, spelled)
    } else {
        spelled
    };

    tracing::debug!(%amount, symbol = %vocabulary.symbol, %text, "currency conversion");
    Ok(text)
}

/// Returns (whole units, cents in 0..=99) of the absolute value.
fn split_amount(amount: Number) -> EngineResult<(u128, u128)> {
    match amount {
        Number::Integer(value) => Ok((value.unsigned_abs(), 0)),
        Number::Decimal(value) => {
            if !value.is_finite() {
                return Err(EngineError::InvalidType(format!(
                    "esperava um valor monetário finito, recebi {}",
                    value
                )));
            }
            let scaled = (value.abs() * 100.0).round_ties_even();
            if scaled >= ((MAX_CARDINAL + 1) * 100) as f64 {
                return Err(EngineError::OutOfRange(format!(
                    "{} é grande demais; máximo suportado: {}",
                    value, MAX_CARDINAL
                )));
            }
            let total_cents = scaled as u128;
            Ok((total_cents / 100, total_cents % 100))
        }
    }
}

/// Currency conversion behind the `NumberConverter` seam.
#[derive(Debug, Clone, Default)]
pub struct Currency {
    pub vocabulary: CurrencyVocabulary,
}

impl Currency {
    pub fn new(vocabulary: CurrencyVocabulary) -> Self {
        Self { vocabulary }
    }
}

impl NumberConverter for Currency {
    fn name(&self) -> &str {
        "currency"
    }

    fn parameters(&self) -> Value {
        serde_json::json!({ "vocabulary": self.vocabulary })
    }

    fn convert(&self, number: Number) -> EngineResult<String> {
        to_currency_with(number, &self.vocabulary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_units() {
        assert_eq!(to_currency(1).unwrap(), "um real");
        assert_eq!(to_currency(2).unwrap(), "dois reais");
        assert_eq!(to_currency(1_000_000).unwrap(), "um milhão reais");
        assert_eq!(to_currency(100.0).unwrap(), "cem reais");
    }

    #[test]
    fn test_cents_only() {
        assert_eq!(to_currency(0.01).unwrap(), "um centavo");
        assert_eq!(to_currency(0.5).unwrap(), "cinquenta centavos");
        assert_eq!(to_currency(0.99).unwrap(), "noventa e nove centavos");
    }

    #[test]
    fn test_units_and_cents() {
        assert_eq!(
            to_currency(1234.56).unwrap(),
            "mil duzentos e trinta e quatro reais e cinquenta e seis centavos"
        );
        assert_eq!(to_currency(1.01).unwrap(), "um real e um centavo");
        assert_eq!(to_currency(99.90).unwrap(), "noventa e nove reais e noventa centavos");
    }

    #[test]
    fn test_zero() {
        assert_eq!(to_currency(0).unwrap(), "zero reais");
        assert_eq!(to_currency(0.0).unwrap(), "zero reais");
        assert_eq!(to_currency(0.004).unwrap(), "zero reais");
        assert_eq!(to_currency(-0.0).unwrap(), "zero reais");
    }

    #[test]
    fn test_negative_rounding_to_zero_keeps_sign() {
        assert_eq!(to_currency(-0.001).unwrap(), "menos zero reais");
        assert_eq!(to_currency(-0.004).unwrap(), "menos zero reais");
        assert_eq!(to_currency_with(-0.001, &CurrencyVocabulary::eur()).unwrap(), "menos zero euros");
    }

    #[test]
    fn test_floating_point_noise_is_rounded_away() {
        assert_eq!(to_currency(0.1 + 0.2).unwrap(), "trinta centavos");
        assert_eq!(to_currency(19.99).unwrap(), "dezenove reais e noventa e nove centavos");
    }

    #[test]
    fn test_rounding_carries_into_units() {
        assert_eq!(to_currency(0.999).unwrap(), "um real");
    }

    #[test]
    fn test_negative() {
        assert_eq!(to_currency(-1).unwrap(), "menos um real");
        assert_eq!(to_currency(-2.5).unwrap(), "menos dois reais e cinquenta centavos");
    }

    #[test]
    fn test_other_vocabulary() {
        let usd = CurrencyVocabulary::usd();
        assert_eq!(to_currency_with(1, &usd).unwrap(), "um dólar");
        assert_eq!(to_currency_with(3.02, &usd).unwrap(), "três dólares e dois centavos");
        assert_eq!(to_currency_with(0, &CurrencyVocabulary::eur()).unwrap(), "zero euros");
    }

    #[test]
    fn test_errors() {
        assert!(matches!(to_currency(f64::NAN), Err(EngineError::InvalidType(_))));
        assert!(matches!(to_currency(1e18), Err(EngineError::OutOfRange(_))));
        assert!(matches!(
            to_currency(1_000_000_000_000_000i64),
            Err(EngineError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_converter_trait() {
        let converter = Currency::new(CurrencyVocabulary::usd());
        assert_eq!(converter.name(), "currency");
        assert_eq!(converter.parameters()["vocabulary"]["symbol"], "US$");
        assert_eq!(converter.convert(Number::Integer(2)).unwrap(), "dois dólares");
    }
}
