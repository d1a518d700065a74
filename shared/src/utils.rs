// Parsing of numbers typed by a user, shared by the CLI and the GUI.

pub mod brazilian_format {
    use crate::models::Number;
    use anyhow::{anyhow, bail, Result};
    use std::str::FromStr;

    /// Parses "1234", "-15", "1234.56" or "1234,56" into a `Number`.
    ///
    /// A comma is accepted as decimal separator. Thousand separators are not
    /// supported: "1.234,56" is rejected rather than guessed at.
    pub fn parse_number(s: &str) -> Result<Number> {
        let normalized = s.trim().replace(',', ".");
        if normalized.is_empty() {
            bail!("nenhum número informado");
        }

        if normalized.contains('.') {
            let value = f64::from_str(&normalized)
                .map_err(|e| anyhow!("número inválido '{}': {}", s.trim(), e))?;
            if !value.is_finite() {
                bail!("número inválido '{}'", s.trim());
            }
            Ok(Number::Decimal(value))
        } else {
            i128::from_str(&normalized)
                .map(Number::Integer)
                .map_err(|e| anyhow!("número inválido '{}': {}", s.trim(), e))
        }
    }

    /// True when the text carries a fractional separator, whatever its value.
    pub fn has_decimal_separator(s: &str) -> bool {
        s.contains('.') || s.contains(',')
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_integer() {
            assert_eq!(parse_number("1234").unwrap(), Number::Integer(1234));
            assert_eq!(parse_number("  -15 ").unwrap(), Number::Integer(-15));
        }

        #[test]
        fn test_parse_decimal_point() {
            assert_eq!(parse_number("1234.56").unwrap(), Number::Decimal(1234.56));
        }

        #[test]
        fn test_parse_decimal_comma() {
            assert_eq!(parse_number("99,90").unwrap(), Number::Decimal(99.9));
            assert_eq!(parse_number("5,0").unwrap(), Number::Decimal(5.0));
        }

        #[test]
        fn test_parse_rejects_garbage() {
            assert!(parse_number("abc").is_err());
            assert!(parse_number("").is_err());
            assert!(parse_number("   ").is_err());
            assert!(parse_number("1.234,56").is_err());
            assert!(parse_number("12a").is_err());
        }

        #[test]
        fn test_parse_rejects_non_finite() {
            assert!(parse_number("inf.").is_err());
            assert!(parse_number("NaN.").is_err());
        }

        #[test]
        fn test_has_decimal_separator() {
            assert!(has_decimal_separator("5.0"));
            assert!(has_decimal_separator("5,5"));
            assert!(!has_decimal_separator("5"));
        }
    }
}
