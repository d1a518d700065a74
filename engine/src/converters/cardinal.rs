// Cardinal numbers: splits into base-1000 groups, names each magnitude and
// joins the groups with "e", a comma or a bare space.
//
// 1.234.567:
//   1   -> "um milhão"
//   234 -> "duzentos e trinta e quatro mil"
//   567 -> "quinhentos e sessenta e sete"
//   => "um milhão, duzentos e trinta e quatro mil, quinhentos e sessenta e sete"
use super::group::convert_group;
use super::NumberConverter;
use crate::data::lexicon::{CLASSES, NEGATIVE_PREFIX, THOUSAND_POSITION, ZERO};
use crate::error::{EngineError, EngineResult};
use serde_json::Value;
use shared::models::Number;

/// Largest magnitude with a class name: 999 trilhões, 999 bilhões, ... 999.
pub const MAX_CARDINAL: u128 = 999_999_999_999_999;

/// Spells out `number` as a cardinal.
///
/// Decimals are refused with `AmbiguousFraction` unless `allow_fraction` is
/// set, in which case the fractional part is truncated. A decimal that is
/// integral ("5.0") converts either way.
pub fn to_cardinal(number: impl Into<Number>, allow_fraction: bool) -> EngineResult<String> {
    let number = number.into();
    let value = integral_value(number, allow_fraction)?;
    let text = spell_signed(value)?;
    tracing::debug!(%number, allow_fraction, %text, "cardinal conversion");
    Ok(text)
}

fn integral_value(number: Number, allow_fraction: bool) -> EngineResult<i128> {
    match number {
        Number::Integer(value) => Ok(value),
        Number::Decimal(value) => {
            if !value.is_finite() {
                return Err(EngineError::InvalidType(format!(
                    "esperava um número finito, recebi {}",
                    value
                )));
            }
            if value.fract() != 0.0 && !allow_fraction {
                return Err(EngineError::AmbiguousFraction(format!(
                    "{} tem casas decimais; use a conversão de moeda pra valores com centavos",
                    value
                )));
            }
            let truncated = value.trunc();
            if truncated.abs() > MAX_CARDINAL as f64 {
                return Err(out_of_range(truncated));
            }
            Ok(truncated as i128)
        }
    }
}

pub(crate) fn spell_signed(value: i128) -> EngineResult<String> {
    let magnitude = value.unsigned_abs();
    let text = spell_unsigned(magnitude)?;
    if value < 0 {
        Ok(format!("{} {}", NEGATIVE_PREFIX, text))
    } else {
        Ok(text)
    }
}

/// Spells out a non-negative integer up to `MAX_CARDINAL`.
pub(crate) fn spell_unsigned(value: u128) -> EngineResult<String> {
    if value == 0 {
        return Ok(ZERO.to_string());
    }
    if value > MAX_CARDINAL {
        return Err(out_of_range(value));
    }

    let parts = named_groups(value)?;
    Ok(join_groups(&parts))
}

fn out_of_range(value: impl std::fmt::Display) -> EngineError {
    EngineError::OutOfRange(format!(
        "{} é grande demais; máximo suportado: {}",
        value, MAX_CARDINAL
    ))
}

/// A non-zero group already carrying its class name.
#[derive(Debug, Clone, PartialEq)]
struct NamedGroup {
    text: String,
    value: u16,
}

/// Non-zero groups, most significant first.
fn named_groups(value: u128) -> EngineResult<Vec<NamedGroup>> {
    let mut parts = Vec::new();
    let mut rest = value;
    let mut position = 0usize;

    while rest > 0 {
        let group = (rest % 1000) as u16;
        rest /= 1000;

        if position >= CLASSES.len() {
            return Err(out_of_range(value));
        }

        if group > 0 {
            let text = with_class_name(group, position);
            tracing::trace!(group, position, %text, "named group");
            parts.push(NamedGroup { text, value: group });
        }
        position += 1;
    }

    parts.reverse();
    Ok(parts)
}

fn with_class_name(group: u16, position: usize) -> String {
    let class = CLASSES[position];
    match (position, group) {
        (0, _) => convert_group(group),
        // "mil", never "um mil"
        (THOUSAND_POSITION, 1) => class.singular.to_string(),
        (THOUSAND_POSITION, _) => format!("{} {}", convert_group(group), class.plural),
        (_, 1) => format!("um {}", class.singular),
        (_, _) => format!("{} {}", convert_group(group), class.name(group)),
    }
}

fn connective(current: &NamedGroup, next: &NamedGroup) -> &'static str {
    if next.value < 100 || next.value % 100 == 0 {
        " e "
    } else if current.value == 1 && current.text == CLASSES[THOUSAND_POSITION].singular {
        " "
    } else {
        ", "
    }
}

fn join_groups(parts: &[NamedGroup]) -> String {
    let mut out = String::new();
    for (idx, part) in parts.iter().enumerate() {
        out.push_str(&part.text);
        if let Some(next) = parts.get(idx + 1) {
            out.push_str(connective(part, next));
        }
    }
    out
}

/// Cardinal conversion behind the `NumberConverter` seam.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cardinal {
    pub allow_fraction: bool,
}

impl Cardinal {
    pub fn new(allow_fraction: bool) -> Self {
        Self { allow_fraction }
    }
}

impl NumberConverter for Cardinal {
    fn name(&self) -> &str {
        "cardinal"
    }

    fn parameters(&self) -> Value {
        serde_json::json!({ "allow_fraction": self.allow_fraction })
    }

    fn convert(&self, number: Number) -> EngineResult<String> {
        to_cardinal(number, self.allow_fraction)
    }
}
