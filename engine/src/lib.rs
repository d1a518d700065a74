// Engine library root
// Converts numbers to words in Brazilian Portuguese: cardinals, currency
// amounts and ordinals.

pub mod config;
pub mod converters;
pub mod data;
pub mod error;
pub mod logging;
pub mod services;

pub use converters::{
    convert_group, to_cardinal, to_currency, to_currency_with, to_ordinal, to_ordinal_gendered,
    NumberConverter, MAX_CARDINAL,
};
pub use error::{EngineError, EngineResult};
pub use shared::models::{ConversionMode, CurrencyCode, CurrencyVocabulary, Gender, Number};
