pub mod models;
pub mod utils;

pub use models::{ConversionMode, CurrencyCode, CurrencyVocabulary, Gender, Number};
