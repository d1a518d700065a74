// Number-to-words converters
pub mod cardinal;
pub mod currency;
pub mod group;
pub mod ordinal;

use crate::error::EngineResult;
use serde_json::Value;
use shared::models::Number;

pub use cardinal::{to_cardinal, Cardinal, MAX_CARDINAL};
pub use currency::{to_currency, to_currency_with, Currency};
pub use group::convert_group;
pub use ordinal::{to_ordinal, to_ordinal_gendered, Ordinal};

// Common trait for all converters, so surfaces can pick one per request
pub trait NumberConverter: Send + Sync {
    fn name(&self) -> &str;
    fn parameters(&self) -> Value; // Settings this instance converts with
    fn convert(&self, number: Number) -> EngineResult<String>;
}
