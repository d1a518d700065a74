// Request handling shared by the command line and the desktop front-end
pub mod conversion_service;

pub use conversion_service::{ConversionRequest, ConversionService};
