// Turns the text a user typed plus the selected mode into words.
// Both the CLI and the GUI go through here, so the input rules live in one place:
// comma works as decimal separator, ordinals refuse any decimal, and plain
// cardinals refuse a fractional part.
use crate::config::settings::EngineSettings;
use crate::converters::{Cardinal, Currency, NumberConverter, Ordinal};
use crate::error::{EngineError, EngineResult};
use shared::models::{ConversionMode, Gender, Number};
use shared::utils::brazilian_format;

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub input: String,
    pub mode: ConversionMode,
    pub feminine: bool,
}

impl ConversionRequest {
    pub fn new(input: impl Into<String>, mode: ConversionMode) -> Self {
        Self {
            input: input.into(),
            mode,
            feminine: false,
        }
    }

    pub fn feminine(mut self, feminine: bool) -> Self {
        self.feminine = feminine;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConversionService {
    settings: EngineSettings,
}

impl ConversionService {
    pub fn new(settings: EngineSettings) -> Self {
        ConversionService { settings }
    }

    pub fn convert(&self, request: &ConversionRequest) -> EngineResult<String> {
        let number = brazilian_format::parse_number(&request.input)
            .map_err(|e| EngineError::InvalidInput(e.to_string()))?;

        match request.mode {
            ConversionMode::Ordinal if brazilian_format::has_decimal_separator(&request.input) => {
                return Err(EngineError::UnsupportedCombination(
                    "ordinais não suportam decimais".to_string(),
                ));
            }
            ConversionMode::Cardinal if number.has_fraction() => {
                return Err(EngineError::UnsupportedCombination(
                    "use o modo moeda pra converter valores com centavos".to_string(),
                ));
            }
            _ => {}
        }

        let converter = self.converter_for(request);
        tracing::info!(
            input = %request.input,
            converter = converter.name(),
            parameters = %converter.parameters(),
            "Dispatching conversion request."
        );
        self.run(converter.as_ref(), number)
    }

    fn converter_for(&self, request: &ConversionRequest) -> Box<dyn NumberConverter> {
        match request.mode {
            ConversionMode::Cardinal => Box::new(Cardinal::new(false)),
            ConversionMode::Currency => Box::new(Currency::new(self.settings.currency.clone())),
            ConversionMode::Ordinal => {
                let gender = if request.feminine {
                    Gender::Feminine
                } else {
                    self.settings.ordinal_gender()
                };
                Box::new(Ordinal::new(gender))
            }
        }
    }

    fn run(&self, converter: &dyn NumberConverter, number: Number) -> EngineResult<String> {
        converter.convert(number).map_err(|err| {
            tracing::warn!(converter = converter.name(), %number, error = %err, "conversion failed");
            err
        })
    }
}
