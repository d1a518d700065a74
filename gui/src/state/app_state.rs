// Application state for the GUI.
// Held in a Dioxus signal by the root component; kept free of Dioxus types so
// the conversion flow can be tested without opening a window.

use crate::config::AppConfig;
use engine::config::settings::EngineSettings;
use engine::services::{ConversionRequest, ConversionService};
use shared::models::ConversionMode;

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Converted(String),
    Failed(String),
}

impl Outcome {
    pub fn text(&self) -> &str {
        match self {
            Outcome::Converted(text) | Outcome::Failed(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub input: String,
    pub mode: ConversionMode,
    pub feminine: bool,
    pub outcome: Option<Outcome>,
    service: ConversionService,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            input: String::new(),
            mode: ConversionMode::default(),
            feminine: false,
            outcome: None,
            service: ConversionService::default(),
        }
    }
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let settings = EngineSettings {
            currency: config.app.currency.vocabulary(),
            ..EngineSettings::default()
        };
        Self {
            mode: config.app.default_mode,
            service: ConversionService::new(settings),
            ..Self::default()
        }
    }

    pub fn set_mode(&mut self, mode: ConversionMode) {
        self.mode = mode;
    }

    pub fn toggle_feminine(&mut self) {
        self.feminine = !self.feminine;
    }

    /// Converts the current input and stores the result or the error text.
    pub fn convert(&mut self) {
        let input = self.input.trim();
        if input.is_empty() {
            self.outcome = Some(Outcome::Failed("Digite um número pra converter!".to_string()));
            return;
        }

        let request = ConversionRequest::new(input, self.mode).feminine(self.feminine);
        self.outcome = Some(match self.service.convert(&request) {
            Ok(text) => Outcome::Converted(text),
            Err(e) => {
                tracing::warn!(input = %request.input, mode = ?request.mode, error = %e, "conversion failed");
                Outcome::Failed(format!("Erro: {}", e))
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(input: &str, mode: ConversionMode) -> AppState {
        let mut state = AppState::default();
        state.input = input.to_string();
        state.set_mode(mode);
        state
    }

    #[test]
    fn test_empty_input_asks_for_a_number() {
        let mut state = state_with("   ", ConversionMode::Cardinal);
        state.convert();
        let outcome = state.outcome.unwrap();
        assert!(outcome.is_error());
        assert_eq!(outcome.text(), "Digite um número pra converter!");
    }

    #[test]
    fn test_modes() {
        let mut state = state_with("42", ConversionMode::Cardinal);
        state.convert();
        assert_eq!(state.outcome, Some(Outcome::Converted("quarenta e dois".to_string())));

        state.set_mode(ConversionMode::Currency);
        state.convert();
        assert_eq!(state.outcome, Some(Outcome::Converted("quarenta e dois reais".to_string())));

        state.set_mode(ConversionMode::Ordinal);
        state.toggle_feminine();
        state.convert();
        assert_eq!(state.outcome, Some(Outcome::Converted("quadragésima segunda".to_string())));
    }

    #[test]
    fn test_comma_decimal_in_currency_mode() {
        let mut state = state_with("99,90", ConversionMode::Currency);
        state.convert();
        assert_eq!(
            state.outcome.unwrap().text(),
            "noventa e nove reais e noventa centavos"
        );
    }

    #[test]
    fn test_fraction_is_refused_outside_currency() {
        for mode in [ConversionMode::Cardinal, ConversionMode::Ordinal] {
            let mut state = state_with("1,5", mode);
            state.convert();
            let outcome = state.outcome.unwrap();
            assert!(outcome.is_error(), "{:?} accepted a fraction", mode);
            assert!(outcome.text().starts_with("Erro: "));
        }
    }

    #[test]
    fn test_garbage_is_reported() {
        let mut state = state_with("doze", ConversionMode::Cardinal);
        state.convert();
        assert!(state.outcome.unwrap().is_error());
    }

    #[test]
    fn test_config_sets_mode_and_currency() {
        let mut config = AppConfig::load_default().unwrap();
        config.app.default_mode = ConversionMode::Currency;
        config.app.currency = shared::models::CurrencyCode::Usd;
        let mut state = AppState::new(&config);
        assert_eq!(state.mode, ConversionMode::Currency);
        state.input = "1".to_string();
        state.convert();
        assert_eq!(state.outcome.unwrap().text(), "um dólar");
    }
}
