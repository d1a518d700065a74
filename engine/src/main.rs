//! numextenso command-line interface.
//!
//! ```text
//! numextenso 1234              # mil duzentos e trinta e quatro
//! numextenso 1234.56 --moeda   # mil duzentos e trinta e quatro reais e cinquenta e seis centavos
//! numextenso 5 --ordinal       # quinto
//! numextenso 5 -o -f           # quinta
//! ```

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use engine::config::settings::EngineSettings;
use engine::logging::init_logging;
use engine::services::{ConversionRequest, ConversionService};
use shared::models::{ConversionMode, CurrencyCode};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

/// Converte números em extenso em português brasileiro.
#[derive(Debug, Parser)]
#[command(name = "numextenso", version, about, long_about = None, disable_version_flag = true)]
#[command(after_help = "Exemplos:\n  numextenso 1234\n  numextenso 99,90 --moeda\n  numextenso 3 --ordinal --feminino")]
struct Cli {
    /// O número a ser convertido (ponto ou vírgula pra decimal: 1234.56 ou 1234,56)
    #[arg(allow_negative_numbers = true)]
    numero: String,

    /// Formata como valor monetário (reais e centavos)
    #[arg(short = 'm', long = "moeda", visible_alias = "currency-mode")]
    moeda: bool,

    /// Converte para ordinal (primeiro, segundo...)
    #[arg(short = 'o', long = "ordinal")]
    ordinal: bool,

    /// Usa a forma feminina do ordinal (primeira, segunda...)
    #[arg(short = 'f', long = "feminino", visible_alias = "feminine")]
    feminino: bool,

    /// Moeda usada com --moeda (sobrepõe o arquivo de configuração)
    #[arg(long, value_enum)]
    currency: Option<CurrencyArg>,

    /// Arquivo JSON de configuração do motor
    #[arg(long)]
    config: Option<PathBuf>,

    /// Nível de log (error, warn, info, debug, trace)
    #[arg(short = 'l', long, default_value = "warn")]
    log_level: String,

    /// Mostra a versão
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CurrencyArg {
    Brl,
    Usd,
    Eur,
}

impl From<CurrencyArg> for CurrencyCode {
    fn from(arg: CurrencyArg) -> Self {
        match arg {
            CurrencyArg::Brl => CurrencyCode::Brl,
            CurrencyArg::Usd => CurrencyCode::Usd,
            CurrencyArg::Eur => CurrencyCode::Eur,
        }
    }
}

impl Cli {
    /// Ordinal wins over currency, which wins over the plain cardinal.
    fn mode(&self) -> ConversionMode {
        if self.ordinal {
            ConversionMode::Ordinal
        } else if self.moeda {
            ConversionMode::Currency
        } else {
            ConversionMode::Cardinal
        }
    }

    fn settings(&self) -> Result<EngineSettings> {
        let mut settings = match &self.config {
            Some(path) => EngineSettings::load_from_file(path)
                .with_context(|| format!("falha ao ler a configuração {}", path.display()))?,
            None => EngineSettings::default(),
        };
        if let Some(currency) = self.currency {
            settings.currency = CurrencyCode::from(currency).vocabulary();
        }
        Ok(settings)
    }
}

fn run(cli: &Cli) -> Result<String> {
    let service = ConversionService::new(cli.settings()?);
    let request = ConversionRequest::new(cli.numero.clone(), cli.mode()).feminine(cli.feminino);
    debug!(?request, "parsed command line");

    let text = service.convert(&request)?;
    Ok(text)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match run(&cli) {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Erro: {:#}", e);
            ExitCode::from(1)
        }
    }
}
