use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    /// The value is not the kind of number the operation takes.
    #[error("tipo inválido: {0}")]
    InvalidType(String),

    #[error("fora do intervalo suportado: {0}")]
    OutOfRange(String),

    /// A fractional value reached the integer-only cardinal path.
    #[error("número decimal passado pra conversão de inteiros: {0}")]
    AmbiguousFraction(String),

    #[error("entrada inválida: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    UnsupportedCombination(String),

    #[error("erro de configuração: {0}")]
    ConfigError(String),

    #[error("erro de I/O: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("erro de JSON: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },
}

pub type EngineResult<T> = Result<T, EngineError>;
