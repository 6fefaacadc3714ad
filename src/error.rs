use thiserror::Error;

/// Errors raised while selecting or configuring a key order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// The signature code does not name a known order.
    #[error("unsupported order signature: {0:?}")]
    UnsupportedSignature(String),

    /// A rotation origin must be made of alphabet symbols only.
    #[error("rotation origin is not well-formed: {0:?}")]
    MalformedOrigin(String),
}

/// Errors that can occur while decoding alphabet text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input contains a byte that is not an alphabet symbol.
    #[error("invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    /// A trailing group of a single symbol cannot carry a whole byte.
    #[error("invalid encoded length {0}: a trailing group needs at least two symbols")]
    InvalidLength(usize),
}

impl DecodeError {
    pub(crate) fn invalid_symbol(byte: u8, position: usize) -> Self {
        DecodeError::InvalidSymbol {
            symbol: char::from(byte),
            position,
        }
    }
}

/// Errors raised while loading the order registry.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse order configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("order '{0}' not found")]
    NotFound(String),

    #[error("order '{name}' is invalid: {source}")]
    InvalidOrder {
        name: String,
        #[source]
        source: OrderError,
    },
}

pub type Result<T> = std::result::Result<T, OrderError>;
