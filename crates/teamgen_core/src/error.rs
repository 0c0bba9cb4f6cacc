use thiserror::Error;

/// Upstream decoder failure while reading a roster.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Error parsing CSV: {message}")]
    Decode { message: String },
}

impl ParseError {
    pub fn decode(message: impl Into<String>) -> Self {
        ParseError::Decode {
            message: message.into(),
        }
    }

    /// Message reported by the decoder, without the prefix.
    pub fn message(&self) -> &str {
        match self {
            ParseError::Decode { message } => message,
        }
    }
}

impl From<csv::Error> for ParseError {
    fn from(err: csv::Error) -> Self {
        ParseError::decode(err.to_string())
    }
}

/// Precondition failures of the team distributor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("no players available")]
    NoPlayers,

    #[error("invalid team count")]
    InvalidTeamCount { requested: usize, players: usize },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}
