use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigFile(#[from] toml::de::Error),

    #[error("Observer code '{0}' is listed more than once")]
    DuplicateObserverCode(String),

    #[error("Invalid observer entry '{code}' -> '{abbreviation}'")]
    InvalidObserverEntry { code: String, abbreviation: String },

    #[error("Missing data line after epoch JD {jd:.5}")]
    TruncatedEphemeris { jd: f64 },
}

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Why a line was not transcoded. Rejected lines are skipped, never fatal.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("line is {0} characters, need at least 64")]
    TooShort(usize),

    #[error("line is {0} characters, limit is 200")]
    TooLong(usize),

    #[error("line contains non-ASCII characters")]
    NotAscii,

    #[error("offset 22 is not a space")]
    MissingSeparator,

    #[error("date/time digit block stops at offset {stop}, expected 40")]
    DigitBlock { stop: usize },
}
