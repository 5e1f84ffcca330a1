use std::fmt;

#[derive(Debug)]
pub enum CounterError {
    InvalidConfig(String),
    Parse(String),
    Io(String),
}

impl fmt::Display for CounterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CounterError::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            CounterError::Parse(msg) => write!(f, "parse error: {msg}"),
            CounterError::Io(msg) => write!(f, "io error: {msg}"),
        }
    }
}

impl std::error::Error for CounterError {}

impl From<std::io::Error> for CounterError {
    fn from(err: std::io::Error) -> Self {
        CounterError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CounterError {
    fn from(err: serde_json::Error) -> Self {
        CounterError::Parse(err.to_string())
    }
}
