use std::{error::Error, fmt, io};

/// Failure of a single echo request send.
#[derive(Debug)]
pub enum SendError {
    /// The send to this target was skipped. The run counts it and goes on.
    Recoverable {
        operation: &'static str,
        source: io::Error,
    },
    /// The run must stop and the process exit with a failure status.
    Fatal { message: String },
}

impl SendError {
    pub(crate) fn recoverable(operation: &'static str, source: io::Error) -> Self {
        SendError::Recoverable { operation, source }
    }

    pub(crate) fn fatal(message: impl Into<String>) -> Self {
        SendError::Fatal { message: message.into() }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, SendError::Fatal { .. })
    }
}

impl fmt::Display for SendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            SendError::Recoverable { operation, source } => write!(f, "{operation}: {source}"),
            SendError::Fatal { message } => write!(f, "{message}"),
        }
    }
}

impl Error for SendError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SendError::Recoverable { source, .. } => Some(source),
            SendError::Fatal { .. } => None,
        }
    }
}

/// Invalid command line. Always fatal.
#[derive(Debug)]
pub struct ConfigError {
    pub message: String,
    // no chained error
}

impl ConfigError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        ConfigError { message: message.into() }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.message)
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}
