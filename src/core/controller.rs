use std::fmt;
use std::fmt::{Display, Formatter};
use crate::catalog::domain::SharedCatalog;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::gateway::GatewayPublisherVia;

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Configuration,
    pub catalog: SharedCatalog,
    pub via: GatewayPublisherVia,
}

impl AppState {
    pub fn new(config: Configuration, catalog: SharedCatalog, via: GatewayPublisherVia) -> AppState {
        AppState {
            config,
            catalog,
            via,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Severity {
    // the operation was refused and nothing changed
    Warning,
    // the operation failed
    Error,
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "Warning"),
            Severity::Error => write!(f, "Error"),
        }
    }
}

pub type OperatorError = (Severity, String);

impl From<CommandError> for OperatorError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::NotFound { .. } => {
                (Severity::Warning, err.message().to_string())
            }
            CommandError::InvalidState { .. } => {
                (Severity::Warning, err.message().to_string())
            }
            CommandError::CapacityExceeded { max_books, .. } => {
                (Severity::Warning, format!("{} (limit {})", err.message(), max_books))
            }
            CommandError::DuplicateKey { .. } => {
                (Severity::Warning, err.message().to_string())
            }
            CommandError::Validation { .. } => {
                (Severity::Warning, err.message().to_string())
            }
            CommandError::Persistence { .. } => {
                (Severity::Error, err.message().to_string())
            }
            CommandError::Serialization { .. } => {
                (Severity::Error, err.message().to_string())
            }
            CommandError::Runtime { .. } => {
                (Severity::Error, err.message().to_string())
            }
        }
    }
}
