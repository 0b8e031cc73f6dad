use async_trait::async_trait;
use crate::core::library::LibraryError;

#[derive(Debug)]
pub enum CommandError {
    NotFound {
        message: String,
    },
    InvalidState {
        message: String,
        reason_code: Option<String>,
    },
    CapacityExceeded {
        message: String,
        max_books: usize,
    },
    DuplicateKey {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Persistence {
        message: String,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl CommandError {
    pub fn message(&self) -> &str {
        match self {
            CommandError::NotFound { message } => message,
            CommandError::InvalidState { message, .. } => message,
            CommandError::CapacityExceeded { message, .. } => message,
            CommandError::DuplicateKey { message } => message,
            CommandError::Validation { message, .. } => message,
            CommandError::Persistence { message } => message,
            CommandError::Serialization { message } => message,
            CommandError::Runtime { message, .. } => message,
        }
    }
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::InvalidState { message, reason_code } => {
                CommandError::InvalidState { message, reason_code }
            }
            LibraryError::CapacityExceeded { message, max_books } => {
                CommandError::CapacityExceeded { message, max_books }
            }
            LibraryError::DuplicateKey { message } => {
                CommandError::DuplicateKey { message }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::UnknownRole { .. } => {
                CommandError::Validation { message: other.to_string(), reason_code: Some("role".to_string()) }
            }
            LibraryError::ImportFailure { .. } | LibraryError::ExportFailure { .. } => {
                CommandError::Persistence { message: other.to_string() }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_convert_library_errors() {
        assert!(matches!(CommandError::from(LibraryError::not_found("x")), CommandError::NotFound { .. }));
        assert!(matches!(CommandError::from(LibraryError::invalid_state("x", None)), CommandError::InvalidState { .. }));
        assert!(matches!(CommandError::from(LibraryError::capacity_exceeded("x", 5)), CommandError::CapacityExceeded { max_books: 5, .. }));
        assert!(matches!(CommandError::from(LibraryError::import_failure("x", None)), CommandError::Persistence { .. }));
        assert!(matches!(CommandError::from(LibraryError::export_failure("x", None)), CommandError::Persistence { .. }));
    }

    #[tokio::test]
    async fn test_should_keep_unknown_role_message() {
        let err = CommandError::from(LibraryError::unknown_role("pirate"));
        assert!(matches!(err, CommandError::Validation { .. }));
        assert_eq!("unknown user type: pirate", err.message());
    }
}
