use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    NotFound {
        message: String,
    },
    // The requested transition does not apply to the current book status,
    // e.g. borrowing a borrowed book or returning a book the user does not hold.
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
    UnknownRole {
        role: String,
    },
    ImportFailure {
        message: String,
        path: Option<String>,
    },
    ExportFailure {
        message: String,
        path: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn invalid_state(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::InvalidState { message: message.to_string(), reason_code }
    }

    pub fn capacity_exceeded(message: &str, max_books: usize) -> LibraryError {
        LibraryError::CapacityExceeded { message: message.to_string(), max_books }
    }

    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn unknown_role(role: &str) -> LibraryError {
        LibraryError::UnknownRole { role: role.to_string() }
    }

    pub fn import_failure(message: &str, path: Option<String>) -> LibraryError {
        LibraryError::ImportFailure { message: message.to_string(), path }
    }

    pub fn export_failure(message: &str, path: Option<String>) -> LibraryError {
        LibraryError::ExportFailure { message: message.to_string(), path }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    // Recoverable errors abort only the current operation and leave the catalog untouched.
    pub fn is_recoverable(&self) -> bool {
        match self {
            LibraryError::NotFound { .. } => { true }
            LibraryError::InvalidState { .. } => { true }
            LibraryError::CapacityExceeded { .. } => { true }
            LibraryError::DuplicateKey { .. } => { true }
            LibraryError::Validation { .. } => { true }
            LibraryError::UnknownRole { .. } => { true }
            LibraryError::ImportFailure { .. } => { false }
            LibraryError::ExportFailure { .. } => { false }
            LibraryError::Serialization { .. } => { false }
            LibraryError::Runtime { .. } => { false }
        }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("io {:?}", err).as_str(), Some(format!("{:?}", err.kind())))
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::InvalidState { message, .. } => {
                write!(f, "{}", message)
            }
            LibraryError::CapacityExceeded { message, max_books } => {
                write!(f, "{} (limit {})", message, max_books)
            }
            LibraryError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, .. } => {
                write!(f, "{}", message)
            }
            LibraryError::UnknownRole { role } => {
                write!(f, "unknown user type: {}", role)
            }
            LibraryError::ImportFailure { message, path } => {
                match path {
                    Some(path) => write!(f, "import from {} failed: {}", path, message),
                    None => write!(f, "import failed: {}", message),
                }
            }
            LibraryError::ExportFailure { message, path } => {
                match path {
                    Some(path) => write!(f, "export to {} failed: {}", path, message),
                    None => write!(f, "export failed: {}", message),
                }
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for catalog operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookStatus {
    Available,
    Borrowed,
}

impl FromStr for BookStatus {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "AVAILABLE" => Ok(BookStatus::Available),
            "BORROWED" => Ok(BookStatus::Borrowed),
            _ => Err(LibraryError::validation(
                format!("unknown book status {:?}", s).as_str(), None)),
        }
    }
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookStatus::Available => write!(f, "AVAILABLE"),
            BookStatus::Borrowed => write!(f, "BORROWED"),
        }
    }
}

// Borrow capacity for librarians; large enough to never be reached.
pub const UNLIMITED_BOOKS: usize = usize::MAX;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Student,
    Teacher,
    Librarian,
}

impl Role {
    pub fn all() -> [Role; 3] {
        [Role::Student, Role::Teacher, Role::Librarian]
    }
}

/// Borrow capacity fixed by role.
pub fn max_books_for(role: Role) -> usize {
    match role {
        Role::Student => 5,
        Role::Teacher => 10,
        Role::Librarian => UNLIMITED_BOOKS,
    }
}

impl FromStr for Role {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "teacher" => Ok(Role::Teacher),
            "librarian" => Ok(Role::Librarian),
            _ => Err(LibraryError::unknown_role(s)),
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Role::Student => write!(f, "STUDENT"),
            Role::Teacher => write!(f, "TEACHER"),
            Role::Librarian => write!(f, "LIBRARIAN"),
        }
    }
}
