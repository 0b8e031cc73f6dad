use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;

// BookEntity is an immutable catalog entry; a status change yields a new value
// that replaces the old one, matched by title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookEntity {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub status: BookStatus,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, year: i32, status: BookStatus) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            year,
            status,
        }
    }

    pub fn with_status(&self, status: BookStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    pub fn same_title(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.title.to_string()
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn status(&self) -> BookStatus {
        self.status
    }
}

impl Display for BookEntity {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}, {}, {}, status: {}", self.title, self.author, self.year, self.status)
    }
}
