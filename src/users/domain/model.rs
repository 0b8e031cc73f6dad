use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult, Role, UNLIMITED_BOOKS};
use crate::users::domain::Member;

// UserEntity abstracts a library member. The role, and with it the borrow
// capacity, is fixed at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserEntity {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    role: Role,
    // titles of the books currently held, in borrow order
    #[serde(default)]
    borrowed_books: Vec<String>,
}

impl UserEntity {
    pub fn new(id: &str, first_name: &str, last_name: &str, email: &str, role: Role) -> Self {
        Self {
            id: id.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            role,
            borrowed_books: vec![],
        }
    }

    pub fn borrowed_books(&self) -> &[String] {
        &self.borrowed_books
    }

    pub fn has_book(&self, title: &str) -> bool {
        self.borrowed_books.iter().any(|t| t.to_lowercase() == title.to_lowercase())
    }

    pub fn can_borrow(&self) -> bool {
        self.borrowed_books.len() < self.max_books()
    }

    pub fn add_book(&mut self, title: &str) -> LibraryResult<()> {
        if self.has_book(title) {
            return Err(LibraryError::invalid_state(
                format!("user {} already holds {}", self.id, title).as_str(), None));
        }
        if !self.can_borrow() {
            return Err(LibraryError::capacity_exceeded(
                format!("user {} has already borrowed the maximum number of books", self.id).as_str(),
                self.max_books()));
        }
        self.borrowed_books.push(title.to_string());
        Ok(())
    }

    pub fn remove_book(&mut self, title: &str) -> bool {
        let lowered = title.to_lowercase();
        if let Some(pos) = self.borrowed_books.iter().position(|t| t.to_lowercase() == lowered) {
            self.borrowed_books.remove(pos);
            true
        } else {
            false
        }
    }
}

impl Identifiable for UserEntity {
    fn id(&self) -> String {
        self.id.to_string()
    }
}

impl Member for UserEntity {
    fn role(&self) -> Role {
        self.role
    }

    fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    fn email(&self) -> &str {
        self.email.as_str()
    }
}

impl Display for UserEntity {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let limit = if self.max_books() == UNLIMITED_BOOKS {
            "unlimited".to_string()
        } else {
            self.max_books().to_string()
        };
        write!(f, "{} {} {} {} {} ({}/{}) [{}]", self.id, self.first_name, self.last_name, self.email,
               self.role, self.borrowed_books.len(), limit, self.borrowed_books.join(", "))
    }
}
