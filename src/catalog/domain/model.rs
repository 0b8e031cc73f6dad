use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::core::library::BookStatus;
use crate::users::domain::model::UserEntity;

// Catalog is the aggregate root for books, users and per-book subscriptions.
// Subscriptions are keyed by the stored book title, never by a book value,
// so they survive status changes.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    books: Vec<BookEntity>,
    users: Vec<UserEntity>,
    // book title -> subscribed user ids, in subscription order
    #[serde(default)]
    observers: BTreeMap<String, Vec<String>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn books(&self) -> &[BookEntity] {
        &self.books
    }

    pub fn users(&self) -> &[UserEntity] {
        &self.users
    }

    pub fn observers(&self) -> &BTreeMap<String, Vec<String>> {
        &self.observers
    }

    // Appends without a uniqueness check; callers that need unique titles check first.
    pub fn add_book(&mut self, book: BookEntity) {
        self.books.push(book);
    }

    pub fn add_user(&mut self, user: UserEntity) {
        self.users.push(user);
    }

    pub fn find_book(&self, title: &str) -> Option<&BookEntity> {
        self.books.iter().find(|b| b.same_title(title))
    }

    pub fn search_books(&self, query: &str) -> Vec<BookEntity> {
        let query = query.to_lowercase();
        self.books.iter()
            .filter(|b| b.title.to_lowercase().contains(query.as_str()))
            .cloned()
            .collect()
    }

    // Replaces the first book with exactly the same title. Returns false when nothing matched.
    pub fn update_book(&mut self, book: &BookEntity) -> bool {
        if let Some(existing) = self.books.iter_mut().find(|b| b.title == book.title) {
            *existing = book.clone();
            true
        } else {
            false
        }
    }

    pub fn get_books_by_status(&self, status: BookStatus) -> Vec<BookEntity> {
        self.books.iter().filter(|b| b.status == status).cloned().collect()
    }

    pub fn find_user_by_id(&self, id: &str) -> Option<&UserEntity> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn find_user_by_id_mut(&mut self, id: &str) -> Option<&mut UserEntity> {
        self.users.iter_mut().find(|u| u.id == id)
    }

    // One past the largest numeric user id, "1" for an empty catalog.
    pub fn next_user_id(&self) -> String {
        self.users.iter()
            .filter_map(|u| u.id.trim().parse::<u64>().ok())
            .max()
            .map_or(1, |max| max.saturating_add(1))
            .to_string()
    }

    pub fn add_observer_to_book(&mut self, book: &BookEntity, user: &UserEntity) {
        self.observers.entry(book.title.to_string()).or_default().push(user.id.to_string());
    }

    // Removes the first subscription of the user; drops the entry once nobody is left.
    pub fn remove_observer_from_book(&mut self, book: &BookEntity, user: &UserEntity) -> bool {
        let Some(ids) = self.observers.get_mut(book.title.as_str()) else {
            return false;
        };
        let removed = match ids.iter().position(|id| *id == user.id) {
            Some(pos) => {
                ids.remove(pos);
                true
            }
            None => false,
        };
        if ids.is_empty() {
            self.observers.remove(book.title.as_str());
        }
        removed
    }

    pub fn is_observing(&self, book: &BookEntity, user: &UserEntity) -> bool {
        self.observers.get(book.title.as_str())
            .map(|ids| ids.iter().any(|id| *id == user.id))
            .unwrap_or(false)
    }

    // Users subscribed to the book, skipping ids that no longer resolve.
    pub fn get_observers_for_book(&self, book: &BookEntity) -> Vec<UserEntity> {
        self.observers.get(book.title.as_str())
            .map(|ids| ids.iter().filter_map(|id| self.find_user_by_id(id)).cloned().collect())
            .unwrap_or_default()
    }

    pub fn holders_of(&self, title: &str) -> Vec<&UserEntity> {
        self.users.iter().filter(|u| u.has_book(title)).collect()
    }

    // A book is BORROWED iff exactly one user holds it; every held title must exist.
    pub fn loan_violations(&self) -> Vec<String> {
        let mut violations = vec![];
        for book in &self.books {
            let holders = self.holders_of(book.title.as_str()).len();
            match book.status {
                BookStatus::Borrowed if holders != 1 => {
                    violations.push(format!("book {} is BORROWED but held by {} users", book.title, holders));
                }
                BookStatus::Available if holders != 0 => {
                    violations.push(format!("book {} is AVAILABLE but held by {} users", book.title, holders));
                }
                _ => {}
            }
        }
        for user in &self.users {
            for title in user.borrowed_books() {
                if self.find_book(title).is_none() {
                    violations.push(format!("user {} holds unknown book {}", user.id, title));
                }
            }
        }
        violations
    }
}
