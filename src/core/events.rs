use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::books::domain::Book;
use crate::users::domain::Member;
use crate::utils::date::serializer;

// NotificationKind defines why a subscriber is told about a book
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum NotificationKind {
    BorrowedByAnother,
    AvailableAgain,
}

impl Display for NotificationKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            NotificationKind::BorrowedByAnother => write!(f, "BorrowedByAnother"),
            NotificationKind::AvailableAgain => write!(f, "AvailableAgain"),
        }
    }
}

// NotificationEvent abstracts a single message delivered to a subscriber after a book changed status
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct NotificationEvent {
    pub event_id: String,
    pub kind: NotificationKind,
    pub book_title: String,
    pub recipient_id: String,
    pub recipient_name: String,
    pub recipient_email: String,
    pub message: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl NotificationEvent {
    pub fn borrowed(book: &dyn Book, recipient: &dyn Member) -> Self {
        let message = format!("The book \"{}\" has been borrowed by another user.", book.title());
        Self::build(NotificationKind::BorrowedByAnother, book, recipient, message)
    }

    pub fn available(book: &dyn Book, recipient: &dyn Member) -> Self {
        let message = format!("The book \"{}\" is now available in the library.", book.title());
        Self::build(NotificationKind::AvailableAgain, book, recipient, message)
    }

    pub fn of_kind(kind: NotificationKind, book: &dyn Book, recipient: &dyn Member) -> Self {
        match kind {
            NotificationKind::BorrowedByAnother => Self::borrowed(book, recipient),
            NotificationKind::AvailableAgain => Self::available(book, recipient),
        }
    }

    fn build(kind: NotificationKind, book: &dyn Book, recipient: &dyn Member, message: String) -> Self {
        NotificationEvent {
            event_id: Uuid::new_v4().to_string(),
            kind,
            book_title: book.title().to_string(),
            recipient_id: recipient.id(),
            recipient_name: recipient.full_name(),
            recipient_email: recipient.email().to_string(),
            message,
            created_at: Utc::now().naive_utc(),
        }
    }
}
