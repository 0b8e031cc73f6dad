use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::core::events::NotificationEvent;
use crate::users::domain::model::UserEntity;

// CheckoutDto describes the outcome of a borrow or a return.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct CheckoutDto {
    pub user_id: String,
    // the book as stored after the transition
    pub book: BookEntity,
    pub borrowed_books: Vec<String>,
    pub notifications: Vec<NotificationEvent>,
}

impl CheckoutDto {
    pub fn new(user: &UserEntity, book: &BookEntity, notifications: Vec<NotificationEvent>) -> Self {
        Self {
            user_id: user.id.to_string(),
            book: book.clone(),
            borrowed_books: user.borrowed_books().to_vec(),
            notifications,
        }
    }
}
