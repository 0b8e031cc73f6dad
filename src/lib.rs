//! Library catalog: books, users, borrowing and per-book availability notifications.

pub mod books;
pub mod catalog;
pub mod checkout;
pub mod console;
pub mod core;
pub mod gateway;
pub mod users;
pub mod utils;
