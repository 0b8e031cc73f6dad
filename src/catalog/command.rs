pub mod add_book_cmd;
pub mod add_user_cmd;
pub mod list_books_cmd;
pub mod list_users_cmd;
pub mod search_books_cmd;
pub mod subscribe_book_cmd;
pub mod unsubscribe_book_cmd;
