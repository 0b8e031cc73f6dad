pub mod model;
pub mod service;

use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::Mutex;
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::model::Catalog;
use crate::core::library::{BookStatus, LibraryResult};
use crate::users::domain::model::UserEntity;

// One catalog per process, shared by every service; each call holds the lock
// for its whole resolve/validate/mutate/notify sequence.
pub type SharedCatalog = Arc<Mutex<Catalog>>;

pub fn shared(catalog: Catalog) -> SharedCatalog {
    Arc::new(Mutex::new(catalog))
}

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn add_book(&self, book: &BookEntity) -> LibraryResult<BookEntity>;
    async fn add_user(&self, user: &UserEntity) -> LibraryResult<UserEntity>;
    async fn register_user(&self, role: &str, first_name: &str, last_name: &str, email: &str) -> LibraryResult<UserEntity>;
    async fn find_book(&self, title: &str) -> LibraryResult<BookEntity>;
    async fn search_books(&self, query: &str) -> LibraryResult<Vec<BookEntity>>;
    async fn find_books_by_status(&self, status: BookStatus) -> LibraryResult<Vec<BookEntity>>;
    async fn find_user_by_id(&self, id: &str) -> LibraryResult<UserEntity>;
    async fn find_users(&self) -> LibraryResult<Vec<UserEntity>>;
    async fn subscribe(&self, user_id: &str, title: &str) -> LibraryResult<()>;
    async fn unsubscribe(&self, user_id: &str, title: &str) -> LibraryResult<()>;
    async fn find_observers(&self, title: &str) -> LibraryResult<Vec<UserEntity>>;
    async fn snapshot(&self) -> Catalog;
}
