use async_trait::async_trait;
use tracing::{debug, info};
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::{CatalogService, SharedCatalog};
use crate::catalog::domain::model::Catalog;
use crate::core::library::{BookStatus, LibraryError, LibraryResult};
use crate::users::domain::model::UserEntity;
use crate::users::factory::create_user;

// characters that would break the delimited storage format
const FIELD_DELIMITERS: &[char] = &[';', '\n', '\r'];
const LIST_DELIMITERS: &[char] = &[';', ',', '[', ']', '\n', '\r'];

pub struct CatalogServiceImpl {
    catalog: SharedCatalog,
}

impl CatalogServiceImpl {
    pub fn new(catalog: SharedCatalog) -> Self {
        Self {
            catalog,
        }
    }
}

fn validate_field(name: &str, value: &str, forbidden: &[char]) -> LibraryResult<()> {
    if value.trim().is_empty() {
        return Err(LibraryError::validation(
            format!("{} must not be empty", name).as_str(), Some(name.to_string())));
    }
    if value.contains(forbidden) {
        return Err(LibraryError::validation(
            format!("{} {:?} contains a reserved character", name, value).as_str(), Some(name.to_string())));
    }
    Ok(())
}

// Keys are stored inside delimited lists, which are read back trimmed.
fn validate_key(name: &str, value: &str) -> LibraryResult<()> {
    validate_field(name, value, LIST_DELIMITERS)?;
    if value != value.trim() {
        return Err(LibraryError::validation(
            format!("{} {:?} has leading or trailing whitespace", name, value).as_str(), Some(name.to_string())));
    }
    Ok(())
}

fn validate_book(book: &BookEntity) -> LibraryResult<()> {
    validate_key("title", book.title.as_str())?;
    validate_field("author", book.author.as_str(), FIELD_DELIMITERS)
}

fn validate_user(user: &UserEntity) -> LibraryResult<()> {
    validate_key("id", user.id.as_str())?;
    validate_field("first name", user.first_name.as_str(), FIELD_DELIMITERS)?;
    validate_field("last name", user.last_name.as_str(), FIELD_DELIMITERS)?;
    validate_field("email", user.email.as_str(), FIELD_DELIMITERS)
}

fn resolve_book(catalog: &Catalog, title: &str) -> LibraryResult<BookEntity> {
    catalog.find_book(title).cloned()
        .ok_or_else(|| LibraryError::not_found(format!("book {} not found", title).as_str()))
}

fn resolve_user(catalog: &Catalog, id: &str) -> LibraryResult<UserEntity> {
    catalog.find_user_by_id(id).cloned()
        .ok_or_else(|| LibraryError::not_found(format!("user {} not found", id).as_str()))
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookEntity) -> LibraryResult<BookEntity> {
        validate_book(book)?;
        let mut catalog = self.catalog.lock().await;
        if catalog.find_book(book.title.as_str()).is_some() {
            return Err(LibraryError::duplicate_key(
                format!("book {} already exists", book.title).as_str()));
        }
        catalog.add_book(book.clone());
        info!(title = book.title.as_str(), "book added");
        Ok(book.clone())
    }

    async fn add_user(&self, user: &UserEntity) -> LibraryResult<UserEntity> {
        validate_user(user)?;
        let mut catalog = self.catalog.lock().await;
        if catalog.find_user_by_id(user.id.as_str()).is_some() {
            return Err(LibraryError::duplicate_key(
                format!("user {} already exists", user.id).as_str()));
        }
        catalog.add_user(user.clone());
        info!(user_id = user.id.as_str(), "user added");
        Ok(user.clone())
    }

    async fn register_user(&self, role: &str, first_name: &str, last_name: &str, email: &str) -> LibraryResult<UserEntity> {
        let mut catalog = self.catalog.lock().await;
        let id = catalog.next_user_id();
        let user = create_user(role, id.as_str(), first_name, last_name, email)?;
        validate_user(&user)?;
        catalog.add_user(user.clone());
        info!(user_id = user.id.as_str(), role = %role, "user registered");
        Ok(user)
    }

    async fn find_book(&self, title: &str) -> LibraryResult<BookEntity> {
        resolve_book(&*self.catalog.lock().await, title)
    }

    async fn search_books(&self, query: &str) -> LibraryResult<Vec<BookEntity>> {
        let res = self.catalog.lock().await.search_books(query);
        debug!(query = %query, matches = res.len(), "searched books");
        Ok(res)
    }

    async fn find_books_by_status(&self, status: BookStatus) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.catalog.lock().await.get_books_by_status(status))
    }

    async fn find_user_by_id(&self, id: &str) -> LibraryResult<UserEntity> {
        resolve_user(&*self.catalog.lock().await, id)
    }

    async fn find_users(&self) -> LibraryResult<Vec<UserEntity>> {
        Ok(self.catalog.lock().await.users().to_vec())
    }

    async fn subscribe(&self, user_id: &str, title: &str) -> LibraryResult<()> {
        let mut catalog = self.catalog.lock().await;
        let user = resolve_user(&catalog, user_id)?;
        let book = resolve_book(&catalog, title)?;
        if catalog.is_observing(&book, &user) {
            return Err(LibraryError::duplicate_key(
                format!("user {} is already subscribed to {}", user.id, book.title).as_str()));
        }
        catalog.add_observer_to_book(&book, &user);
        info!(user_id = user.id.as_str(), title = book.title.as_str(), "subscribed");
        Ok(())
    }

    async fn unsubscribe(&self, user_id: &str, title: &str) -> LibraryResult<()> {
        let mut catalog = self.catalog.lock().await;
        let user = resolve_user(&catalog, user_id)?;
        let book = resolve_book(&catalog, title)?;
        if !catalog.remove_observer_from_book(&book, &user) {
            return Err(LibraryError::not_found(
                format!("user {} is not subscribed to {}", user.id, book.title).as_str()));
        }
        info!(user_id = user.id.as_str(), title = book.title.as_str(), "unsubscribed");
        Ok(())
    }

    async fn find_observers(&self, title: &str) -> LibraryResult<Vec<UserEntity>> {
        let catalog = self.catalog.lock().await;
        let book = resolve_book(&catalog, title)?;
        Ok(catalog.get_observers_for_book(&book))
    }

    async fn snapshot(&self) -> Catalog {
        self.catalog.lock().await.clone()
    }
}
