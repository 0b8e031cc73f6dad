use async_trait::async_trait;
use tracing::info;
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::SharedCatalog;
use crate::catalog::domain::model::Catalog;
use crate::checkout::domain::CheckoutService;
use crate::checkout::dto::CheckoutDto;
use crate::core::events::NotificationKind;
use crate::core::library::{BookStatus, LibraryError, LibraryResult};
use crate::gateway::notifier::Notifier;
use crate::users::domain::model::UserEntity;

pub struct CheckoutServiceImpl {
    catalog: SharedCatalog,
    notifier: Notifier,
}

impl CheckoutServiceImpl {
    pub fn new(catalog: SharedCatalog, notifier: Notifier) -> Self {
        Self {
            catalog,
            notifier,
        }
    }
}

fn resolve(catalog: &Catalog, user_id: &str, title: &str) -> LibraryResult<(UserEntity, BookEntity)> {
    let user = catalog.find_user_by_id(user_id).cloned()
        .ok_or_else(|| LibraryError::not_found(format!("user {} not found", user_id).as_str()))?;
    let book = catalog.find_book(title).cloned()
        .ok_or_else(|| LibraryError::not_found(format!("book {} not found", title).as_str()))?;
    Ok((user, book))
}

// Writes the updated user and book back; both were resolved from this catalog under the same lock.
fn store(catalog: &mut Catalog, user: &UserEntity, book: &BookEntity) -> LibraryResult<()> {
    let Some(existing) = catalog.find_user_by_id_mut(user.id.as_str()) else {
        return Err(LibraryError::runtime(format!("user {} vanished", user.id).as_str(), None));
    };
    *existing = user.clone();
    if !catalog.update_book(book) {
        return Err(LibraryError::runtime(format!("book {} vanished", book.title).as_str(), None));
    }
    Ok(())
}

#[async_trait]
impl CheckoutService for CheckoutServiceImpl {
    async fn borrow(&self, user_id: &str, title: &str) -> LibraryResult<CheckoutDto> {
        let mut catalog = self.catalog.lock().await;
        let (mut user, book) = resolve(&catalog, user_id, title)?;
        if !book.is_available() {
            return Err(LibraryError::invalid_state(
                format!("book {} is already borrowed", book.title).as_str(), Some("already_borrowed".to_string())));
        }
        // rejects at capacity before anything in the catalog changes
        user.add_book(book.title.as_str())?;
        let borrowed = book.with_status(BookStatus::Borrowed);
        store(&mut catalog, &user, &borrowed)?;
        info!(user_id = user.id.as_str(), title = borrowed.title.as_str(), "book borrowed");

        let observers = catalog.get_observers_for_book(&borrowed);
        let notifications = self.notifier.notify(
            &borrowed, &observers, Some(user.id.as_str()), NotificationKind::BorrowedByAnother).await;
        Ok(CheckoutDto::new(&user, &borrowed, notifications))
    }

    async fn returned(&self, user_id: &str, title: &str) -> LibraryResult<CheckoutDto> {
        let mut catalog = self.catalog.lock().await;
        let (mut user, book) = resolve(&catalog, user_id, title)?;
        if !user.remove_book(book.title.as_str()) {
            return Err(LibraryError::invalid_state(
                format!("user {} did not borrow this book {}", user.id, book.title).as_str(), Some("not_borrowed".to_string())));
        }
        let available = book.with_status(BookStatus::Available);
        store(&mut catalog, &user, &available)?;
        info!(user_id = user.id.as_str(), title = available.title.as_str(), "book returned");

        let observers = catalog.get_observers_for_book(&available);
        let notifications = self.notifier.notify(
            &available, &observers, None, NotificationKind::AvailableAgain).await;
        Ok(CheckoutDto::new(&user, &available, notifications))
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::catalog::domain::{shared, SharedCatalog};
    use crate::catalog::domain::model::Catalog;
    use crate::checkout::domain::CheckoutService;
    use crate::checkout::domain::service::CheckoutServiceImpl;
    use crate::core::events::NotificationKind;
    use crate::core::library::{BookStatus, LibraryError, Role};
    use crate::gateway::memory::publisher::MemoryPublisher;
    use crate::gateway::notifier::Notifier;
    use crate::users::domain::Member;
    use crate::users::domain::model::UserEntity;

    fn build() -> (SharedCatalog, MemoryPublisher, Box<dyn CheckoutService>) {
        let mut catalog = Catalog::new();
        catalog.add_book(BookEntity::new("Dune", "Herbert", 1965, BookStatus::Available));
        catalog.add_user(UserEntity::new("1", "John", "Doe", "john@example.com", Role::Student));
        catalog.add_user(UserEntity::new("2", "Alice", "Smith", "alice@example.com", Role::Teacher));
        let catalog = shared(catalog);
        let publisher = MemoryPublisher::new();
        let svc = CheckoutServiceImpl::new(catalog.clone(), Notifier::new(Box::new(publisher.clone())));
        (catalog, publisher, Box::new(svc))
    }

    async fn subscribe(catalog: &SharedCatalog, user_id: &str, title: &str) {
        let mut catalog = catalog.lock().await;
        let book = catalog.find_book(title).cloned().expect("book");
        let user = catalog.find_user_by_id(user_id).cloned().expect("user");
        catalog.add_observer_to_book(&book, &user);
    }

    #[tokio::test]
    async fn test_should_borrow_available_book() {
        let (catalog, _, checkout_svc) = build();

        let checkout = checkout_svc.borrow("1", "dune").await.expect("should borrow");
        assert_eq!(BookStatus::Borrowed, checkout.book.status);
        assert_eq!(vec!["Dune".to_string()], checkout.borrowed_books);

        let catalog = catalog.lock().await;
        assert_eq!(BookStatus::Borrowed, catalog.find_book("Dune").expect("book").status);
        assert_eq!(vec!["Dune".to_string()], catalog.find_user_by_id("1").expect("user").borrowed_books().to_vec());
        assert!(catalog.loan_violations().is_empty());
    }

    #[tokio::test]
    async fn test_should_notify_subscribers_except_borrower() {
        let (catalog, publisher, checkout_svc) = build();
        subscribe(&catalog, "2", "Dune").await;
        subscribe(&catalog, "1", "Dune").await;

        let checkout = checkout_svc.borrow("1", "Dune").await.expect("should borrow");
        assert_eq!(1, checkout.notifications.len());
        let event = &checkout.notifications[0];
        assert_eq!("2", event.recipient_id.as_str());
        assert_eq!(NotificationKind::BorrowedByAnother, event.kind);
        assert_eq!(checkout.notifications, publisher.events().await);
    }

    #[tokio::test]
    async fn test_should_return_and_notify_everyone() {
        let (catalog, _, checkout_svc) = build();
        subscribe(&catalog, "2", "Dune").await;
        subscribe(&catalog, "1", "Dune").await;
        let _ = checkout_svc.borrow("1", "Dune").await.expect("should borrow");

        let checkout = checkout_svc.returned("1", "Dune").await.expect("should return");
        assert_eq!(BookStatus::Available, checkout.book.status);
        assert!(checkout.borrowed_books.is_empty());
        assert_eq!(vec!["2", "1"], checkout.notifications.iter().map(|e| e.recipient_id.as_str()).collect::<Vec<_>>());
        assert!(checkout.notifications.iter().all(|e| e.kind == NotificationKind::AvailableAgain));

        let catalog = catalog.lock().await;
        assert_eq!(BookStatus::Available, catalog.find_book("Dune").expect("book").status);
        assert!(catalog.loan_violations().is_empty());
    }

    #[tokio::test]
    async fn test_should_reject_borrowing_borrowed_book() {
        let (catalog, publisher, checkout_svc) = build();
        subscribe(&catalog, "2", "Dune").await;
        let _ = checkout_svc.borrow("1", "Dune").await.expect("should borrow");
        let before = catalog.lock().await.clone();

        let res = checkout_svc.borrow("2", "Dune").await;
        assert!(matches!(res, Err(LibraryError::InvalidState { .. })));
        assert_eq!(before, *catalog.lock().await);
        assert!(publisher.events().await.is_empty());
    }

    #[tokio::test]
    async fn test_should_reject_return_of_book_not_held() {
        let (catalog, _, checkout_svc) = build();
        let _ = checkout_svc.borrow("1", "Dune").await.expect("should borrow");
        let before = catalog.lock().await.clone();

        let res = checkout_svc.returned("2", "Dune").await;
        assert!(matches!(res, Err(LibraryError::InvalidState { .. })));
        assert_eq!(before, *catalog.lock().await);

        let _ = checkout_svc.returned("1", "Dune").await.expect("should return");
        let res = checkout_svc.returned("1", "Dune").await;
        assert!(matches!(res, Err(LibraryError::InvalidState { .. })));
    }

    #[tokio::test]
    async fn test_should_abort_when_not_found() {
        let (catalog, _, checkout_svc) = build();
        let before = catalog.lock().await.clone();

        assert!(matches!(checkout_svc.borrow("1", "Missing").await, Err(LibraryError::NotFound { .. })));
        assert!(matches!(checkout_svc.borrow("42", "Dune").await, Err(LibraryError::NotFound { .. })));
        assert!(matches!(checkout_svc.returned("42", "Dune").await, Err(LibraryError::NotFound { .. })));
        assert_eq!(before, *catalog.lock().await);
    }

    #[tokio::test]
    async fn test_should_reject_borrow_over_capacity() {
        let (catalog, _, checkout_svc) = build();
        {
            let mut catalog = catalog.lock().await;
            for i in 1..=6 {
                catalog.add_book(BookEntity::new(format!("Book {}", i).as_str(), "Anon", 2000, BookStatus::Available));
            }
        }
        for i in 1..=5 {
            let _ = checkout_svc.borrow("1", format!("Book {}", i).as_str()).await.expect("should borrow");
        }
        let before = catalog.lock().await.clone();

        let res = checkout_svc.borrow("1", "Book 6").await;
        assert!(matches!(res, Err(LibraryError::CapacityExceeded { max_books: 5, .. })));
        let catalog = catalog.lock().await;
        assert_eq!(before, *catalog);
        assert_eq!(5, catalog.find_user_by_id("1").expect("user").borrowed_books().len());
        assert_eq!(BookStatus::Available, catalog.find_book("Book 6").expect("book").status);
    }

    #[tokio::test]
    async fn test_should_keep_loans_consistent_across_sequences() {
        let (catalog, _, checkout_svc) = build();
        {
            let mut catalog = catalog.lock().await;
            catalog.add_book(BookEntity::new("Clean Code", "Robert C. Martin", 2008, BookStatus::Available));
            catalog.add_user(UserEntity::new("3", "Bob", "Brown", "bob@example.com", Role::Librarian));
        }
        let steps = [("b", "1", "Dune"), ("b", "2", "Dune"), ("b", "2", "Clean Code"), ("r", "1", "Clean Code"),
            ("r", "1", "Dune"), ("b", "3", "Dune"), ("r", "2", "Clean Code"), ("b", "1", "Clean Code"), ("r", "3", "Dune")];
        for (op, user_id, title) in steps {
            let _ = match op {
                "b" => checkout_svc.borrow(user_id, title).await,
                _ => checkout_svc.returned(user_id, title).await,
            };
            let catalog = catalog.lock().await;
            assert!(catalog.loan_violations().is_empty(), "after {} {} {}", op, user_id, title);
            for user in catalog.users() {
                assert!(user.borrowed_books().len() <= user.max_books());
            }
        }
    }
}
