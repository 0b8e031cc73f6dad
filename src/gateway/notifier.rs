use tracing::{debug, warn};
use crate::books::domain::Book;
use crate::core::events::{NotificationEvent, NotificationKind};
use crate::gateway::events::NotificationPublisher;
use crate::users::domain::model::UserEntity;

// Notifier fans a status change out to the subscribers of a book.
// A failed delivery is logged and skipped, it never fails the operation that triggered it.
pub struct Notifier {
    publisher: Box<dyn NotificationPublisher>,
}

impl Notifier {
    pub fn new(publisher: Box<dyn NotificationPublisher>) -> Self {
        Self {
            publisher,
        }
    }

    // Returns the events that were delivered, in subscription order.
    pub async fn notify(&self, book: &dyn Book, observers: &[UserEntity],
                        acting_user: Option<&str>, kind: NotificationKind) -> Vec<NotificationEvent> {
        let mut delivered = vec![];
        for observer in observers {
            if acting_user == Some(observer.id.as_str()) {
                debug!(user_id = observer.id.as_str(), "skipping the acting user");
                continue;
            }
            let event = NotificationEvent::of_kind(kind, book, observer);
            match self.publisher.publish(&event).await {
                Ok(_) => delivered.push(event),
                Err(err) => {
                    warn!(user_id = observer.id.as_str(), title = book.title(), "failed to deliver notification: {}", err);
                }
            }
        }
        delivered
    }
}
