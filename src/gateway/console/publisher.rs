use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tracing::info;
use crate::core::events::NotificationEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::NotificationPublisher;

#[derive(Debug, Default)]
pub struct ConsolePublisher {}

impl ConsolePublisher {
    pub fn new() -> Self {
        Self {}
    }
}

pub(crate) fn format_notification(event: &NotificationEvent) -> String {
    format!("Notification sent to {} <{}>: {}", event.recipient_name, event.recipient_email, event.message)
}

#[async_trait]
impl NotificationPublisher for ConsolePublisher {
    async fn publish(&self, event: &NotificationEvent) -> Result<(), LibraryError> {
        let json = serde_json::to_string(event)?;
        info!(event = json.as_str(), "publishing notification");
        let mut out = tokio::io::stdout();
        out.write_all(format!("{}\n", format_notification(event)).as_bytes()).await?;
        out.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::core::events::NotificationEvent;
    use crate::core::library::{BookStatus, Role};
    use crate::gateway::console::publisher::{format_notification, ConsolePublisher};
    use crate::gateway::events::NotificationPublisher;
    use crate::users::domain::model::UserEntity;

    #[tokio::test]
    async fn test_should_format_notification() {
        let book = BookEntity::new("Dune", "Frank Herbert", 1965, BookStatus::Available);
        let alice = UserEntity::new("2", "Alice", "Smith", "alice@example.com", Role::Teacher);
        let event = NotificationEvent::available(&book, &alice);
        assert_eq!("Notification sent to Alice Smith <alice@example.com>: The book \"Dune\" is now available in the library.",
                   format_notification(&event).as_str());
        ConsolePublisher::new().publish(&event).await.expect("should publish");
    }
}
