use async_trait::async_trait;
use crate::core::events::NotificationEvent;
use crate::core::library::LibraryError;

#[async_trait]
pub trait NotificationPublisher: Sync + Send {
    async fn publish(&self, event: &NotificationEvent) -> Result<(), LibraryError>;
}
