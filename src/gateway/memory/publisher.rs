use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;
use crate::core::events::NotificationEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::NotificationPublisher;

// Clones share the same event log.
#[derive(Debug, Default, Clone)]
pub struct MemoryPublisher {
    events: Arc<Mutex<Vec<NotificationEvent>>>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn events(&self) -> Vec<NotificationEvent> {
        self.events.lock().await.clone()
    }
}

#[async_trait]
impl NotificationPublisher for MemoryPublisher {
    async fn publish(&self, event: &NotificationEvent) -> Result<(), LibraryError> {
        debug!(recipient = event.recipient_id.as_str(), kind = %event.kind, "recording notification");
        self.events.lock().await.push(event.clone());
        Ok(())
    }
}
