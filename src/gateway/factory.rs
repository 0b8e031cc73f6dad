use crate::gateway::console::publisher::ConsolePublisher;
use crate::gateway::events::NotificationPublisher;
use crate::gateway::GatewayPublisherVia;
use crate::gateway::memory::publisher::MemoryPublisher;

pub fn create_publisher(via: GatewayPublisherVia) -> Box<dyn NotificationPublisher> {
    match via {
        GatewayPublisherVia::Console => {
            Box::new(ConsolePublisher::new())
        }
        GatewayPublisherVia::Memory => {
            Box::new(MemoryPublisher::new())
        }
    }
}
