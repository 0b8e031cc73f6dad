pub mod console;
pub mod events;
pub mod factory;
pub mod memory;
pub mod notifier;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum GatewayPublisherVia {
    // prints each notification for the operator
    Console,
    // keeps notifications in memory for inspection
    Memory,
}

