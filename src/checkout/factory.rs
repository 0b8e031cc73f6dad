use crate::catalog::domain::SharedCatalog;
use crate::checkout::domain::CheckoutService;
use crate::checkout::domain::service::CheckoutServiceImpl;
use crate::gateway::factory::create_publisher;
use crate::gateway::GatewayPublisherVia;
use crate::gateway::notifier::Notifier;

pub fn create_checkout_service(catalog: &SharedCatalog, via: GatewayPublisherVia) -> Box<dyn CheckoutService> {
    let notifier = Notifier::new(create_publisher(via));
    Box::new(CheckoutServiceImpl::new(catalog.clone(), notifier))
}
