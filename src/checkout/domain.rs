use async_trait::async_trait;
use crate::checkout::dto::CheckoutDto;
use crate::core::library::LibraryResult;

pub mod service;

#[async_trait]
pub trait CheckoutService: Sync + Send {
    async fn borrow(&self, user_id: &str, title: &str) -> LibraryResult<CheckoutDto>;
    async fn returned(&self, user_id: &str, title: &str) -> LibraryResult<CheckoutDto>;
}
