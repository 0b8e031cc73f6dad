use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::users::domain::model::UserEntity;

pub struct SubscribeBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl SubscribeBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SubscribeBookCommandRequest {
    pub user_id: String,
    pub title: String,
}

impl SubscribeBookCommandRequest {
    pub fn new(user_id: &str, title: &str) -> Self {
        Self {
            user_id: user_id.trim().to_string(),
            title: title.trim().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SubscribeBookCommandResponse {
    pub user_id: String,
    pub title: String,
    // who is still subscribed to the book afterwards
    pub subscribers: Vec<UserEntity>,
}

#[async_trait]
impl Command<SubscribeBookCommandRequest, SubscribeBookCommandResponse> for SubscribeBookCommand {
    async fn execute(&self, req: SubscribeBookCommandRequest) -> Result<SubscribeBookCommandResponse, CommandError> {
        let _ = self.catalog_service.subscribe(req.user_id.as_str(), req.title.as_str())
            .await.map_err(CommandError::from)?;
        let subscribers = self.catalog_service.find_observers(req.title.as_str())
            .await.map_err(CommandError::from)?;
        Ok(SubscribeBookCommandResponse { user_id: req.user_id, title: req.title, subscribers })
    }
}
