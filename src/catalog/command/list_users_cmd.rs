use async_trait::async_trait;
use serde::Serialize;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::users::domain::model::UserEntity;

pub struct ListUsersCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl ListUsersCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListUsersCommandResponse {
    pub users: Vec<UserEntity>,
}

impl ListUsersCommandResponse {
    pub fn new(users: Vec<UserEntity>) -> Self {
        Self {
            users,
        }
    }
}

#[async_trait]
impl Command<(), ListUsersCommandResponse> for ListUsersCommand {
    async fn execute(&self, _req: ()) -> Result<ListUsersCommandResponse, CommandError> {
        self.catalog_service.find_users().await.map_err(CommandError::from).map(ListUsersCommandResponse::new)
    }
}
