use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::users::domain::model::UserEntity;

pub struct AddUserCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddUserCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// The id is allocated by the catalog when the user is registered.
#[derive(Debug, Deserialize)]
pub struct AddUserCommandRequest {
    pub role: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl AddUserCommandRequest {
    pub fn new(role: &str, first_name: &str, last_name: &str, email: &str) -> Self {
        Self {
            role: role.trim().to_string(),
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            email: email.trim().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddUserCommandResponse {
    pub user: UserEntity,
}

impl AddUserCommandResponse {
    pub fn new(user: UserEntity) -> Self {
        Self {
            user,
        }
    }
}

#[async_trait]
impl Command<AddUserCommandRequest, AddUserCommandResponse> for AddUserCommand {
    async fn execute(&self, req: AddUserCommandRequest) -> Result<AddUserCommandResponse, CommandError> {
        self.catalog_service.register_user(req.role.as_str(), req.first_name.as_str(),
                                           req.last_name.as_str(), req.email.as_str())
            .await.map_err(CommandError::from).map(AddUserCommandResponse::new)
    }
}
