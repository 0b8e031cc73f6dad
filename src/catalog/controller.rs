use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::add_user_cmd::{AddUserCommand, AddUserCommandRequest, AddUserCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::list_users_cmd::{ListUsersCommand, ListUsersCommandResponse};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest, SearchBooksCommandResponse};
use crate::catalog::command::subscribe_book_cmd::{SubscribeBookCommand, SubscribeBookCommandRequest, SubscribeBookCommandResponse};
use crate::catalog::command::unsubscribe_book_cmd::{UnsubscribeBookCommand, UnsubscribeBookCommandRequest, UnsubscribeBookCommandResponse};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, OperatorError};

fn build_service(state: &AppState) -> Box<dyn CatalogService> {
    factory::create_catalog_service(&state.catalog)
}

pub async fn add_book(state: &AppState, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, OperatorError> {
    let res = AddBookCommand::new(build_service(state)).execute(req).await?;
    Ok(res)
}

pub async fn add_user(state: &AppState, req: AddUserCommandRequest) -> Result<AddUserCommandResponse, OperatorError> {
    let res = AddUserCommand::new(build_service(state)).execute(req).await?;
    Ok(res)
}

pub async fn search_books(state: &AppState, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, OperatorError> {
    let res = SearchBooksCommand::new(build_service(state)).execute(req).await?;
    Ok(res)
}

pub async fn list_books(state: &AppState, req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, OperatorError> {
    let res = ListBooksCommand::new(build_service(state)).execute(req).await?;
    Ok(res)
}

pub async fn list_users(state: &AppState) -> Result<ListUsersCommandResponse, OperatorError> {
    let res = ListUsersCommand::new(build_service(state)).execute(()).await?;
    Ok(res)
}

pub async fn subscribe_book(state: &AppState, req: SubscribeBookCommandRequest) -> Result<SubscribeBookCommandResponse, OperatorError> {
    let res = SubscribeBookCommand::new(build_service(state)).execute(req).await?;
    Ok(res)
}

pub async fn unsubscribe_book(state: &AppState, req: UnsubscribeBookCommandRequest) -> Result<UnsubscribeBookCommandResponse, OperatorError> {
    let res = UnsubscribeBookCommand::new(build_service(state)).execute(req).await?;
    Ok(res)
}
