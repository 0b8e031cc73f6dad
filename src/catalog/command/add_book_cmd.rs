use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::BookStatus;

pub struct AddBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    pub title: String,
    pub author: String,
    pub year: i32,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, year: i32) -> Self {
        Self {
            title: title.trim().to_string(),
            author: author.trim().to_string(),
            year,
        }
    }

    // new books always enter the catalog as available
    pub fn build_book(&self) -> BookEntity {
        BookEntity::new(self.title.as_str(), self.author.as_str(), self.year, BookStatus::Available)
    }
}

#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book: BookEntity,
}

impl AddBookCommandResponse {
    pub fn new(book: BookEntity) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.catalog_service.add_book(&book).await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::domain::model::Catalog;
    use crate::catalog::domain::shared;
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::library::BookStatus;

    #[tokio::test]
    async fn test_should_run_add_book() {
        let catalog = shared(Catalog::new());
        let cmd = AddBookCommand::new(factory::create_catalog_service(&catalog));

        let res = cmd.execute(AddBookCommandRequest::new(" Dune ", "Frank Herbert", 1965))
            .await.expect("should add book");
        assert_eq!("Dune", res.book.title.as_str());
        assert_eq!(BookStatus::Available, res.book.status);
        assert_eq!(1, catalog.lock().await.books().len());

        let res = cmd.execute(AddBookCommandRequest::new("dune", "Someone", 2000)).await;
        assert!(matches!(res, Err(CommandError::DuplicateKey { .. })));
    }
}
