use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::BookStatus;

pub struct ListBooksCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl ListBooksCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListBooksCommandRequest {
    // all books when absent
    pub status: Option<BookStatus>,
}

impl ListBooksCommandRequest {
    pub fn new(status: Option<BookStatus>) -> Self {
        Self {
            status,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListBooksCommandResponse {
    pub books: Vec<BookEntity>,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<BookEntity>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        let books = match req.status {
            Some(status) => self.catalog_service.find_books_by_status(status).await,
            None => Ok(self.catalog_service.snapshot().await.books().to_vec()),
        };
        books.map_err(CommandError::from).map(ListBooksCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
    use crate::catalog::domain::model::Catalog;
    use crate::catalog::domain::shared;
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::library::BookStatus;

    #[tokio::test]
    async fn test_should_run_list_books() {
        let mut catalog = Catalog::new();
        catalog.add_book(BookEntity::new("Dune", "Frank Herbert", 1965, BookStatus::Available));
        catalog.add_book(BookEntity::new("Clean Code", "Robert C. Martin", 2008, BookStatus::Borrowed));
        let cmd = ListBooksCommand::new(factory::create_catalog_service(&shared(catalog)));

        let all = cmd.execute(ListBooksCommandRequest::new(None)).await.expect("should list");
        assert_eq!(2, all.books.len());
        let available = cmd.execute(ListBooksCommandRequest::new(Some(BookStatus::Available))).await.expect("should list");
        assert_eq!(vec!["Dune"], available.books.iter().map(|b| b.title.as_str()).collect::<Vec<_>>());
        let borrowed = cmd.execute(ListBooksCommandRequest::new(Some(BookStatus::Borrowed))).await.expect("should list");
        assert_eq!(vec!["Clean Code"], borrowed.books.iter().map(|b| b.title.as_str()).collect::<Vec<_>>());
    }
}
