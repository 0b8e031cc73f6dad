use std::path::PathBuf;
use async_trait::async_trait;
use tracing::{info, warn};
use crate::catalog::domain::model::Catalog;
use crate::catalog::repository::{read_optional, write_all, CatalogRepository};
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::{Repository, RepositoryStore};
use crate::users::domain::Member;

// Single document holding books, users with their borrowed titles and the
// subscription mapping.
#[derive(Debug)]
pub struct JsonCatalogRepository {
    path: PathBuf,
}

impl JsonCatalogRepository {
    pub fn new(config: &Configuration) -> Self {
        Self {
            path: config.json_path(),
        }
    }

    fn failure(&self, message: &str) -> LibraryError {
        LibraryError::import_failure(message, Some(self.path.display().to_string()))
    }
}

#[async_trait]
impl Repository<Catalog> for JsonCatalogRepository {
    async fn load(&self) -> LibraryResult<Catalog> {
        let Some(contents) = read_optional(&self.path).await? else {
            info!(path = %self.path.display(), "file does not exist, starting empty");
            return Ok(Catalog::new());
        };
        let catalog: Catalog = serde_json::from_str(contents.as_str())
            .map_err(|err| self.failure(format!("failed to parse json due to {}", err).as_str()))?;
        // the document bypasses the borrow limit checks, so enforce them here
        for user in catalog.users() {
            if user.borrowed_books().len() > user.max_books() {
                return Err(self.failure(format!("user {} holds {} books but may hold {}",
                                                user.id, user.borrowed_books().len(), user.max_books()).as_str()));
            }
        }
        for violation in catalog.loan_violations() {
            warn!(location = self.location().as_str(), "inconsistent loan: {}", violation);
        }
        info!(books = catalog.books().len(), users = catalog.users().len(),
              subscriptions = catalog.observers().len(), "catalog imported from json");
        Ok(catalog)
    }

    async fn save(&self, catalog: &Catalog) -> LibraryResult<()> {
        let json = serde_json::to_string_pretty(catalog).map_err(|err| LibraryError::export_failure(
            format!("failed to serialize catalog due to {}", err).as_str(), Some(self.location())))?;
        write_all(&self.path, json).await?;
        info!(books = catalog.books().len(), users = catalog.users().len(), "catalog exported to json");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

impl CatalogRepository for JsonCatalogRepository {
    fn store(&self) -> RepositoryStore {
        RepositoryStore::Json
    }
}
