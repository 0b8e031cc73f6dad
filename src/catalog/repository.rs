pub mod csv_catalog_repository;
pub mod json_catalog_repository;

use std::path::Path;
use crate::catalog::domain::model::Catalog;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::{Repository, RepositoryStore};

pub trait CatalogRepository: Repository<Catalog> {
    fn store(&self) -> RepositoryStore;
}

pub(crate) async fn ensure_parent_dir(path: &Path) -> LibraryResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            tokio::fs::create_dir_all(parent).await.map_err(|err| LibraryError::export_failure(
                format!("failed to create directory {} due to {}", parent.display(), err).as_str(),
                Some(path.display().to_string())))
        }
        _ => Ok(()),
    }
}

// None when the file does not exist yet, which counts as an empty store.
pub(crate) async fn read_optional(path: &Path) -> LibraryResult<Option<String>> {
    match tokio::fs::read_to_string(path).await {
        Ok(contents) => Ok(Some(contents)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(LibraryError::import_failure(
            format!("failed to read file due to {}", err).as_str(), Some(path.display().to_string()))),
    }
}

pub(crate) async fn write_all(path: &Path, contents: String) -> LibraryResult<()> {
    ensure_parent_dir(path).await?;
    tokio::fs::write(path, contents).await.map_err(|err| LibraryError::export_failure(
        format!("failed to write file due to {}", err).as_str(), Some(path.display().to_string())))
}
