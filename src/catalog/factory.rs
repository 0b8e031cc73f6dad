use crate::catalog::domain::{CatalogService, SharedCatalog};
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::catalog::repository::CatalogRepository;
use crate::catalog::repository::csv_catalog_repository::CsvCatalogRepository;
use crate::catalog::repository::json_catalog_repository::JsonCatalogRepository;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

pub fn create_catalog_repository(config: &Configuration) -> Box<dyn CatalogRepository> {
    match config.store {
        RepositoryStore::Csv => {
            Box::new(CsvCatalogRepository::new(config))
        }
        RepositoryStore::Json => {
            Box::new(JsonCatalogRepository::new(config))
        }
    }
}

pub fn create_catalog_service(catalog: &SharedCatalog) -> Box<dyn CatalogService> {
    Box::new(CatalogServiceImpl::new(catalog.clone()))
}
