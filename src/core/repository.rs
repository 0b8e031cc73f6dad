use async_trait::async_trait;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;

#[async_trait]
pub trait Repository<Aggregate>: Sync + Send {
    // loads the whole aggregate from the backing store
    async fn load(&self) -> LibraryResult<Aggregate>;

    // replaces the backing store contents with the aggregate
    async fn save(&self, aggregate: &Aggregate) -> LibraryResult<()>;

    // human readable location of the backing store
    fn location(&self) -> String;
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy, ValueEnum)]
pub enum RepositoryStore {
    Csv,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::ValueEnum;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_parse_store_names() {
        assert_eq!(RepositoryStore::Csv, RepositoryStore::from_str("csv", true).expect("csv"));
        assert_eq!(RepositoryStore::Json, RepositoryStore::from_str("JSON", true).expect("json"));
        assert!(RepositoryStore::from_str("ddb", true).is_err());
    }
}
