use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::core::repository::RepositoryStore;

// Identifiable defines the lookup key shared by catalog entries
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}

pub const BOOKS_FILE_NAME: &str = "Library.csv";
pub const USERS_FILE_NAME: &str = "Library_users.csv";
pub const OBSERVERS_FILE_NAME: &str = "Notifications.csv";
pub const JSON_FILE_NAME: &str = "Library.json";

// Configuration abstracts where and how the catalog is persisted
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub data_dir: PathBuf,
    pub store: RepositoryStore,
    pub books_file: String,
    pub users_file: String,
    pub observers_file: String,
    pub json_file: String,
}

impl Configuration {
    pub fn new(data_dir: &Path, store: RepositoryStore) -> Self {
        Configuration {
            data_dir: data_dir.to_path_buf(),
            store,
            books_file: BOOKS_FILE_NAME.to_string(),
            users_file: USERS_FILE_NAME.to_string(),
            observers_file: OBSERVERS_FILE_NAME.to_string(),
            json_file: JSON_FILE_NAME.to_string(),
        }
    }

    pub fn books_path(&self) -> PathBuf {
        self.data_dir.join(&self.books_file)
    }

    pub fn users_path(&self) -> PathBuf {
        self.data_dir.join(&self.users_file)
    }

    pub fn observers_path(&self) -> PathBuf {
        self.data_dir.join(&self.observers_file)
    }

    pub fn json_path(&self) -> PathBuf {
        self.data_dir.join(&self.json_file)
    }
}
