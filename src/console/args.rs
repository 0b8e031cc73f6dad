use std::path::PathBuf;
use clap::Parser;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

/// Library catalog console
#[derive(Parser, Debug)]
#[command(
    name = "library",
    version = env!("CARGO_PKG_VERSION"),
    about = "Search, borrow and return books from a console menu"
)]
pub struct Cli {
    /// Directory holding the catalog files
    #[arg(long, env = "LIBRARY_DATA_DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// Persistence format of the catalog files
    #[arg(long, value_enum, env = "LIBRARY_STORE", default_value = "csv")]
    pub store: RepositoryStore,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, env = "LIBRARY_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    pub fn configuration(&self) -> Configuration {
        Configuration::new(self.data_dir.as_path(), self.store)
    }
}
