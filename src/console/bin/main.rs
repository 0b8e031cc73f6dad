use clap::Parser;
use tokio::io::BufReader;
use tracing::info;
use library_catalog::catalog::domain::shared;
use library_catalog::catalog::factory::create_catalog_repository;
use library_catalog::console::args::Cli;
use library_catalog::console::controller::LibraryConsole;
use library_catalog::core::controller::AppState;
use library_catalog::core::library::LibraryError;
use library_catalog::core::repository::Repository;
use library_catalog::gateway::GatewayPublisherVia;
use library_catalog::utils::logs::{parse_level, setup_tracing};

#[tokio::main]
async fn main() -> Result<(), LibraryError> {
    let cli = Cli::parse();
    setup_tracing(parse_level(cli.log_level.as_str()), cli.log_json);

    let config = cli.configuration();
    let repository = create_catalog_repository(&config);
    // a catalog that cannot be read must never be overwritten on exit
    let catalog = repository.load().await?;
    info!(location = repository.location().as_str(), books = catalog.books().len(),
          users = catalog.users().len(), "catalog loaded");

    let state = AppState::new(config, shared(catalog), GatewayPublisherVia::Console);
    let mut console = LibraryConsole::new(
        state, repository, BufReader::new(tokio::io::stdin()), tokio::io::stdout());
    console.run().await
}
