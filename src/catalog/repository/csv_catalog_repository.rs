use std::path::{Path, PathBuf};
use async_trait::async_trait;
use tracing::{info, warn};
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::model::Catalog;
use crate::catalog::repository::{read_optional, write_all, CatalogRepository};
use crate::core::domain::Configuration;
use crate::core::library::{BookStatus, LibraryError, LibraryResult};
use crate::core::repository::{Repository, RepositoryStore};
use crate::users::domain::Member;
use crate::users::domain::model::UserEntity;
use crate::users::factory::create_user;

// Three semicolon delimited files, one record per line:
//   books:     title;author;year;status
//   users:     ROLE;id;firstName;lastName;email;[title, title]
//   observers: title;[id,id]
#[derive(Debug)]
pub struct CsvCatalogRepository {
    books_path: PathBuf,
    users_path: PathBuf,
    observers_path: PathBuf,
}

impl CsvCatalogRepository {
    pub fn new(config: &Configuration) -> Self {
        Self {
            books_path: config.books_path(),
            users_path: config.users_path(),
            observers_path: config.observers_path(),
        }
    }

    async fn read_records(path: &Path) -> LibraryResult<Vec<(usize, String)>> {
        match read_optional(path).await? {
            Some(contents) => Ok(contents.lines()
                .enumerate()
                .filter(|(_, line)| !line.trim().is_empty())
                .map(|(ndx, line)| (ndx + 1, line.to_string()))
                .collect()),
            None => {
                info!(path = %path.display(), "file does not exist, starting empty");
                Ok(vec![])
            }
        }
    }

    fn parse_failure(path: &Path, line_no: usize, reason: &str) -> LibraryError {
        LibraryError::import_failure(format!("line {}: {}", line_no, reason).as_str(),
                                     Some(path.display().to_string()))
    }

    async fn import_books(&self, catalog: &mut Catalog) -> LibraryResult<()> {
        for (line_no, line) in Self::read_records(&self.books_path).await? {
            let book = parse_book(line.as_str())
                .map_err(|reason| Self::parse_failure(&self.books_path, line_no, reason.as_str()))?;
            catalog.add_book(book);
        }
        Ok(())
    }

    async fn import_users(&self, catalog: &mut Catalog) -> LibraryResult<()> {
        for (line_no, line) in Self::read_records(&self.users_path).await? {
            let fields: Vec<&str> = line.split(';').collect();
            if fields.len() != 5 && fields.len() != 6 {
                return Err(Self::parse_failure(&self.users_path, line_no,
                                               format!("expected 5 or 6 fields but found {}", fields.len()).as_str()));
            }
            let mut user = create_user(fields[0], fields[1].trim(), fields[2], fields[3], fields[4])
                .map_err(|err| Self::parse_failure(&self.users_path, line_no, err.to_string().as_str()))?;
            let titles = fields.get(5).map(|list| parse_list(list)).unwrap_or_default();
            for title in titles {
                match catalog.find_book(title.as_str()) {
                    Some(book) => {
                        if let Err(err) = user.add_book(book.title.as_str()) {
                            warn!(user_id = user.id.as_str(), title = title.as_str(), "skipping borrowed book: {}", err);
                        }
                    }
                    None => {
                        warn!(user_id = user.id.as_str(), title = title.as_str(), "skipping unknown borrowed book");
                    }
                }
            }
            catalog.add_user(user);
        }
        Ok(())
    }

    async fn import_observers(&self, catalog: &mut Catalog) -> LibraryResult<()> {
        for (line_no, line) in Self::read_records(&self.observers_path).await? {
            let fields: Vec<&str> = line.split(';').collect();
            if fields.len() != 2 {
                return Err(Self::parse_failure(&self.observers_path, line_no,
                                               format!("expected 2 fields but found {}", fields.len()).as_str()));
            }
            let book = catalog.find_book(fields[0]).cloned().ok_or_else(|| Self::parse_failure(
                &self.observers_path, line_no, format!("book {} does not exist in the catalog", fields[0]).as_str()))?;
            for id in parse_list(fields[1]) {
                match catalog.find_user_by_id(id.as_str()).cloned() {
                    Some(user) => catalog.add_observer_to_book(&book, &user),
                    None => warn!(user_id = id.as_str(), title = book.title.as_str(), "skipping unknown observer"),
                }
            }
        }
        Ok(())
    }
}

#[async_trait]
impl Repository<Catalog> for CsvCatalogRepository {
    async fn load(&self) -> LibraryResult<Catalog> {
        let mut catalog = Catalog::new();
        self.import_books(&mut catalog).await?;
        self.import_users(&mut catalog).await?;
        self.import_observers(&mut catalog).await?;
        for violation in catalog.loan_violations() {
            warn!(location = self.location().as_str(), "inconsistent loan: {}", violation);
        }
        info!(books = catalog.books().len(), users = catalog.users().len(),
              subscriptions = catalog.observers().len(), "catalog imported from csv");
        Ok(catalog)
    }

    async fn save(&self, catalog: &Catalog) -> LibraryResult<()> {
        write_all(&self.books_path, to_lines(catalog.books().iter().map(book_to_csv))).await?;
        write_all(&self.users_path, to_lines(catalog.users().iter().map(user_to_csv))).await?;
        write_all(&self.observers_path, to_lines(catalog.observers().iter()
            .map(|(title, ids)| observers_to_csv(title, ids)))).await?;
        info!(books = catalog.books().len(), users = catalog.users().len(), "catalog exported to csv");
        Ok(())
    }

    fn location(&self) -> String {
        format!("{}, {}, {}", self.books_path.display(), self.users_path.display(), self.observers_path.display())
    }
}

impl CatalogRepository for CsvCatalogRepository {
    fn store(&self) -> RepositoryStore {
        RepositoryStore::Csv
    }
}

fn to_lines<I: Iterator<Item=String>>(records: I) -> String {
    records.map(|record| record + "\n").collect()
}

pub(crate) fn book_to_csv(book: &BookEntity) -> String {
    format!("{};{};{};{}", book.title, book.author, book.year, book.status)
}

pub(crate) fn parse_book(line: &str) -> Result<BookEntity, String> {
    let fields: Vec<&str> = line.split(';').collect();
    if fields.len() != 4 {
        return Err(format!("expected 4 fields but found {}", fields.len()));
    }
    let year: i32 = fields[2].trim().parse()
        .map_err(|_| format!("invalid year {:?}", fields[2]))?;
    let status: BookStatus = fields[3].parse().map_err(|err: LibraryError| err.to_string())?;
    Ok(BookEntity::new(fields[0], fields[1], year, status))
}

pub(crate) fn user_to_csv(user: &UserEntity) -> String {
    format!("{};{};{};{};{};[{}]", user.role(), user.id, user.first_name, user.last_name, user.email,
            user.borrowed_books().join(", "))
}

pub(crate) fn observers_to_csv(title: &str, ids: &[String]) -> String {
    format!("{};[{}]", title, ids.join(","))
}

// "[a, b]" -> ["a", "b"]; "[]" -> []
pub(crate) fn parse_list(data: &str) -> Vec<String> {
    data.trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use tempfile::TempDir;
    use crate::books::domain::model::BookEntity;
    use crate::catalog::domain::model::Catalog;
    use crate::catalog::domain::shared;
    use crate::catalog::factory::create_catalog_service;
    use crate::catalog::repository::csv_catalog_repository::{book_to_csv, parse_book, parse_list, user_to_csv, CsvCatalogRepository};
    use crate::checkout::factory::create_checkout_service;
    use crate::core::domain::Configuration;
    use crate::core::library::{BookStatus, LibraryError, Role};
    use crate::core::repository::{Repository, RepositoryStore};
    use crate::gateway::GatewayPublisherVia;
    use crate::users::domain::model::UserEntity;

    fn build_repository(dir: &Path) -> (Configuration, CsvCatalogRepository) {
        let config = Configuration::new(dir, RepositoryStore::Csv);
        let repo = CsvCatalogRepository::new(&config);
        (config, repo)
    }

    fn populated() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add_book(BookEntity::new("Dune", "Herbert", 1965, BookStatus::Borrowed));
        catalog.add_book(BookEntity::new("Clean Code", "Robert C. Martin", 2008, BookStatus::Available));
        catalog.add_book(BookEntity::new("Design Patterns", "Gang of Four", 1994, BookStatus::Borrowed));
        let mut john = UserEntity::new("1", "John", "Doe", "john@example.com", Role::Student);
        john.add_book("Dune").expect("should add");
        john.add_book("Design Patterns").expect("should add");
        catalog.add_user(john);
        catalog.add_user(UserEntity::new("2", "Alice", "Smith", "alice@example.com", Role::Teacher));
        catalog.add_user(UserEntity::new("3", "Ann", "Lee", "ann@example.com", Role::Librarian));
        let dune = catalog.find_book("Dune").cloned().expect("book");
        let clean = catalog.find_book("Clean Code").cloned().expect("book");
        let alice = catalog.find_user_by_id("2").cloned().expect("user");
        let ann = catalog.find_user_by_id("3").cloned().expect("user");
        catalog.add_observer_to_book(&dune, &alice);
        catalog.add_observer_to_book(&dune, &ann);
        catalog.add_observer_to_book(&clean, &alice);
        catalog
    }

    #[tokio::test]
    async fn test_should_format_records() {
        let book = BookEntity::new("Dune", "Herbert", 1965, BookStatus::Available);
        assert_eq!("Dune;Herbert;1965;AVAILABLE", book_to_csv(&book));
        let mut user = UserEntity::new("1", "John", "Doe", "john@example.com", Role::Student);
        assert_eq!("STUDENT;1;John;Doe;john@example.com;[]", user_to_csv(&user));
        user.add_book("Dune").expect("should add");
        user.add_book("Clean Code").expect("should add");
        assert_eq!("STUDENT;1;John;Doe;john@example.com;[Dune, Clean Code]", user_to_csv(&user));
    }

    #[tokio::test]
    async fn test_should_parse_lists() {
        assert_eq!(vec!["Dune", "Clean Code"], parse_list("[Dune, Clean Code]"));
        assert_eq!(vec!["1", "2"], parse_list("[1,2]"));
        assert!(parse_list("[]").is_empty());
    }

    #[tokio::test]
    async fn test_should_reject_malformed_books() {
        assert!(parse_book("Dune;Herbert;1965").is_err());
        assert!(parse_book("Dune;Herbert;soon;AVAILABLE").is_err());
        assert!(parse_book("Dune;Herbert;1965;LOST").is_err());
        assert_eq!(BookStatus::Borrowed, parse_book("Dune;Herbert;1965;BORROWED").expect("should parse").status);
    }

    #[tokio::test]
    async fn test_should_round_trip_catalog() {
        let dir = TempDir::new().expect("temp dir");
        let (_, repo) = build_repository(dir.path());
        let catalog = populated();

        repo.save(&catalog).await.expect("should export");
        let loaded = repo.load().await.expect("should import");

        assert_eq!(catalog, loaded);
        assert!(loaded.loan_violations().is_empty());
    }

    #[tokio::test]
    async fn test_should_import_missing_files_as_empty() {
        let dir = TempDir::new().expect("temp dir");
        let (_, repo) = build_repository(dir.path().join("fresh").as_path());
        let loaded = repo.load().await.expect("should import");
        assert_eq!(Catalog::new(), loaded);
    }

    #[tokio::test]
    async fn test_should_create_data_dir_on_export() {
        let dir = TempDir::new().expect("temp dir");
        let (config, repo) = build_repository(dir.path().join("nested").join("data").as_path());
        repo.save(&populated()).await.expect("should export");
        let books = tokio::fs::read_to_string(config.books_path()).await.expect("books file");
        assert_eq!("Dune;Herbert;1965;BORROWED\nClean Code;Robert C. Martin;2008;AVAILABLE\nDesign Patterns;Gang of Four;1994;BORROWED\n", books);
        let observers = tokio::fs::read_to_string(config.observers_path()).await.expect("observers file");
        assert_eq!("Clean Code;[2]\nDune;[2,3]\n", observers);
    }

    #[tokio::test]
    async fn test_should_fail_on_malformed_line() {
        let dir = TempDir::new().expect("temp dir");
        let (config, repo) = build_repository(dir.path());
        tokio::fs::write(config.books_path(), "Dune;Herbert;1965;AVAILABLE\n\nBroken;line\n").await.expect("write");
        let res = repo.load().await;
        match res {
            Err(LibraryError::ImportFailure { message, path }) => {
                assert_eq!("line 3: expected 4 fields but found 2", message.as_str());
                assert!(path.expect("path").ends_with("Library.csv"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_should_fail_on_unknown_role() {
        let dir = TempDir::new().expect("temp dir");
        let (config, repo) = build_repository(dir.path());
        tokio::fs::write(config.users_path(), "PIRATE;1;Jack;Sparrow;jack@example.com;[]\n").await.expect("write");
        assert!(matches!(repo.load().await, Err(LibraryError::ImportFailure { .. })));
    }

    #[tokio::test]
    async fn test_should_skip_unresolved_references() {
        let dir = TempDir::new().expect("temp dir");
        let (config, repo) = build_repository(dir.path());
        tokio::fs::write(config.books_path(), "Dune;Herbert;1965;BORROWED\n").await.expect("write");
        tokio::fs::write(config.users_path(), "STUDENT;1;John;Doe;john@example.com;[Dune, Missing]\nTEACHER;2;Alice;Smith;alice@example.com\n").await.expect("write");
        tokio::fs::write(config.observers_path(), "dune;[2,99]\n").await.expect("write");

        let loaded = repo.load().await.expect("should import");
        assert_eq!(vec!["Dune".to_string()], loaded.find_user_by_id("1").expect("user").borrowed_books().to_vec());
        assert!(loaded.find_user_by_id("2").expect("user").borrowed_books().is_empty());
        assert_eq!(vec!["2".to_string()], loaded.observers().get("Dune").cloned().expect("observers"));
    }

    #[tokio::test]
    async fn test_should_fail_on_observer_for_unknown_book() {
        let dir = TempDir::new().expect("temp dir");
        let (config, repo) = build_repository(dir.path());
        tokio::fs::write(config.observers_path(), "Missing;[1]\n").await.expect("write");
        assert!(matches!(repo.load().await, Err(LibraryError::ImportFailure { .. })));
    }

    #[tokio::test]
    async fn test_should_keep_loans_of_titles_added_through_service() {
        let dir = TempDir::new().expect("temp dir");
        let (_, repo) = build_repository(dir.path());
        let catalog = shared(Catalog::new());
        let catalog_svc = create_catalog_service(&catalog);
        let checkout_svc = create_checkout_service(&catalog, GatewayPublisherVia::Memory);

        let padded = catalog_svc.add_book(&BookEntity::new("Dune ", "Herbert", 1965, BookStatus::Available)).await;
        assert!(matches!(padded, Err(LibraryError::Validation { .. })));
        let _ = catalog_svc.add_book(&BookEntity::new("Dune", "Herbert", 1965, BookStatus::Available))
            .await.expect("should add book");
        let _ = catalog_svc.add_book(&BookEntity::new("Dune Messiah", "Herbert", 1969, BookStatus::Available))
            .await.expect("should add book");
        let john = catalog_svc.register_user("student", "John", "Doe", "john@example.com").await.expect("should register");
        let _ = checkout_svc.borrow(john.id.as_str(), "dune").await.expect("should borrow");
        let _ = checkout_svc.borrow(john.id.as_str(), "dune messiah").await.expect("should borrow");

        let before = catalog_svc.snapshot().await;
        repo.save(&before).await.expect("should export");
        let loaded = repo.load().await.expect("should import");

        assert_eq!(before, loaded);
        assert_eq!(vec!["Dune".to_string(), "Dune Messiah".to_string()],
                   loaded.find_user_by_id(john.id.as_str()).expect("user").borrowed_books().to_vec());
        assert!(loaded.loan_violations().is_empty());
    }
}
