use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{error, info};
use crate::catalog::command::add_book_cmd::AddBookCommandRequest;
use crate::catalog::command::add_user_cmd::AddUserCommandRequest;
use crate::catalog::command::list_books_cmd::ListBooksCommandRequest;
use crate::catalog::command::search_books_cmd::SearchBooksCommandRequest;
use crate::catalog::command::subscribe_book_cmd::SubscribeBookCommandRequest;
use crate::catalog::command::unsubscribe_book_cmd::UnsubscribeBookCommandRequest;
use crate::catalog::controller as catalog_controller;
use crate::catalog::repository::CatalogRepository;
use crate::checkout::command::borrow_book_cmd::BorrowBookCommandRequest;
use crate::checkout::command::return_book_cmd::ReturnBookCommandRequest;
use crate::checkout::controller as checkout_controller;
use crate::console::menu::{MenuOption, MENU};
use crate::core::command::CommandError;
use crate::core::controller::{AppState, OperatorError};
use crate::core::library::{BookStatus, LibraryError, LibraryResult};
use crate::core::repository::Repository;

// LibraryConsole drives the numbered menu over any line-oriented input and output.
// Each action runs to completion before the next choice is read.
pub struct LibraryConsole<R, W> {
    state: AppState,
    repository: Box<dyn CatalogRepository>,
    input: R,
    output: W,
}

impl<R: AsyncBufRead + Unpin, W: AsyncWrite + Unpin> LibraryConsole<R, W> {
    pub fn new(state: AppState, repository: Box<dyn CatalogRepository>, input: R, output: W) -> Self {
        Self {
            state,
            repository,
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    // Runs until Exit or end of input, then exports the catalog.
    pub async fn run(&mut self) -> LibraryResult<()> {
        loop {
            self.write(MENU).await?;
            let Some(choice) = self.ask("Enter your choice (1-10): ").await? else {
                break;
            };
            let Some(option) = MenuOption::from_choice(choice.as_str()) else {
                self.writeln("Invalid option. Please try again.").await?;
                continue;
            };
            if option == MenuOption::Exit {
                self.writeln("Exiting the library system.").await?;
                break;
            }
            if !self.dispatch(option).await? {
                break;
            }
        }
        self.export().await?;
        self.writeln("End of the program. Goodbye!").await
    }

    // Returns false when the input ended halfway through an action.
    async fn dispatch(&mut self, option: MenuOption) -> LibraryResult<bool> {
        info!(option = ?option, "menu action");
        match option {
            MenuOption::SearchBooks => {
                let Some(query) = self.ask("Enter book title to search: ").await? else { return Ok(false) };
                let res = catalog_controller::search_books(&self.state, SearchBooksCommandRequest::new(query.as_str())).await;
                match res {
                    Ok(res) if res.books.is_empty() => self.writeln("No books found.").await?,
                    Ok(res) => {
                        for book in res.books {
                            self.writeln(book.to_string().as_str()).await?;
                        }
                    }
                    Err(err) => self.report(err).await?,
                }
            }
            MenuOption::BorrowBook => {
                let Some(user_id) = self.ask("Enter user id: ").await? else { return Ok(false) };
                let Some(title) = self.ask("Enter book title to borrow: ").await? else { return Ok(false) };
                let res = checkout_controller::borrow_book(
                    &self.state, BorrowBookCommandRequest::new(user_id.as_str(), title.as_str())).await;
                match res {
                    Ok(_) => self.writeln("Book borrowed successfully!").await?,
                    Err(err) => self.report(err).await?,
                }
            }
            MenuOption::ReturnBook => {
                let Some(user_id) = self.ask("Enter user id: ").await? else { return Ok(false) };
                let Some(title) = self.ask("Enter book title to return: ").await? else { return Ok(false) };
                let res = checkout_controller::return_book(
                    &self.state, ReturnBookCommandRequest::new(user_id.as_str(), title.as_str())).await;
                match res {
                    Ok(_) => self.writeln("Book returned successfully!").await?,
                    Err(err) => self.report(err).await?,
                }
            }
            MenuOption::AddBook => {
                let Some(title) = self.ask("Enter book title: ").await? else { return Ok(false) };
                let Some(author) = self.ask("Enter book author: ").await? else { return Ok(false) };
                let Some(year) = self.ask("Enter book year: ").await? else { return Ok(false) };
                let Ok(year) = year.trim().parse::<i32>() else {
                    let err = LibraryError::validation(
                        format!("year {:?} is not a number", year.trim()).as_str(), Some("year".to_string()));
                    self.report(OperatorError::from(CommandError::from(err))).await?;
                    return Ok(true);
                };
                let res = catalog_controller::add_book(
                    &self.state, AddBookCommandRequest::new(title.as_str(), author.as_str(), year)).await;
                match res {
                    Ok(_) => self.writeln("Book added to catalog.").await?,
                    Err(err) => self.report(err).await?,
                }
            }
            MenuOption::AddUser => {
                let Some(first_name) = self.ask("Enter user first name: ").await? else { return Ok(false) };
                let Some(last_name) = self.ask("Enter user last name: ").await? else { return Ok(false) };
                let Some(email) = self.ask("Enter user email: ").await? else { return Ok(false) };
                let Some(role) = self.ask("Enter user type: ").await? else { return Ok(false) };
                let res = catalog_controller::add_user(&self.state, AddUserCommandRequest::new(
                    role.as_str(), first_name.as_str(), last_name.as_str(), email.as_str())).await;
                match res {
                    Ok(res) => self.writeln(format!("User added to system with id {}.", res.user.id).as_str()).await?,
                    Err(err) => self.report(err).await?,
                }
            }
            MenuOption::ShowUsers => {
                let res = catalog_controller::list_users(&self.state).await;
                match res {
                    Ok(res) if res.users.is_empty() => self.writeln("No users in the system.").await?,
                    Ok(res) => {
                        for user in res.users {
                            self.writeln(user.to_string().as_str()).await?;
                        }
                    }
                    Err(err) => self.report(err).await?,
                }
            }
            MenuOption::ShowAvailableBooks => {
                let res = catalog_controller::list_books(
                    &self.state, ListBooksCommandRequest::new(Some(BookStatus::Available))).await;
                match res {
                    Ok(res) if res.books.is_empty() => self.writeln("No available books in the catalog.").await?,
                    Ok(res) => {
                        self.writeln("List of available books:").await?;
                        for book in res.books {
                            self.writeln(book.to_string().as_str()).await?;
                        }
                    }
                    Err(err) => self.report(err).await?,
                }
            }
            MenuOption::Subscribe => {
                let Some(user_id) = self.ask("Enter user id: ").await? else { return Ok(false) };
                let Some(title) = self.ask("Enter book title to subscribe: ").await? else { return Ok(false) };
                let res = catalog_controller::subscribe_book(
                    &self.state, SubscribeBookCommandRequest::new(user_id.as_str(), title.as_str())).await;
                match res {
                    Ok(res) => self.writeln(format!("Subscribed to notifications for book: {} ({} subscribers)",
                                                    res.title, res.subscribers.len()).as_str()).await?,
                    Err(err) => self.report(err).await?,
                }
            }
            MenuOption::Unsubscribe => {
                let Some(user_id) = self.ask("Enter user id: ").await? else { return Ok(false) };
                let Some(title) = self.ask("Enter book title to unsubscribe: ").await? else { return Ok(false) };
                let res = catalog_controller::unsubscribe_book(
                    &self.state, UnsubscribeBookCommandRequest::new(user_id.as_str(), title.as_str())).await;
                match res {
                    Ok(res) => self.writeln(format!("Unsubscribed from notifications for book: {} ({} subscribers)",
                                                    res.title, res.subscribers.len()).as_str()).await?,
                    Err(err) => self.report(err).await?,
                }
            }
            MenuOption::Exit => return Ok(false),
        }
        Ok(true)
    }

    // An export failure is reported to the operator; the console still shuts down normally.
    async fn export(&mut self) -> LibraryResult<()> {
        let catalog = self.state.catalog.lock().await.clone();
        match self.repository.save(&catalog).await {
            Ok(_) => {
                info!(location = self.repository.location().as_str(), "catalog exported");
                self.writeln("Export data to file completed successfully.").await
            }
            Err(err) => {
                error!(location = self.repository.location().as_str(), "export failed: {}", err);
                self.writeln(format!("Error exporting data: {}", err).as_str()).await
            }
        }
    }

    async fn report(&mut self, (severity, message): OperatorError) -> LibraryResult<()> {
        self.writeln(format!("{}: {}", severity, message).as_str()).await
    }

    // None once the input is exhausted.
    async fn ask(&mut self, prompt: &str) -> LibraryResult<Option<String>> {
        self.write(prompt).await?;
        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    async fn write(&mut self, text: &str) -> LibraryResult<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }

    async fn writeln(&mut self, text: &str) -> LibraryResult<()> {
        self.write(format!("{}\n", text).as_str()).await
    }
}
