#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MenuOption {
    SearchBooks,
    BorrowBook,
    ReturnBook,
    AddBook,
    AddUser,
    ShowUsers,
    ShowAvailableBooks,
    Subscribe,
    Unsubscribe,
    Exit,
}

pub const MENU: &str = "\nLibrary Menu:\n\
1. Search Books\n\
2. Borrow Book\n\
3. Return Book\n\
4. Add Book\n\
5. Add User\n\
6. Show Users\n\
7. Show Available Books\n\
8. Subscribe to Notifications\n\
9. Unsubscribe from Notifications\n\
10. Exit\n";

impl MenuOption {
    // None for anything that is not a number between 1 and 10
    pub fn from_choice(choice: &str) -> Option<MenuOption> {
        match choice.trim().parse::<u32>().ok()? {
            1 => Some(MenuOption::SearchBooks),
            2 => Some(MenuOption::BorrowBook),
            3 => Some(MenuOption::ReturnBook),
            4 => Some(MenuOption::AddBook),
            5 => Some(MenuOption::AddUser),
            6 => Some(MenuOption::ShowUsers),
            7 => Some(MenuOption::ShowAvailableBooks),
            8 => Some(MenuOption::Subscribe),
            9 => Some(MenuOption::Unsubscribe),
            10 => Some(MenuOption::Exit),
            _ => None,
        }
    }
}
