use crate::core::domain::Identifiable;
use crate::core::library::{max_books_for, Role};

pub mod model;

pub trait Member: Identifiable {
    fn role(&self) -> Role;
    fn full_name(&self) -> String;
    fn email(&self) -> &str;
    fn max_books(&self) -> usize {
        max_books_for(self.role())
    }
    fn is_role(&self, match_role: Role) -> bool {
        self.role() == match_role
    }
}
