use crate::core::library::{LibraryResult, Role};
use crate::users::domain::model::UserEntity;

// builds a user from a role name as typed by the operator or read from storage
pub fn create_user(role: &str, id: &str, first_name: &str, last_name: &str, email: &str) -> LibraryResult<UserEntity> {
    let role: Role = role.parse()?;
    Ok(UserEntity::new(id, first_name, last_name, email, role))
}

#[cfg(test)]
mod tests {
    use crate::core::library::{LibraryError, Role};
    use crate::users::domain::Member;
    use crate::users::factory::create_user;

    #[tokio::test]
    async fn test_should_create_each_role() {
        for (name, role, max) in [("student", Role::Student, 5), ("TEACHER", Role::Teacher, 10)] {
            let user = create_user(name, "7", "Jane", "Roe", "jane@example.com").expect("should create user");
            assert_eq!(role, user.role());
            assert_eq!(max, user.max_books());
        }
        let librarian = create_user("Librarian", "8", "Ann", "Lee", "ann@example.com").expect("should create librarian");
        assert!(librarian.is_role(Role::Librarian));
    }

    #[tokio::test]
    async fn test_should_reject_unknown_role() {
        let res = create_user("janitor", "9", "Bob", "Bob", "bob@example.com");
        assert!(matches!(res, Err(LibraryError::UnknownRole { role }) if role == "janitor"));
    }
}
