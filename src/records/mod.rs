//! # Built-in Record Types
//!
//! The collections served out of the box: `items`, `users`, `comments` and
//! `todos`. Each is a plain serde struct; wire names and omitted fields are
//! declared on the fields.

mod comment;
mod item;
mod todo;
mod user;

pub use comment::Comment;
pub use item::Item;
pub use todo::Todo;
pub use user::User;

/// Collection names of every built-in record type, in route order
pub const BUILTIN_COLLECTIONS: [&str; 4] = ["items", "users", "comments", "todos"];

/// Demo inventory seeded into `items` when `seed_demo_data` is on
pub fn demo_items() -> Vec<Item> {
    vec![
        Item::new("Laptop", 1000),
        Item::new("Phone", 500),
        Item::new("Tablet", 300),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Record;

    #[test]
    fn test_builtin_collections_match_types() {
        assert_eq!(
            BUILTIN_COLLECTIONS,
            [
                Item::COLLECTION,
                User::COLLECTION,
                Comment::COLLECTION,
                Todo::COLLECTION
            ]
        );
    }
}
