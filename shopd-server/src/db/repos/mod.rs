//! Repository implementations for database access

pub mod users;

pub use users::{DbError, SortColumn, SortOrder, User, UserListQuery, UserRepo, UserSort};
