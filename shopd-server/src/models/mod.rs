//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod pagination;
pub mod user;
pub mod validation;

pub use pagination::Pagination;
pub use user::{NewUser, UserEmail, UserName, UserPatch};
pub use validation::ValidationError;
