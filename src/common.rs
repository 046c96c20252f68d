pub mod error;
pub use error::AppError;
pub mod ownership;
pub use ownership::{ensure_owner, Owned};
