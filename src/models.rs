pub mod auth;
pub use auth::{User, UserProfile, UserRole};
pub mod site;
pub use site::{Region, Site};
pub mod project;
pub use project::{Project, ProjectStatus};
pub mod product;
pub use product::{AvailabilityStatus, Product};
pub mod finance;
pub use finance::{ExpenseCategory, Investment, Transaction, TransactionType};
pub mod analytics;
pub use analytics::AnalyticsSummary;
