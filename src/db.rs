pub mod user_repo;
pub use user_repo::UserRepository;
pub mod site_repo;
pub use site_repo::SiteRepository;
pub mod project_repo;
pub use project_repo::ProjectRepository;
pub mod product_repo;
pub use product_repo::ProductRepository;
pub mod finance_repo;
pub use finance_repo::FinanceRepository;
pub mod analytics_repo;
pub use analytics_repo::AnalyticsRepository;
