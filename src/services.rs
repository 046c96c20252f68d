pub mod auth;
pub use auth::AuthService;
pub mod site_service;
pub use site_service::SiteService;
pub mod project_service;
pub use project_service::ProjectService;
pub mod product_service;
pub use product_service::ProductService;
pub mod finance_service;
pub use finance_service::FinanceService;
pub mod analytics_service;
pub use analytics_service::AnalyticsService;
