// src/config.rs

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

use crate::{
    db::{
        AnalyticsRepository, FinanceRepository, ProductRepository, ProjectRepository,
        SiteRepository, UserRepository,
    },
    services::{
        AnalyticsService, AuthService, FinanceService, ProductService, ProjectService, SiteService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub auth_service: AuthService,
    pub site_service: SiteService,
    pub project_service: ProjectService,
    pub product_service: ProductService,
    pub finance_service: FinanceService,
    pub analytics_service: AnalyticsService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET must be set");
        // Historically income rows could carry an expense category; setting
        // this makes the ledger reject them instead.
        let strict_expense_category = env::var("STRICT_EXPENSE_CATEGORY")
            .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Database connection established successfully!");

        // --- Wire the dependency graph ---
        let user_repo = UserRepository::new(db_pool.clone());
        let site_repo = SiteRepository::new(db_pool.clone());
        let project_repo = ProjectRepository::new(db_pool.clone());
        let product_repo = ProductRepository::new(db_pool.clone());
        let finance_repo = FinanceRepository::new(db_pool.clone());
        let analytics_repo = AnalyticsRepository::new(db_pool.clone());

        let auth_service = AuthService::new(user_repo, jwt_secret);
        let site_service = SiteService::new(site_repo.clone());
        let project_service = ProjectService::new(project_repo.clone(), site_repo.clone());
        let product_service = ProductService::new(product_repo, project_repo, site_repo);
        let finance_service = FinanceService::new(finance_repo, strict_expense_category);
        let analytics_service = AnalyticsService::new(analytics_repo);

        Ok(Self {
            db_pool,
            auth_service,
            site_service,
            project_service,
            product_service,
            finance_service,
            analytics_service,
        })
    }
}
