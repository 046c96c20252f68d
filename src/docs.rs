// src/docs.rs

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::refresh,
        handlers::auth::get_profile,
        handlers::auth::update_profile,

        // --- Sites ---
        handlers::sites::list_sites,
        handlers::sites::create_site,
        handlers::sites::get_site,
        handlers::sites::update_site,
        handlers::sites::delete_site,

        // --- Projects ---
        handlers::projects::list_projects,
        handlers::projects::create_project,
        handlers::projects::get_project,
        handlers::projects::update_project,
        handlers::projects::delete_project,

        // --- Products ---
        handlers::products::list_products,
        handlers::products::get_product,
        handlers::products::create_product,
        handlers::products::update_product,
        handlers::products::delete_product,

        // --- Finance ---
        handlers::finance::list_transactions,
        handlers::finance::create_transaction,
        handlers::finance::get_transaction,
        handlers::finance::update_transaction,
        handlers::finance::delete_transaction,
        handlers::finance::list_investments,
        handlers::finance::create_investment,
        handlers::finance::get_investment,
        handlers::finance::update_investment,
        handlers::finance::delete_investment,

        // --- Analytics ---
        handlers::analytics::get_summary,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::UserRole,
            models::auth::UserProfile,
            models::auth::RegisterUserPayload,
            models::auth::LoginUserPayload,
            models::auth::RefreshPayload,
            models::auth::UpdateProfilePayload,
            models::auth::AuthResponse,
            models::auth::RefreshResponse,

            // --- Sites ---
            models::site::Region,
            models::site::Site,
            models::site::CreateSitePayload,
            models::site::UpdateSitePayload,

            // --- Projects ---
            models::project::ProjectStatus,
            models::project::Project,
            models::project::CreateProjectPayload,
            models::project::UpdateProjectPayload,

            // --- Products ---
            models::product::AvailabilityStatus,
            models::product::Product,
            models::product::CreateProductPayload,
            models::product::UpdateProductPayload,

            // --- Finance ---
            models::finance::TransactionType,
            models::finance::ExpenseCategory,
            models::finance::Transaction,
            models::finance::Investment,
            models::finance::CreateTransactionPayload,
            models::finance::UpdateTransactionPayload,
            models::finance::CreateInvestmentPayload,
            models::finance::UpdateInvestmentPayload,

            // --- Analytics ---
            models::analytics::StatusCount,
            models::analytics::CropRevenue,
            models::analytics::CropYield,
            models::analytics::AnalyticsSummary,
        )
    ),
    tags(
        (name = "Auth", description = "Registration, login and profile"),
        (name = "Sites", description = "Farm site registry"),
        (name = "Projects", description = "Cultivation projects per site"),
        (name = "Products", description = "Marketplace catalog"),
        (name = "Finance", description = "Transactions and investments ledger"),
        (name = "Analytics", description = "Dashboard aggregates")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
