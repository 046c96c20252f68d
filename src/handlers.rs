pub mod analytics;
pub mod auth;
pub mod finance;
pub mod products;
pub mod projects;
pub mod sites;
