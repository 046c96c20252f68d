// src/services/site_service.rs

use uuid::Uuid;

use crate::{
    common::error::{field_error, AppError},
    common::ownership::ensure_owner,
    db::SiteRepository,
    models::site::{CreateSitePayload, Region, Site, UpdateSitePayload},
};

// Fixed-choice parsing for the region field, with the usual message for an
// unknown value.
fn parse_region(value: &str) -> Result<Region, AppError> {
    Region::from_name(value).ok_or_else(|| {
        field_error(
            "location",
            "invalid_choice",
            format!("\"{value}\" is not a valid choice."),
        )
    })
}

#[derive(Clone)]
pub struct SiteService {
    site_repo: SiteRepository,
}

impl SiteService {
    pub fn new(site_repo: SiteRepository) -> Self {
        Self { site_repo }
    }

    pub async fn list(&self, actor_id: Uuid) -> Result<Vec<Site>, AppError> {
        self.site_repo.find_by_farmer(actor_id).await
    }

    pub async fn create(&self, actor_id: Uuid, payload: CreateSitePayload) -> Result<Site, AppError> {
        let location = match payload.location.as_deref() {
            Some(value) => parse_region(value)?,
            None => Region::Bamako,
        };
        self.site_repo.create(actor_id, &payload.name, location).await
    }

    // Scoped read: someone else's site looks exactly like a missing one.
    pub async fn retrieve(&self, actor_id: Uuid, site_id: Uuid) -> Result<Site, AppError> {
        self.site_repo
            .find_scoped(site_id, actor_id)
            .await?
            .ok_or(AppError::NotFound("Site not found."))
    }

    pub async fn update(
        &self,
        actor_id: Uuid,
        site_id: Uuid,
        payload: UpdateSitePayload,
    ) -> Result<Site, AppError> {
        let site = self
            .site_repo
            .find_by_id(site_id)
            .await?
            .ok_or(AppError::NotFound("Site not found."))?;
        ensure_owner(
            actor_id,
            &site,
            "You do not have permission to perform this action.",
        )?;

        let location = payload.location.as_deref().map(parse_region).transpose()?;
        self.site_repo
            .update(site_id, payload.name.as_deref(), location)
            .await
    }

    pub async fn delete(&self, actor_id: Uuid, site_id: Uuid) -> Result<(), AppError> {
        let site = self
            .site_repo
            .find_by_id(site_id)
            .await?
            .ok_or(AppError::NotFound("Site not found."))?;
        ensure_owner(
            actor_id,
            &site,
            "You do not have permission to perform this action.",
        )?;

        self.site_repo.delete(site_id).await?;
        tracing::info!(
            "🗑️ Site {} deleted; its projects and products go with it.",
            site_id
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_regions_parse_and_unknown_ones_cite_the_field() {
        assert_eq!(parse_region("Kayes").unwrap(), Region::Kayes);
        assert_eq!(parse_region("Ségou").unwrap(), Region::Segou);

        let err = parse_region("Atlantis").unwrap_err();
        match err {
            AppError::ValidationError(errors) => {
                let fields = errors.field_errors();
                let messages = &fields["location"];
                assert_eq!(
                    messages[0].message.as_deref(),
                    Some("\"Atlantis\" is not a valid choice.")
                );
            }
            other => panic!("expected ValidationError, got {other:?}"),
        }
    }
}
