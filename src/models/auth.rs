// src/models/auth.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "user_role", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Farmer,
    Seller,
    Both,
}

impl Default for UserRole {
    fn default() -> Self {
        UserRole::Farmer
    }
}

// Represents an account coming from the database. Never serialized directly;
// the API surface is [`UserProfile`].
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub location: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Splits a display name on the first space: first token becomes the first
/// name, the remainder (which may itself contain spaces) the last name.
/// A name without a space leaves the last name empty.
pub fn split_display_name(name: &str) -> (&str, &str) {
    match name.split_once(' ') {
        Some((first, rest)) => (first, rest),
        None => (name, ""),
    }
}

impl User {
    /// The inverse of [`split_display_name`]: first and last name joined,
    /// with no trailing space when the last name is empty.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

// Public projection of an account. The credential hash stays internal.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    #[schema(example = "adama@farm.com")]
    pub email: String,
    #[schema(example = "Adama Traoré")]
    pub name: String,
    pub phone: String,
    pub location: String,
    pub role: UserRole,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        let name = user.display_name();
        UserProfile {
            id: user.id,
            email: user.email,
            name,
            phone: user.phone,
            location: user.location,
            role: user.role,
        }
    }
}

// Data for registering a new account.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterUserPayload {
    #[validate(email(message = "The provided e-mail is invalid."))]
    pub email: String,
    #[validate(length(min = 6, message = "The password must be at least 6 characters long."))]
    pub password: String,
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub name: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub role: Option<UserRole>,
}

// Data for login.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginUserPayload {
    #[validate(email(message = "The provided e-mail is invalid."))]
    pub email: String,
    #[validate(length(min = 6, message = "The password must be at least 6 characters long."))]
    pub password: String,
}

// Data for exchanging a refresh token for a new access token.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RefreshPayload {
    pub refresh: String,
}

// Partial profile update. Role and e-mail are not updatable here; unknown
// fields in the request body are ignored.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProfilePayload {
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub name: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
}

// Authentication response with the token pair.
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub access: String,
    pub refresh: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RefreshResponse {
    pub access: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

// Claims carried inside the JWT.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,  // Subject (account id)
    pub exp: usize, // Expiration time
    pub iat: usize, // Issued at
    pub kind: TokenKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_splits_on_the_first_space_only() {
        assert_eq!(split_display_name("Adama Traoré"), ("Adama", "Traoré"));
        assert_eq!(
            split_display_name("Aminata Diallo Keita"),
            ("Aminata", "Diallo Keita")
        );
    }

    #[test]
    fn name_without_space_has_empty_last_name() {
        assert_eq!(split_display_name("Adama"), ("Adama", ""));
        assert_eq!(split_display_name(""), ("", ""));
    }

    #[test]
    fn display_name_joins_without_trailing_space() {
        let mut user = sample_user();
        user.first_name = "Adama".to_string();
        user.last_name = "Diallo Keita".to_string();
        assert_eq!(user.display_name(), "Adama Diallo Keita");

        user.last_name = String::new();
        assert_eq!(user.display_name(), "Adama");
    }

    #[test]
    fn profile_serializes_camel_case_and_hides_the_hash() {
        let user = sample_user();
        let profile = UserProfile::from(user);
        let json = serde_json::to_value(&profile).unwrap();

        assert_eq!(json["name"], "Adama Traoré");
        assert_eq!(json["role"], "FARMER");
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password_hash").is_none());
    }

    #[test]
    fn token_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_value(TokenKind::Access).unwrap(), "access");
        assert_eq!(serde_json::to_value(TokenKind::Refresh).unwrap(), "refresh");
    }

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            email: "adama@farm.com".to_string(),
            password_hash: "$2b$12$abcdefghijklmnopqrstuv".to_string(),
            first_name: "Adama".to_string(),
            last_name: "Traoré".to_string(),
            phone: "+223 70 00 00 00".to_string(),
            location: "Kayes".to_string(),
            role: UserRole::Farmer,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}
