use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::domain::password::validate_password_strength;
use crate::entities::employer::EmployerDetails;
use crate::entities::job_seeker::JobSeekerDetails;
use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Jobseeker,
    Employer,
}

/// Shared base record linking an identity to a role and contact info.
/// Exactly one per identity; the role tag has no update path.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Profile {
    pub id: Uuid,
    pub identity_id: Uuid,
    pub user_type: UserType,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ProfileInsert {
    pub identity_id: Uuid,
    pub user_type: UserType,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Role-specific registration payload, tagged the same way the `user_type`
/// column is.
#[derive(Debug, Deserialize)]
#[serde(tag = "user_type", rename_all = "lowercase")]
pub enum RoleData {
    Jobseeker(JobSeekerDetails),
    Employer(EmployerDetails),
}

impl RoleData {
    pub fn user_type(&self) -> UserType {
        match self {
            RoleData::Jobseeker(_) => UserType::Jobseeker,
            RoleData::Employer(_) => UserType::Employer,
        }
    }
}

impl Validate for RoleData {
    fn validate(&self) -> Result<(), ValidationErrors> {
        match self {
            RoleData::Jobseeker(details) => details.validate(),
            RoleData::Employer(details) => details.validate(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct RegistrationRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(
        length(min = 8, message = "Must be at least 8 characters"),
        custom(
            function = "validate_password_strength",
            message = "Must include uppercase, number, and symbol"
        )
    )]
    pub password: String,

    #[serde(default)]
    pub confirm_password: String,

    pub phone: Option<String>,
    pub location: Option<String>,

    #[validate(nested)]
    #[serde(flatten)]
    pub role: RoleData,
}

impl RegistrationRequest {
    /// Validator derive does not see across fields; the confirmation check
    /// runs before any provider call.
    pub fn ensure_passwords_match(&self) -> Result<(), AppError> {
        if self.password != self.confirm_password {
            return Err(AppError::field_error(
                "confirm_password",
                "Passwords do not match",
            ));
        }
        Ok(())
    }

    pub fn profile_insert(&self, identity_id: Uuid) -> ProfileInsert {
        let now = Utc::now();
        ProfileInsert {
            identity_id,
            user_type: self.role.user_type(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            location: self.location.clone(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Result of a completed sign-up: the identity plus both tiers of the
/// provisioned profile.
#[derive(Debug, Serialize)]
pub struct RegisteredAccount {
    pub identity_id: Uuid,
    pub profile_id: Uuid,
    pub role_profile_id: Uuid,
    pub user_type: UserType,
}
