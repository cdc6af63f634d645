use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

use crate::{AccountType, ApplicantStatus, AuthUser, JobStatus};

/// Request DTO for email/password login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 8, message = "Password must be at least 8 characters"))
    )]
    pub password: String,
}

/// Request DTO for self-service account creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct SignupRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, max = 80, message = "Name must be 1-80 characters"))
    )]
    pub name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 8, message = "Password must be at least 8 characters"))
    )]
    pub password: String,
    pub account_type: AccountType,
}

/// Request DTO for posting a job.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct CreateJobRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 3, max = 120, message = "Title must be 3-120 characters"))
    )]
    pub title: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(max = 5000, message = "Description must be at most 5000 characters"))
    )]
    #[serde(default)]
    pub description: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Job type is required"))
    )]
    pub job_type: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub salary_range: Option<String>,
    #[serde(default)]
    pub experience_level: Option<String>,
    /// Defaults to draft.
    #[serde(default)]
    pub status: Option<JobStatus>,
}

/// Request DTO for editing a job. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct UpdateJobRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 3, max = 120, message = "Title must be 3-120 characters"))
    )]
    #[serde(default)]
    pub title: Option<String>,
    #[cfg_attr(
        feature = "validation",
        validate(length(max = 5000, message = "Description must be at most 5000 characters"))
    )]
    #[serde(default)]
    pub description: Option<String>,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Job type is required"))
    )]
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub salary_range: Option<String>,
    #[serde(default)]
    pub experience_level: Option<String>,
    #[serde(default)]
    pub status: Option<JobStatus>,
    #[serde(default)]
    pub is_premium: Option<bool>,
}

impl UpdateJobRequest {
    pub fn boost(is_premium: bool) -> Self {
        Self {
            is_premium: Some(is_premium),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateApplicantStatusRequest {
    pub status: ApplicantStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct ApplyRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Job is required"))
    )]
    pub job_id: String,
}

/// Response DTO for REST login: the access token plus the user it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AuthResponse {
    pub token: String,
    pub user: AuthUser,
}
