use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The four account types of the marketplace.
///
/// The account type decides which dashboard, which navbar variant and which
/// guarded pages a user gets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    Admin,
    Employer,
    #[default]
    JobSeeker,
    Freelancer,
}

impl AccountType {
    pub const ALL: [AccountType; 4] = [
        AccountType::Admin,
        AccountType::Employer,
        AccountType::JobSeeker,
        AccountType::Freelancer,
    ];

    /// Parse from the JWT `role` claim. Unknown values fall back to job seeker,
    /// the least privileged account type.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "admin" => AccountType::Admin,
            "employer" => AccountType::Employer,
            "freelancer" => AccountType::Freelancer,
            _ => AccountType::JobSeeker,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Admin => "admin",
            AccountType::Employer => "employer",
            AccountType::JobSeeker => "job_seeker",
            AccountType::Freelancer => "freelancer",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccountType::Admin => "Admin",
            AccountType::Employer => "Employer",
            AccountType::JobSeeker => "Job Seeker",
            AccountType::Freelancer => "Freelancer",
        }
    }

    /// Job seekers and freelancers apply to postings.
    pub fn is_candidate(&self) -> bool {
        matches!(self, AccountType::JobSeeker | AccountType::Freelancer)
    }
}

/// The signed-in user as seen by the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AuthUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub account_type: AccountType,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl AuthUser {
    pub fn has_role(&self, account_type: AccountType) -> bool {
        self.account_type == account_type
    }
}

/// Up to two uppercase initials for avatar fallbacks.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

/// Headline counts for the admin platform overview.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PlatformOverview {
    pub employers: usize,
    pub job_seekers: usize,
    pub freelancers: usize,
    pub admins: usize,
    pub jobs: crate::JobStatistics,
    pub applications: usize,
}

/// Public card for the freelancer directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FreelancerProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub joined_at: DateTime<Utc>,
    pub applications: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_type_uses_snake_case_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&AccountType::JobSeeker).unwrap(),
            "\"job_seeker\""
        );
        let parsed: AccountType = serde_json::from_str("\"employer\"").unwrap();
        assert_eq!(parsed, AccountType::Employer);
    }

    #[test]
    fn claim_parsing_round_trips_and_defaults() {
        for t in AccountType::ALL {
            assert_eq!(AccountType::from_str_or_default(t.as_str()), t);
        }
        assert_eq!(AccountType::from_str_or_default("EMPLOYER"), AccountType::Employer);
        assert_eq!(AccountType::from_str_or_default("superuser"), AccountType::JobSeeker);
    }

    #[test]
    fn candidates_are_seekers_and_freelancers() {
        assert!(AccountType::JobSeeker.is_candidate());
        assert!(AccountType::Freelancer.is_candidate());
        assert!(!AccountType::Employer.is_candidate());
        assert!(!AccountType::Admin.is_candidate());
    }

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(initials("Ada Lovelace"), "AL");
        assert_eq!(initials("grace brewster murray hopper"), "GB");
        assert_eq!(initials("Cher"), "C");
        assert_eq!(initials("   "), "");
    }
}
