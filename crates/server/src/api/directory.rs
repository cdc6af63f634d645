use dioxus::prelude::*;
use shared_types::{FreelancerProfile, PlatformOverview};

#[cfg(feature = "server")]
use crate::db::get_store;

#[cfg(feature = "server")]
use super::auth::*;

/// Freelancer directory for signed-in users.
#[server]
pub async fn list_freelancers() -> Result<Vec<FreelancerProfile>, ServerFnError> {
    require_auth()?;
    Ok(crate::repo::user::list_freelancers(get_store()).await)
}

/// Headline counts for the admin dashboard.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn platform_overview() -> Result<PlatformOverview, ServerFnError> {
    use shared_types::AccountType;

    require_account(AccountType::Admin)?;
    Ok(crate::repo::user::platform_overview(get_store()).await)
}
