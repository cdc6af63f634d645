use std::fmt;

use crate::{AccountType, AuthUser};

/// A labelled link in the navbar or a dashboard rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Center links of the employer navbar.
pub const EMPLOYER_NAV: [NavLink; 5] = [
    NavLink { label: "Freelancers", href: "/freelancers" },
    NavLink { label: "Insights", href: "/insights" },
    NavLink { label: "Jobs", href: "/employer/jobs" },
    NavLink { label: "Projects", href: "/employer/projects" },
    NavLink { label: "Boosting Services", href: "/employer/boosting-services" },
];

/// Icon bar of the job seeker navbar.
pub const JOB_SEEKER_NAV: [NavLink; 3] = [
    NavLink { label: "Home", href: "/" },
    NavLink { label: "Jobs", href: "/jobs" },
    NavLink { label: "Profile", href: "/jobseeker/dashboard" },
];

/// Left rail of the employer dashboard layout.
pub const EMPLOYER_RAIL: [NavLink; 6] = [
    NavLink { label: "Dashboard", href: "/employer/dashboard" },
    NavLink { label: "Jobs", href: "/employer/jobs" },
    NavLink { label: "Applicants", href: "/employer/applicants" },
    NavLink { label: "Interviews", href: "/employer/interviews/schedule" },
    NavLink { label: "Projects", href: "/employer/projects" },
    NavLink { label: "Insights", href: "/insights" },
];

pub fn dashboard_path(user: Option<&AuthUser>) -> &'static str {
    match user.map(|u| u.account_type) {
        None => "/",
        Some(AccountType::Admin) => "/admin/dashboard",
        Some(AccountType::Employer) => "/employer/dashboard",
        Some(AccountType::JobSeeker) => "/jobseeker/dashboard",
        Some(AccountType::Freelancer) => "/freelancer/dashboard",
    }
}

pub fn dashboard_link(user: Option<&AuthUser>) -> Option<NavLink> {
    let user = user?;
    let label = if user.account_type == AccountType::Admin {
        "Admin Dashboard"
    } else {
        "Dashboard"
    };
    Some(NavLink {
        label,
        href: dashboard_path(Some(user)),
    })
}

/// Which navbar layout a visitor gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarVariant {
    /// Log in and Sign up buttons.
    Anonymous,
    /// Icon bar plus a standalone Logout button.
    JobSeeker,
    /// Center links, dashboard link and the account dropdown.
    Employer,
    /// Admins and freelancers: dashboard link and the account dropdown.
    Member,
}

impl NavbarVariant {
    pub fn for_user(user: Option<&AuthUser>) -> Self {
        match user.map(|u| u.account_type) {
            None => NavbarVariant::Anonymous,
            Some(AccountType::JobSeeker) => NavbarVariant::JobSeeker,
            Some(AccountType::Employer) => NavbarVariant::Employer,
            Some(AccountType::Admin | AccountType::Freelancer) => NavbarVariant::Member,
        }
    }
}

/// Percent-encode a path for a query value, keeping `/` readable.
fn encode_path(path: &str) -> String {
    urlencoding::encode(path).replace("%2F", "/")
}

/// The `returnUrl` query carried by the login routes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReturnTo {
    pub return_url: Option<String>,
}

impl ReturnTo {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            return_url: Some(path.into()),
        }
    }

    /// Where to go after a successful login. Only same-site paths are
    /// honored; anything else falls back to the user's dashboard.
    pub fn target<'a>(&'a self, user: Option<&AuthUser>) -> &'a str {
        match self.return_url.as_deref() {
            Some(url) if url.starts_with('/') && !url.starts_with("//") => url,
            _ => dashboard_path(user),
        }
    }
}

impl From<&str> for ReturnTo {
    fn from(query: &str) -> Self {
        let return_url = query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == "returnUrl")
            .and_then(|(_, value)| urlencoding::decode(value).ok())
            .map(|value| value.into_owned())
            .filter(|value| !value.is_empty());
        Self { return_url }
    }
}

impl fmt::Display for ReturnTo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.return_url {
            Some(url) => write!(f, "returnUrl={}", encode_path(url)),
            None => Ok(()),
        }
    }
}

/// Outcome of checking the current user against a guarded page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Auth state is still loading. Show a spinner, do not redirect.
    Pending,
    RequireLogin { redirect: String },
    Deny { redirect: String },
    Allow,
}

pub fn guard_decision(
    loading: bool,
    user: Option<&AuthUser>,
    required: AccountType,
    here: &str,
) -> GuardDecision {
    if loading {
        return GuardDecision::Pending;
    }
    match user {
        None => GuardDecision::RequireLogin {
            redirect: format!("/admin/login?{}", ReturnTo::new(here)),
        },
        Some(user) if !user.has_role(required) => GuardDecision::Deny {
            redirect: "/".to_string(),
        },
        Some(_) => GuardDecision::Allow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user(account_type: AccountType) -> AuthUser {
        AuthUser {
            id: 7,
            name: "Riley Park".into(),
            email: "riley@example.com".into(),
            account_type,
            avatar_url: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn dashboard_path_per_role() {
        assert_eq!(dashboard_path(None), "/");
        assert_eq!(dashboard_path(Some(&user(AccountType::Admin))), "/admin/dashboard");
        assert_eq!(dashboard_path(Some(&user(AccountType::Employer))), "/employer/dashboard");
        assert_eq!(dashboard_path(Some(&user(AccountType::JobSeeker))), "/jobseeker/dashboard");
        assert_eq!(
            dashboard_path(Some(&user(AccountType::Freelancer))),
            "/freelancer/dashboard"
        );
    }

    #[test]
    fn dashboard_link_labels() {
        assert_eq!(dashboard_link(None), None);
        let admin = dashboard_link(Some(&user(AccountType::Admin))).unwrap();
        assert_eq!(admin.label, "Admin Dashboard");
        let employer = dashboard_link(Some(&user(AccountType::Employer))).unwrap();
        assert_eq!(employer.label, "Dashboard");
        assert_eq!(employer.href, "/employer/dashboard");
    }

    #[test]
    fn navbar_variant_per_role() {
        assert_eq!(NavbarVariant::for_user(None), NavbarVariant::Anonymous);
        assert_eq!(
            NavbarVariant::for_user(Some(&user(AccountType::JobSeeker))),
            NavbarVariant::JobSeeker
        );
        assert_eq!(
            NavbarVariant::for_user(Some(&user(AccountType::Employer))),
            NavbarVariant::Employer
        );
        assert_eq!(
            NavbarVariant::for_user(Some(&user(AccountType::Freelancer))),
            NavbarVariant::Member
        );
        assert_eq!(
            NavbarVariant::for_user(Some(&user(AccountType::Admin))),
            NavbarVariant::Member
        );
    }

    #[test]
    fn employer_nav_order() {
        let labels: Vec<_> = EMPLOYER_NAV.iter().map(|l| l.label).collect();
        assert_eq!(
            labels,
            vec!["Freelancers", "Insights", "Jobs", "Projects", "Boosting Services"]
        );
        assert_eq!(JOB_SEEKER_NAV[2].href, "/jobseeker/dashboard");
    }

    #[test]
    fn return_to_parses_and_renders() {
        let parsed = ReturnTo::from("returnUrl=%2Femployer%2Fjobs&x=1");
        assert_eq!(parsed.return_url.as_deref(), Some("/employer/jobs"));
        assert_eq!(
            ReturnTo::new("/employer/dashboard").to_string(),
            "returnUrl=/employer/dashboard"
        );
        assert_eq!(ReturnTo::from("").return_url, None);
        assert_eq!(ReturnTo::default().to_string(), "");
    }

    #[test]
    fn return_to_rejects_off_site_targets() {
        let employer = user(AccountType::Employer);
        assert_eq!(ReturnTo::new("/employer/jobs").target(Some(&employer)), "/employer/jobs");
        assert_eq!(
            ReturnTo::new("https://evil.test").target(Some(&employer)),
            "/employer/dashboard"
        );
        assert_eq!(ReturnTo::new("//evil.test").target(None), "/");
        assert_eq!(ReturnTo::default().target(Some(&employer)), "/employer/dashboard");
    }

    #[test]
    fn guard_waits_while_loading() {
        assert_eq!(
            guard_decision(true, None, AccountType::Employer, "/employer/jobs"),
            GuardDecision::Pending
        );
    }

    #[test]
    fn guard_sends_anonymous_visitors_to_admin_login() {
        assert_eq!(
            guard_decision(false, None, AccountType::Employer, "/employer/dashboard"),
            GuardDecision::RequireLogin {
                redirect: "/admin/login?returnUrl=/employer/dashboard".into()
            }
        );
    }

    #[test]
    fn guard_denies_wrong_role_and_allows_right_one() {
        let seeker = user(AccountType::JobSeeker);
        assert_eq!(
            guard_decision(false, Some(&seeker), AccountType::Employer, "/employer/jobs"),
            GuardDecision::Deny { redirect: "/".into() }
        );
        let employer = user(AccountType::Employer);
        assert_eq!(
            guard_decision(false, Some(&employer), AccountType::Employer, "/employer/jobs"),
            GuardDecision::Allow
        );
    }
}
