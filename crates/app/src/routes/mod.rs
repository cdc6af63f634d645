pub mod admin;
pub mod candidate;
pub mod dashboard_layout;
pub mod directory;
pub mod employer;
pub mod error_boundary;
pub mod guard;
pub mod home;
pub mod jobs;
pub mod login;
pub mod navbar;
pub mod not_found;
pub mod profile;
pub mod signup;

use dioxus::prelude::*;
use shared_types::ReturnTo;

use crate::auth::use_auth;
use admin::AdminDashboard;
use candidate::{FreelancerDashboard, JobSeekerDashboard};
use directory::{Freelancers, Insights};
use employer::{
    AllApplicants, BoostingServices, EmployerDashboard, EmployerJobs, InterviewSchedule,
    ProjectsPage,
};
use error_boundary::ApiErrorBoundary;
use home::Home;
use jobs::{JobBoard, JobDetail};
use login::{AdminLogin, Login};
use navbar::Navbar;
use not_found::NotFound;
use profile::Profile;
use signup::Signup;

/// Application routes. Every page renders inside [`Layout`].
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},
    #[route("/login?:..query")]
    Login { query: ReturnTo },
    #[route("/admin/login?:..query")]
    AdminLogin { query: ReturnTo },
    #[route("/signup")]
    Signup {},
    // ── Public board ──
    #[route("/jobs")]
    JobBoard {},
    #[route("/jobs/:id")]
    JobDetail { id: String },
    #[route("/profile")]
    Profile {},
    // ── Employer ──
    #[route("/employer/dashboard")]
    EmployerDashboard {},
    #[route("/employer/jobs")]
    EmployerJobs {},
    #[route("/employer/applicants")]
    AllApplicants {},
    #[route("/employer/interviews/schedule")]
    InterviewSchedule {},
    #[route("/employer/projects")]
    ProjectsPage {},
    #[route("/employer/boosting-services")]
    BoostingServices {},
    #[route("/freelancers")]
    Freelancers {},
    #[route("/insights")]
    Insights {},
    // ── Other dashboards ──
    #[route("/admin/dashboard")]
    AdminDashboard {},
    #[route("/jobseeker/dashboard")]
    JobSeekerDashboard {},
    #[route("/freelancer/dashboard")]
    FreelancerDashboard {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Navigate to an in-app path such as a guard redirect. Paths that do not
/// parse as a route go home.
pub fn push_path(path: &str) {
    match path.parse::<Route>() {
        Ok(route) => {
            navigator().push(route);
        }
        Err(_) => {
            tracing::warn!(path, "Unroutable redirect target");
            navigator().push(Route::Home {});
        }
    }
}

/// Root layout: resolves the session once, then renders the navbar and the
/// current page inside an error boundary.
#[component]
fn Layout() -> Element {
    let mut auth = use_auth();
    let route: Route = use_route();

    // `?` suspends until the session check resolves; the SuspenseBoundary in
    // App shows the loading state meanwhile.
    let session = use_server_future(move || async move { server::api::get_current_user().await })?;

    use_effect(move || {
        if let Some(result) = session.read().as_ref() {
            match result {
                Ok(user) => auth.resolve(user.clone()),
                Err(e) => {
                    tracing::warn!(error = %e, "Session check failed");
                    auth.resolve(None);
                }
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "app-shell",
            Navbar {}
            main { class: "page-content",
                ApiErrorBoundary { key: "{route}",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn login_route_carries_return_url() {
        let route: Route = "/login?returnUrl=%2Femployer%2Fjobs".parse().unwrap();
        assert_eq!(
            route,
            Route::Login {
                query: ReturnTo::new("/employer/jobs")
            }
        );
    }

    #[test]
    fn employer_paths_match_navigation_hrefs() {
        for link in shared_types::EMPLOYER_RAIL {
            assert!(link.href.parse::<Route>().is_ok(), "{} does not route", link.href);
        }
        assert_eq!(Route::EmployerJobs {}.to_string(), "/employer/jobs");
        assert_eq!(
            Route::InterviewSchedule {}.to_string(),
            "/employer/interviews/schedule"
        );
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        let route: Route = "/nowhere/at/all".parse().unwrap();
        assert!(matches!(route, Route::NotFound { .. }));
    }
}
