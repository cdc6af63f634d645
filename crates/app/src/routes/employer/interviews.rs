use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdArrowLeft, LdCalendar};
use dioxus_free_icons::Icon;
use shared_types::{AccountType, Applicant, ApplicantStatus};
use shared_ui::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    EmptyState, Skeleton,
};

use crate::format_helpers::format_date_human;
use crate::hooks::{provide_applicants, use_applicants};
use crate::routes::dashboard_layout::DashboardLayout;
use crate::routes::guard::RoleGuard;
use crate::routes::Route;

/// Candidates currently at the interview stage, oldest application first.
fn interview_queue(applicants: &[Applicant]) -> Vec<Applicant> {
    let mut queue: Vec<Applicant> = applicants
        .iter()
        .filter(|a| a.status == ApplicantStatus::Interview)
        .cloned()
        .collect();
    queue.sort_by_key(|a| a.applied_at);
    queue
}

#[component]
pub fn InterviewSchedule() -> Element {
    rsx! {
        RoleGuard { role: AccountType::Employer, area: "interview schedule",
            DashboardLayout { title: "Interviews", role: AccountType::Employer,
                InterviewQueue {}
            }
        }
    }
}

#[component]
fn InterviewQueue() -> Element {
    let applicants = provide_applicants();
    let queue = interview_queue(&applicants.get_all_applicants());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./employer.css") }

        Link { to: Route::AllApplicants {}, class: "back-link",
            Icon { icon: LdArrowLeft, width: 16, height: 16 }
            "Back to Applicants"
        }

        if applicants.is_loading() {
            div { class: "loading",
                Skeleton {}
                Skeleton {}
            }
        } else if queue.is_empty() {
            EmptyState {
                title: "No interviews scheduled",
                description: "Move an applicant to Interview from the applicants page.",
                icon: rsx! { Icon { icon: LdCalendar, width: 32, height: 32 } },
            }
        } else {
            div { class: "interview-list",
                for applicant in queue.iter() {
                    InterviewCard { key: "{applicant.id}", applicant: applicant.clone() }
                }
            }
        }
    }
}

#[component]
fn InterviewCard(applicant: Applicant) -> Element {
    let applicants = use_applicants();

    let move_to = move |id: String, status: ApplicantStatus| {
        spawn(async move {
            applicants.update_applicant_status(id, status).await;
        });
    };
    let offer_id = applicant.id.clone();
    let reject_id = applicant.id.clone();

    rsx! {
        Card {
            CardHeader {
                CardTitle { "{applicant.name}" }
                CardDescription { "{applicant.position} · applied {format_date_human(applicant.applied_at)}" }
            }
            CardContent {
                div { class: "interview-actions",
                    a { href: "mailto:{applicant.email}", class: "interview-email", "{applicant.email}" }
                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Small,
                        onclick: move |_| move_to(offer_id.clone(), ApplicantStatus::Offered),
                        "Make Offer"
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Small,
                        onclick: move |_| move_to(reject_id.clone(), ApplicantStatus::Rejected),
                        "Reject"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn applicant(id: &str, status: ApplicantStatus, day: u32) -> Applicant {
        Applicant {
            id: id.into(),
            job_id: "job-1".into(),
            candidate_id: 7,
            name: format!("Candidate {id}"),
            email: format!("{id}@example.com"),
            position: "Rust Engineer".into(),
            status,
            applied_at: Utc.with_ymd_and_hms(2025, 4, day, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn queue_holds_interviews_oldest_first() {
        let all = vec![
            applicant("a", ApplicantStatus::Interview, 9),
            applicant("b", ApplicantStatus::New, 1),
            applicant("c", ApplicantStatus::Interview, 2),
            applicant("d", ApplicantStatus::Hired, 3),
        ];
        let ids: Vec<String> = interview_queue(&all).into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["c".to_string(), "a".to_string()]);
    }
}
