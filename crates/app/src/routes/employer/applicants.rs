use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdSparkles, LdTrendingUp, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{
    filter_applicants, AccountType, Applicant, ApplicantStats, ApplicantStatus, StatusFilter,
};
use shared_ui::{
    Badge, Button, ButtonSize, ButtonVariant, Card, CardContent, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, FormSelect,
    SearchBar, SearchInput, Skeleton, StatCard,
};

use crate::format_helpers::{applicant_status_variant, format_date_human};
use crate::hooks::{provide_applicants, use_applicants};
use crate::routes::dashboard_layout::DashboardLayout;
use crate::routes::guard::RoleGuard;
use crate::routes::Route;

#[component]
pub fn AllApplicants() -> Element {
    rsx! {
        RoleGuard { role: AccountType::Employer, area: "applicants page",
            DashboardLayout { title: "Applicants", role: AccountType::Employer,
                ApplicantsPage {}
            }
        }
    }
}

#[component]
fn ApplicantsPage() -> Element {
    let mut applicants = provide_applicants();
    let mut search = use_signal(String::new);
    let mut filter = use_signal(StatusFilter::default);

    let all = applicants.get_all_applicants();
    let stats = ApplicantStats::from_applicants(&all);
    let rows = filter_applicants(&all, &search.read(), filter());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./employer.css") }

        div { class: "stat-grid",
            StatCard {
                label: "Total Applicants",
                value: stats.total.to_string(),
                tone: "blue",
                icon: rsx! { Icon { icon: LdUsers, width: 18, height: 18 } },
            }
            StatCard {
                label: "New",
                value: stats.new.to_string(),
                hint: format!("{} reviewed", stats.reviewed),
                tone: "violet",
                icon: rsx! { Icon { icon: LdSparkles, width: 18, height: 18 } },
            }
            StatCard {
                label: "Interviews",
                value: stats.interview.to_string(),
                hint: format!("{} offered", stats.offered),
                tone: "amber",
                icon: rsx! { Icon { icon: LdCalendar, width: 18, height: 18 } },
            }
            StatCard {
                label: "Hired",
                value: stats.hired.to_string(),
                hint: format!("{} rejected", stats.rejected),
                tone: "emerald",
                icon: rsx! { Icon { icon: LdTrendingUp, width: 18, height: 18 } },
            }
        }

        div { class: "applicants-toolbar",
            SearchBar {
                SearchInput {
                    value: search(),
                    placeholder: "Search by name, email or position...",
                    on_input: move |q: String| search.set(q),
                }
            }
            FormSelect {
                value: filter().as_value().to_string(),
                onchange: move |e: Event<FormData>| filter.set(StatusFilter::parse(&e.value())),
                option { value: "all", "All statuses" }
                for status in ApplicantStatus::ALL {
                    option { value: status.as_str(), "{status.as_str()}" }
                }
            }
        }

        if applicants.is_loading() {
            div { class: "loading",
                Skeleton {}
                Skeleton {}
            }
        } else if let Some(err) = applicants.error() {
            Card {
                CardContent {
                    p { class: "error-text", "Could not load applicants: {err}" }
                    Button { variant: ButtonVariant::Outline, onclick: move |_| applicants.refresh(), "Try again" }
                }
            }
        } else {
            Card {
                CardContent {
                    DataTable {
                        DataTableHeader {
                            DataTableColumn { "Candidate" }
                            DataTableColumn { "Position" }
                            DataTableColumn { "Applied" }
                            DataTableColumn { "Status" }
                            DataTableColumn { "" }
                        }
                        DataTableBody {
                            for applicant in rows.iter() {
                                ApplicantRow { key: "{applicant.id}", applicant: applicant.clone() }
                            }
                            if rows.is_empty() {
                                DataTableEmpty { colspan: 5, "No applicants match your filters" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ApplicantRow(applicant: Applicant) -> Element {
    let applicants = use_applicants();
    let status = applicant.status;

    let status_id = applicant.id.clone();
    let on_status = move |e: Event<FormData>| {
        let Some(next) = ApplicantStatus::from_str_opt(&e.value()) else {
            return;
        };
        if next == status {
            return;
        }
        let id = status_id.clone();
        spawn(async move {
            applicants.update_applicant_status(id, next).await;
        });
    };

    let schedule_id = applicant.id.clone();
    let on_schedule = move |_: MouseEvent| {
        let id = schedule_id.clone();
        spawn(async move {
            if applicants
                .update_applicant_status(id, ApplicantStatus::Interview)
                .await
            {
                navigator().push(Route::InterviewSchedule {});
            }
        });
    };

    rsx! {
        DataTableRow {
            DataTableCell {
                div { class: "applicant-name", "{applicant.name}" }
                div { class: "applicant-email", "{applicant.email}" }
            }
            DataTableCell { "{applicant.position}" }
            DataTableCell { "{format_date_human(applicant.applied_at)}" }
            DataTableCell {
                div { class: "applicant-status",
                    Badge { variant: applicant_status_variant(status), "{status.as_str()}" }
                    FormSelect {
                        value: status.as_str().to_string(),
                        onchange: on_status,
                        for option_status in ApplicantStatus::ALL {
                            option { value: option_status.as_str(), "{option_status.as_str()}" }
                        }
                    }
                }
            }
            DataTableCell {
                if !status.is_closed() && status != ApplicantStatus::Interview {
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Small,
                        onclick: on_schedule,
                        Icon { icon: LdCalendar, width: 14, height: 14 }
                        "Schedule Interview"
                    }
                }
            }
        }
    }
}
