use dioxus::prelude::*;
use shared_types::{Applicant, ApplicantStatus};
use shared_ui::{use_toast, ToastOptions, Toasts};

use super::report_failure;

/// Applicants to the signed-in employer's postings.
#[derive(Clone, Copy)]
pub struct Applicants {
    applicants: Resource<Result<Vec<Applicant>, ServerFnError>>,
    toast: Toasts,
}

pub fn provide_applicants() -> Applicants {
    let toast = use_toast();
    let applicants = use_resource(|| async move { server::api::list_applicants().await });

    use_context_provider(|| Applicants { applicants, toast })
}

pub fn use_applicants() -> Applicants {
    use_context::<Applicants>()
}

impl Applicants {
    pub fn get_all_applicants(&self) -> Vec<Applicant> {
        match &*self.applicants.read() {
            Some(Ok(list)) => list.clone(),
            _ => Vec::new(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.applicants.read().is_none()
    }

    pub fn error(&self) -> Option<ServerFnError> {
        match &*self.applicants.read() {
            Some(Err(e)) => Some(e.clone()),
            _ => None,
        }
    }

    pub fn refresh(&mut self) {
        self.applicants.restart();
    }

    pub async fn update_applicant_status(
        mut self,
        applicant_id: String,
        status: ApplicantStatus,
    ) -> bool {
        match server::api::update_applicant_status(applicant_id, status).await {
            Ok(updated) => {
                self.toast.success(
                    format!("{} moved to {}", updated.name, status.as_str()),
                    ToastOptions::new(),
                );
                self.refresh();
                true
            }
            Err(e) => {
                report_failure(self.toast, "update_applicant_status", &e);
                false
            }
        }
    }
}
