mod applicants;
mod jobs;

pub use applicants::{provide_applicants, use_applicants, Applicants};
pub use jobs::{provide_employer_jobs, use_employer_jobs, EmployerJobs};

use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{ToastOptions, Toasts};

/// Log a failed mutation and surface it as an error toast.
pub(crate) fn report_failure(toast: Toasts, action: &'static str, error: &ServerFnError) {
    let message = error.to_string();
    tracing::error!(action, error = %message, "Request failed");
    toast.error(AppError::friendly_message(&message), ToastOptions::new());
}
