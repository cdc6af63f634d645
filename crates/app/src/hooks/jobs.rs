use dioxus::prelude::*;
use shared_types::{search_jobs, CreateJobRequest, Job, UpdateJobRequest};
use shared_ui::{use_toast, ToastOptions, Toasts};

use super::report_failure;

/// The signed-in employer's postings plus the search box that filters them.
///
/// Every mutator calls its server function and then re-fetches the list.
/// Mutators resolve to `true` on success so dialogs know when to close.
#[derive(Clone, Copy)]
pub struct EmployerJobs {
    jobs: Resource<Result<Vec<Job>, ServerFnError>>,
    search_query: Signal<String>,
    toast: Toasts,
}

/// Create the jobs handle and provide it to the page's subtree.
pub fn provide_employer_jobs() -> EmployerJobs {
    let toast = use_toast();
    let search_query = use_signal(String::new);
    let jobs = use_resource(|| async move { server::api::list_employer_jobs().await });

    use_context_provider(|| EmployerJobs {
        jobs,
        search_query,
        toast,
    })
}

pub fn use_employer_jobs() -> EmployerJobs {
    use_context::<EmployerJobs>()
}

impl EmployerJobs {
    /// Every posting, newest first. Empty while loading or after an error.
    pub fn jobs(&self) -> Vec<Job> {
        match &*self.jobs.read() {
            Some(Ok(jobs)) => jobs.clone(),
            _ => Vec::new(),
        }
    }

    /// Postings matching the current search query.
    pub fn filtered_jobs(&self) -> Vec<Job> {
        search_jobs(&self.jobs(), &self.search_query.read())
    }

    pub fn is_loading(&self) -> bool {
        self.jobs.read().is_none()
    }

    pub fn error(&self) -> Option<ServerFnError> {
        match &*self.jobs.read() {
            Some(Err(e)) => Some(e.clone()),
            _ => None,
        }
    }

    pub fn search_query(&self) -> String {
        self.search_query.read().clone()
    }

    pub fn set_search_query(&mut self, query: String) {
        self.search_query.set(query);
    }

    pub fn fetch_jobs(&mut self) {
        self.jobs.restart();
    }

    pub async fn create_job(mut self, req: CreateJobRequest) -> bool {
        match server::api::create_job(req).await {
            Ok(job) => {
                tracing::info!(job_id = %job.job_id, "Job created");
                self.toast
                    .success("Job posted successfully".to_string(), ToastOptions::new());
                self.fetch_jobs();
                true
            }
            Err(e) => {
                report_failure(self.toast, "create_job", &e);
                false
            }
        }
    }

    pub async fn update_job(mut self, job_id: String, req: UpdateJobRequest) -> bool {
        match server::api::update_job(job_id, req).await {
            Ok(_) => {
                self.toast
                    .success("Job updated successfully".to_string(), ToastOptions::new());
                self.fetch_jobs();
                true
            }
            Err(e) => {
                report_failure(self.toast, "update_job", &e);
                false
            }
        }
    }

    pub async fn delete_job(mut self, job_id: String) -> bool {
        match server::api::delete_job(job_id).await {
            Ok(()) => {
                self.toast.success("Job deleted".to_string(), ToastOptions::new());
                self.fetch_jobs();
                true
            }
            Err(e) => {
                report_failure(self.toast, "delete_job", &e);
                false
            }
        }
    }

    pub async fn duplicate_job(mut self, job: Job) -> bool {
        match server::api::duplicate_job(job.job_id).await {
            Ok(copy) => {
                self.toast
                    .success(format!("Created \"{}\"", copy.title), ToastOptions::new());
                self.fetch_jobs();
                true
            }
            Err(e) => {
                report_failure(self.toast, "duplicate_job", &e);
                false
            }
        }
    }

    pub async fn activate_job(mut self, job_id: String) -> bool {
        match server::api::activate_job(job_id).await {
            Ok(_) => {
                self.toast.success("Job activated".to_string(), ToastOptions::new());
                self.fetch_jobs();
                true
            }
            Err(e) => {
                report_failure(self.toast, "activate_job", &e);
                false
            }
        }
    }

    pub async fn deactivate_job(mut self, job_id: String) -> bool {
        match server::api::deactivate_job(job_id).await {
            Ok(_) => {
                self.toast.success("Job closed".to_string(), ToastOptions::new());
                self.fetch_jobs();
                true
            }
            Err(e) => {
                report_failure(self.toast, "deactivate_job", &e);
                false
            }
        }
    }

    /// Flip the premium boost on a posting.
    pub async fn toggle_boost(mut self, job: Job) -> bool {
        let boosted = !job.is_premium;
        match server::api::update_job(job.job_id, UpdateJobRequest::boost(boosted)).await {
            Ok(_) => {
                let msg = if boosted { "Boost enabled" } else { "Boost removed" };
                self.toast.success(msg.to_string(), ToastOptions::new());
                self.fetch_jobs();
                true
            }
            Err(e) => {
                report_failure(self.toast, "toggle_boost", &e);
                false
            }
        }
    }
}
