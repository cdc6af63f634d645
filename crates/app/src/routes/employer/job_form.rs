use dioxus::prelude::*;
use shared_types::{CreateJobRequest, Job, JobStatus, UpdateJobRequest};
use shared_ui::{
    DialogContent, DialogDescription, DialogFooter, DialogRoot, DialogTitle, FormSelect, Input,
    Textarea,
};

use crate::format_helpers::non_blank;
use crate::hooks::use_employer_jobs;

const JOB_TYPES: &[&str] = &["Full-time", "Part-time", "Contract", "Freelance", "Internship"];
const EXPERIENCE_LEVELS: &[&str] = &["", "Entry", "Junior", "Mid-level", "Senior", "Lead"];
const FORM_STATUSES: [JobStatus; 3] = [JobStatus::Draft, JobStatus::Active, JobStatus::Expired];

#[derive(Clone, Copy, PartialEq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Editable copy of a posting's fields, as the form holds them.
#[derive(Debug, Clone, PartialEq)]
pub struct JobDraft {
    pub title: String,
    pub description: String,
    pub job_type: String,
    pub location: String,
    pub salary_range: String,
    pub experience_level: String,
    pub status: JobStatus,
}

impl Default for JobDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            job_type: JOB_TYPES[0].to_string(),
            location: String::new(),
            salary_range: String::new(),
            experience_level: String::new(),
            status: JobStatus::Draft,
        }
    }
}

impl JobDraft {
    pub fn from_job(job: &Job) -> Self {
        Self {
            title: job.title.clone(),
            description: job.description.clone(),
            job_type: job.job_type.clone(),
            location: job.location.clone().unwrap_or_default(),
            salary_range: job.salary_range.clone().unwrap_or_default(),
            experience_level: job.experience_level.clone().unwrap_or_default(),
            status: job.status,
        }
    }

    pub fn to_create(&self) -> CreateJobRequest {
        CreateJobRequest {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            job_type: self.job_type.clone(),
            location: non_blank(&self.location),
            salary_range: non_blank(&self.salary_range),
            experience_level: non_blank(&self.experience_level),
            status: Some(self.status),
        }
    }

    /// PATCH body holding only the fields that differ from `initial`.
    /// A cleared optional field is sent as an empty string.
    pub fn changes_since(&self, initial: &JobDraft) -> UpdateJobRequest {
        fn changed(now: &str, before: &str) -> Option<String> {
            (now.trim() != before.trim()).then(|| now.trim().to_string())
        }

        UpdateJobRequest {
            title: changed(&self.title, &initial.title),
            description: changed(&self.description, &initial.description),
            job_type: changed(&self.job_type, &initial.job_type),
            location: changed(&self.location, &initial.location),
            salary_range: changed(&self.salary_range, &initial.salary_range),
            experience_level: changed(&self.experience_level, &initial.experience_level),
            status: (self.status != initial.status).then_some(self.status),
            is_premium: None,
        }
    }
}

/// "Post a job" dialog used by the dashboard and the jobs page.
#[component]
pub fn NewJobPostDialog(open: bool, on_close: EventHandler<()>) -> Element {
    rsx! {
        JobFormDialog { mode: FormMode::Create, initial: None, open, on_close }
    }
}

#[component]
pub fn EditJobDialog(job: Job, open: bool, on_close: EventHandler<()>) -> Element {
    rsx! {
        JobFormDialog { mode: FormMode::Edit, initial: Some(job), open, on_close }
    }
}

/// Create/edit form for a posting. Edits only send changed fields.
#[component]
fn JobFormDialog(
    mode: FormMode,
    initial: Option<Job>,
    open: bool,
    on_close: EventHandler<()>,
) -> Element {
    let jobs = use_employer_jobs();
    let mut draft = use_signal(JobDraft::default);
    let mut in_flight = use_signal(|| false);

    let baseline = initial.as_ref().map(JobDraft::from_job).unwrap_or_default();
    let hydrate_from = baseline.clone();

    // Reset the fields every time the dialog opens.
    use_effect(use_reactive!(|open| {
        if open {
            draft.set(hydrate_from.clone());
        }
    }));

    let job_id = initial.as_ref().map(|j| j.job_id.clone()).unwrap_or_default();
    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        if in_flight() {
            return;
        }
        let current = draft.read().clone();
        let job_id = job_id.clone();
        let baseline = baseline.clone();
        spawn(async move {
            in_flight.set(true);
            let saved = match mode {
                FormMode::Create => jobs.create_job(current.to_create()).await,
                FormMode::Edit => {
                    jobs.update_job(job_id, current.changes_since(&baseline))
                        .await
                }
            };
            in_flight.set(false);
            if saved {
                on_close.call(());
            }
        });
    };

    let (title, description, submit_label) = match mode {
        FormMode::Create => ("Post a New Job", "Fill in the details below to publish a posting.", "Create Job"),
        FormMode::Edit => ("Edit Job", "Only changed fields are saved.", "Save Changes"),
    };

    rsx! {
        DialogRoot {
            open,
            on_open_change: move |v: bool| {
                if !v {
                    on_close.call(());
                }
            },
            DialogContent {
                DialogTitle { "{title}" }
                DialogDescription { "{description}" }

                form { onsubmit: handle_save,
                    div { class: "job-form",
                        Input {
                            label: "Job title *",
                            value: draft.read().title.clone(),
                            on_input: move |e: FormEvent| draft.write().title = e.value(),
                            placeholder: "e.g., Senior Rust Engineer",
                        }
                        Textarea {
                            label: "Description",
                            value: draft.read().description.clone(),
                            on_input: move |e: FormEvent| draft.write().description = e.value(),
                            placeholder: "Responsibilities, requirements, benefits...",
                        }

                        hr { class: "job-form-divider" }

                        div { class: "job-form-row",
                            FormSelect {
                                label: "Job type *",
                                value: draft.read().job_type.clone(),
                                onchange: move |e: Event<FormData>| draft.write().job_type = e.value(),
                                for t in JOB_TYPES {
                                    option { value: *t, "{t}" }
                                }
                            }
                            FormSelect {
                                label: "Experience",
                                value: draft.read().experience_level.clone(),
                                onchange: move |e: Event<FormData>| draft.write().experience_level = e.value(),
                                for level in EXPERIENCE_LEVELS {
                                    option { value: *level,
                                        if level.is_empty() { "Any" } else { "{level}" }
                                    }
                                }
                            }
                        }
                        div { class: "job-form-row",
                            Input {
                                label: "Location",
                                value: draft.read().location.clone(),
                                on_input: move |e: FormEvent| draft.write().location = e.value(),
                                placeholder: "e.g., Remote",
                            }
                            Input {
                                label: "Salary range",
                                value: draft.read().salary_range.clone(),
                                on_input: move |e: FormEvent| draft.write().salary_range = e.value(),
                                placeholder: "e.g., $120k - $150k",
                            }
                        }
                        FormSelect {
                            label: "Status",
                            value: draft.read().status.as_str().to_string(),
                            onchange: move |e: Event<FormData>| {
                                if let Some(status) = JobStatus::from_str_opt(&e.value()) {
                                    draft.write().status = status;
                                }
                            },
                            for s in FORM_STATUSES {
                                option { value: s.as_str(), "{s.label()}" }
                            }
                        }
                    }

                    DialogFooter {
                        button {
                            class: "vd-button",
                            "data-style": "outline",
                            r#type: "button",
                            onclick: move |_| on_close.call(()),
                            "Cancel"
                        }
                        button {
                            class: "vd-button",
                            "data-style": "primary",
                            r#type: "submit",
                            disabled: in_flight(),
                            if in_flight() { "Saving..." } else { "{submit_label}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn posted() -> JobDraft {
        JobDraft {
            title: "Rust Engineer".into(),
            description: "Build things".into(),
            job_type: "Full-time".into(),
            location: "Remote".into(),
            salary_range: String::new(),
            experience_level: "Senior".into(),
            status: JobStatus::Active,
        }
    }

    #[test]
    fn create_request_drops_blank_optionals() {
        let req = posted().to_create();
        assert_eq!(req.location.as_deref(), Some("Remote"));
        assert_eq!(req.salary_range, None);
        assert_eq!(req.status, Some(JobStatus::Active));
    }

    #[test]
    fn unchanged_draft_sends_nothing() {
        let draft = posted();
        assert_eq!(draft.changes_since(&posted()), UpdateJobRequest::default());
    }

    #[test]
    fn edits_send_only_changed_fields() {
        let mut draft = posted();
        draft.title = "Staff Rust Engineer ".into();
        draft.location.clear();
        draft.status = JobStatus::Expired;

        let req = draft.changes_since(&posted());
        assert_eq!(req.title.as_deref(), Some("Staff Rust Engineer"));
        assert_eq!(req.location.as_deref(), Some(""));
        assert_eq!(req.status, Some(JobStatus::Expired));
        assert_eq!(req.description, None);
        assert_eq!(req.is_premium, None);
    }
}
