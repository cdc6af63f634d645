mod applicants;
mod boosting;
mod dashboard;
mod interviews;
mod job_card;
mod job_form;
mod jobs;
mod projects;

pub use applicants::AllApplicants;
pub use boosting::BoostingServices;
pub use dashboard::EmployerDashboard;
pub use interviews::InterviewSchedule;
pub use jobs::EmployerJobs;
pub use projects::ProjectsPage;
