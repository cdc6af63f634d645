pub mod applicant;
pub mod job;
pub mod session;
pub mod user;
