pub mod error;
pub mod feature_flags;

pub mod models;
pub mod requests;

// Marketplace domain
pub mod applicant;
pub mod job;
pub mod navigation;
pub mod project;
pub mod time_ago;

pub use error::*;
pub use feature_flags::*;
pub use models::*;
pub use requests::*;

pub use applicant::*;
pub use job::*;
pub use navigation::*;
pub use project::*;
pub use time_ago::*;
