#[cfg(feature = "server")]
pub(crate) mod auth;

mod account;
pub use account::*;

mod jobs;
pub use jobs::*;

mod applicants;
pub use applicants::*;

mod directory;
pub use directory::*;
