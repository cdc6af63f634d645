mod board;
mod detail;

pub use board::{JobBoard, PublicJobCard};
pub use detail::JobDetail;
