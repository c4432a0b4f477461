pub mod handler;
pub mod helpers;
pub mod parsing;

pub use handler::SubmissionService;
