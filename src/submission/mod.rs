//! Submission state machine shared by the widget, the pre-built button and
//! the hook bindings.

pub mod machine;
pub mod options;
pub mod state;
pub mod transform;

pub use machine::Submission;
pub use options::{ConcurrencyPolicy, ErrorCallback, SubmissionOptions, SuccessCallback};
pub use state::SubmissionState;
pub use transform::{BeforeSubmit, TransformFuture};
