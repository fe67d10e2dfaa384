#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::struct_field_names,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use
)]

pub mod client;
pub mod config;
pub mod core;
pub mod error;
pub mod hooks;
pub mod media;
pub mod prelude;
pub mod submission;
pub mod transport;
pub mod ui;
pub mod widget;

pub use client::{FeedbackClient, create_feedback_client};
pub use config::Config;
pub use error::{ErrorKind, FeedbackError, SubmissionError};
pub use transport::submit_feedback;
