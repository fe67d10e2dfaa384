//! Everything an embedding application usually needs, in one import.

pub use crate::client::{FeedbackClient, create_feedback_client};
pub use crate::core::{
    Asset, AssetKind, FeedbackCategory, FixedLocation, PageLocator, SubmissionResult,
    SubmitOptions,
};
pub use crate::error::{ErrorKind, FeedbackError, SubmissionError};
pub use crate::hooks::{FeedbackContext, UseFeedbackOptions, use_feedback};
pub use crate::submission::{ConcurrencyPolicy, Submission, SubmissionOptions, SubmissionState};
pub use crate::transport::submit_feedback;
pub use crate::widget::{
    FeedbackButton, FeedbackButtonProps, FeedbackWidget, WidgetOptions, WidgetPosition, init,
};
