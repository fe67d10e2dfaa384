pub mod location;
pub mod payload;

pub use location::{FixedLocation, NoLocation, PageLocator};
pub use payload::{
    Asset, AssetKind, FeedbackCategory, FeedbackPayload, SubmissionResult, SubmissionStatus,
    SubmitOptions,
};
