//! Presentation layer: the floating widget, the pre-built button and the
//! markup they render to.

pub mod button;
pub mod controller;
pub mod form;
pub mod markup;
pub mod options;
pub mod view;

pub use button::{FeedbackButton, FeedbackButtonProps};
pub use controller::{FeedbackWidget, init};
pub use markup::MarkupEngine;
pub use options::{WidgetOptions, WidgetPosition};
pub use view::{ButtonView, WidgetView};
