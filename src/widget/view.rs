use super::form::AttachmentPreview;
use super::options::WidgetPosition;
use serde::Serialize;

pub const SUCCESS_TOAST: &str = "Thanks for your feedback!";

/// Snapshot of everything the floating widget shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetView {
    pub position: WidgetPosition,
    pub button_text: String,
    pub primary_color: String,
    pub modal_open: bool,
    pub title: String,
    pub placeholder: String,
    pub message: String,
    pub email: String,
    pub attachment: Option<AttachmentPreview>,
    pub submit_label: &'static str,
    pub submit_disabled: bool,
    pub error_banner: Option<String>,
    pub success: bool,
    pub toast: Option<String>,
}

/// Snapshot of the pre-built button and its dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonView {
    pub button_text: String,
    pub class_name: String,
    pub dialog_open: bool,
    pub title: String,
    pub placeholder: String,
    pub message: String,
    pub attachment: Option<AttachmentPreview>,
    pub submit_label: &'static str,
    pub submit_disabled: bool,
    pub controls_disabled: bool,
    pub toast: Option<String>,
}
