use super::form::DraftForm;
use super::view::{ButtonView, SUCCESS_TOAST};
use crate::client::FeedbackClient;
use crate::core::SubmissionResult;
use crate::error::{FeedbackError, SubmissionError};
use crate::media::ImageAttachment;
use crate::submission::{
    ConcurrencyPolicy, ErrorCallback, Submission, SubmissionOptions, SubmissionState,
};
use std::sync::Arc;

pub const DEFAULT_CLASS_NAME: &str =
    "px-4 py-2 bg-primary text-primary-foreground rounded-md hover:bg-primary/90";

pub type DoneCallback = Arc<dyn Fn() + Send + Sync>;

/// Props for [`FeedbackButton`].
#[derive(Clone)]
pub struct FeedbackButtonProps {
    pub project_key: String,
    pub endpoint: Option<String>,
    pub dialog_title: String,
    pub button_text: String,
    pub placeholder: String,
    pub class_name: String,
    pub on_success: Option<DoneCallback>,
    pub on_error: Option<ErrorCallback>,
}

impl FeedbackButtonProps {
    pub fn new(project_key: impl Into<String>) -> Self {
        Self {
            project_key: project_key.into(),
            endpoint: None,
            dialog_title: "Send Feedback".into(),
            button_text: "Feedback".into(),
            placeholder: "Tell us what you think...".into(),
            class_name: DEFAULT_CLASS_NAME.into(),
            on_success: None,
            on_error: None,
        }
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn on_success(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_success = Some(Arc::new(callback));
        self
    }

    pub fn on_error(mut self, callback: impl Fn(&SubmissionError) + Send + Sync + 'static) -> Self {
        self.on_error = Some(Arc::new(callback));
        self
    }
}

impl std::fmt::Debug for FeedbackButtonProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedbackButtonProps")
            .field("project_key", &self.project_key)
            .field("endpoint", &self.endpoint)
            .field("button_text", &self.button_text)
            .field("on_success", &self.on_success.is_some())
            .field("on_error", &self.on_error.is_some())
            .finish_non_exhaustive()
    }
}

/// A trigger button plus dialog with a message box and an optional image.
///
/// Closing the dialog keeps the draft; only a successful submit clears it.
#[derive(Debug)]
pub struct FeedbackButton {
    props: FeedbackButtonProps,
    submission: Submission,
    form: DraftForm,
    dialog_open: bool,
    toast: Option<String>,
}

impl FeedbackButton {
    pub fn new(props: FeedbackButtonProps) -> Self {
        let client = FeedbackClient::new(props.project_key.clone(), props.endpoint.as_deref());
        Self::with_client(props, client)
    }

    pub fn with_client(props: FeedbackButtonProps, client: FeedbackClient) -> Self {
        let mut options =
            SubmissionOptions::new().concurrency(ConcurrencyPolicy::RejectWhileSubmitting);
        if let Some(on_success) = props.on_success.clone() {
            options = options.on_success(move |_: &SubmissionResult| on_success());
        }
        if let Some(on_error) = props.on_error.clone() {
            options = options.on_error(move |err: &SubmissionError| on_error(err));
        }
        Self {
            props,
            submission: Submission::new(client, options),
            form: DraftForm::default(),
            dialog_open: false,
            toast: None,
        }
    }

    pub fn open(&mut self) {
        self.dialog_open = true;
    }

    pub fn close(&mut self) {
        self.dialog_open = false;
    }

    pub fn is_open(&self) -> bool {
        self.dialog_open
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.form.message = message.into();
    }

    /// Hold an image for the next submit. Rejections go to `on_error`.
    pub fn attach_image(
        &mut self,
        data: &[u8],
        declared_mime: Option<&str>,
        filename: Option<&str>,
    ) -> Result<(), SubmissionError> {
        match ImageAttachment::from_bytes(data, declared_mime, filename) {
            Ok(attachment) => {
                self.form.attachment = Some(attachment);
                Ok(())
            }
            Err(err) => {
                let err = SubmissionError::from(FeedbackError::from(err));
                if let Some(on_error) = &self.props.on_error {
                    on_error(&err);
                }
                Err(err)
            }
        }
    }

    pub fn remove_image(&mut self) {
        self.form.attachment = None;
    }

    pub fn can_submit(&self) -> bool {
        !self.form.is_blank() && !self.submission.is_submitting()
    }

    /// Submit the draft. A blank message is ignored and yields `Ok(None)`.
    pub async fn submit(&mut self) -> Result<Option<SubmissionResult>, SubmissionError> {
        if self.form.is_blank() {
            return Ok(None);
        }

        let result = self.submission.submit(self.form.to_submit_options()).await?;
        self.form.clear();
        self.dialog_open = false;
        self.toast = Some(SUCCESS_TOAST.into());
        Ok(Some(result))
    }

    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }

    pub fn state(&self) -> SubmissionState {
        self.submission.state()
    }

    pub fn submission(&self) -> &Submission {
        &self.submission
    }

    pub fn view(&self) -> ButtonView {
        let submitting = self.submission.is_submitting();
        ButtonView {
            button_text: self.props.button_text.clone(),
            class_name: self.props.class_name.clone(),
            dialog_open: self.dialog_open,
            title: self.props.dialog_title.clone(),
            placeholder: self.props.placeholder.clone(),
            message: self.form.message.clone(),
            attachment: self.form.preview(),
            submit_label: if submitting { "Submitting..." } else { "Submit" },
            submit_disabled: submitting || self.form.is_blank(),
            controls_disabled: submitting,
            toast: self.toast.clone(),
        }
    }

    pub fn unmount(self) {
        self.submission.dispose();
    }
}
