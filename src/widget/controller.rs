use super::form::DraftForm;
use super::markup::MarkupEngine;
use super::options::{WidgetOptions, is_hex_color};
use super::view::{SUCCESS_TOAST, WidgetView};
use crate::client::FeedbackClient;
use crate::config::Config;
use crate::core::{PageLocator, SubmissionResult};
use crate::error::{ConfigError, FeedbackError, SubmissionError};
use crate::media::ImageAttachment;
use crate::submission::{ConcurrencyPolicy, Submission, SubmissionOptions, SubmissionState};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

pub const EMPTY_MESSAGE: &str = "Please enter a message";

/// The floating feedback widget: a corner button that opens a modal form.
///
/// Each widget owns its own [`Submission`]; two widgets on one page never
/// share state.
#[derive(Debug)]
pub struct FeedbackWidget {
    options: WidgetOptions,
    submission: Submission,
    form: DraftForm,
    modal_open: bool,
    banner: Option<String>,
    success: bool,
    toast: Option<String>,
}

impl FeedbackWidget {
    pub fn new(options: WidgetOptions) -> crate::error::Result<Self> {
        if options.project_key.trim().is_empty() {
            return Err(ConfigError::Validation("Project key is required".into()).into());
        }
        let client = FeedbackClient::new(options.project_key.clone(), options.endpoint.as_deref());
        Self::with_client(options, client)
    }

    /// Widget options, key, endpoint and HTTP settings all taken from
    /// `config`.
    pub fn from_config(config: &Config) -> crate::error::Result<Self> {
        let options = WidgetOptions::from_config(config)?;
        Self::with_client(options, config.feedback_client()?)
    }

    /// Use a pre-built client, e.g. one carrying a page locator or a custom
    /// HTTP client.
    pub fn with_client(options: WidgetOptions, client: FeedbackClient) -> crate::error::Result<Self> {
        if !is_hex_color(&options.primary_color) {
            return Err(ConfigError::Validation(format!(
                "primary color `{}` must be a hex color like #000000",
                options.primary_color
            ))
            .into());
        }
        debug!(position = %options.position, "feedback widget mounted");
        Ok(Self {
            options,
            submission: machine(client),
            form: DraftForm::default(),
            modal_open: false,
            banner: None,
            success: false,
            toast: None,
        })
    }

    /// Swap in a page locator. The replaced machine is disposed.
    pub fn with_locator(mut self, locator: Arc<dyn PageLocator>) -> Self {
        let client = self.submission.client().clone().with_locator(locator);
        self.submission.dispose();
        self.submission = machine(client);
        self
    }

    pub fn options(&self) -> &WidgetOptions {
        &self.options
    }

    pub fn open(&mut self) {
        self.modal_open = true;
    }

    /// Close the modal and start the next opening from a clean form.
    pub fn close(&mut self) {
        self.modal_open = false;
        self.form.clear();
        self.banner = None;
        self.success = false;
        self.submission.reset();
    }

    pub fn is_open(&self) -> bool {
        self.modal_open
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.form.message = message.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.form.email = email.into();
    }

    /// Validate and hold an image for the next submission.
    ///
    /// A rejected file shows the error in the banner and keeps any image
    /// already attached.
    pub fn attach_image(
        &mut self,
        data: &[u8],
        declared_mime: Option<&str>,
        filename: Option<&str>,
    ) -> Result<(), FeedbackError> {
        let attachment = ImageAttachment::from_bytes_with_limit(
            data,
            declared_mime,
            filename,
            self.options.max_image_bytes,
        );
        self.accept_attachment(attachment)
    }

    pub fn attach_image_file(&mut self, path: &Path) -> Result<(), FeedbackError> {
        let attachment = ImageAttachment::from_path_with_limit(path, self.options.max_image_bytes);
        self.accept_attachment(attachment)
    }

    fn accept_attachment(
        &mut self,
        attachment: Result<ImageAttachment, crate::error::AttachmentError>,
    ) -> Result<(), FeedbackError> {
        match attachment {
            Ok(attachment) => {
                self.form.attachment = Some(attachment);
                self.banner = None;
                Ok(())
            }
            Err(err) => {
                self.banner = Some(err.to_string());
                Err(err.into())
            }
        }
    }

    pub fn remove_image(&mut self) {
        self.form.attachment = None;
    }

    /// Submit the current form.
    ///
    /// A blank message never reaches the network. On success the form is
    /// cleared and a toast is raised; on failure the banner shows the
    /// endpoint's message and the draft is kept for another try.
    pub async fn submit(&mut self) -> Result<SubmissionResult, SubmissionError> {
        if self.form.is_blank() {
            self.banner = Some(EMPTY_MESSAGE.into());
            return Err(FeedbackError::Validation(EMPTY_MESSAGE.into()).into());
        }

        self.banner = None;
        let outcome = self.submission.submit(self.form.to_submit_options()).await;
        match &outcome {
            Ok(_) => {
                self.success = true;
                self.toast = Some(SUCCESS_TOAST.into());
                self.form.clear();
            }
            Err(err) => self.banner = Some(err.message.clone()),
        }
        outcome
    }

    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }

    pub fn state(&self) -> SubmissionState {
        self.submission.state()
    }

    /// A handle onto this widget's state machine, for observers.
    pub fn submission(&self) -> &Submission {
        &self.submission
    }

    pub fn view(&self) -> WidgetView {
        let submitting = self.submission.is_submitting();
        WidgetView {
            position: self.options.position,
            button_text: self.options.button_text.clone(),
            primary_color: self.options.primary_color.clone(),
            modal_open: self.modal_open,
            title: self.options.dialog_title.clone(),
            placeholder: self.options.placeholder.clone(),
            message: self.form.message.clone(),
            email: self.form.email.clone(),
            attachment: self.form.preview(),
            submit_label: if submitting { "Sending..." } else { "Send Feedback" },
            submit_disabled: submitting,
            error_banner: self.banner.clone(),
            success: self.success,
            toast: self.toast.clone(),
        }
    }

    pub fn render_html(&self) -> anyhow::Result<String> {
        MarkupEngine::new()?.render_widget(&self.view())
    }

    /// Unmount. Any submission still in flight settles without effect.
    pub fn destroy(self) {
        self.submission.dispose();
        debug!("feedback widget destroyed");
    }
}

fn machine(client: FeedbackClient) -> Submission {
    Submission::new(
        client,
        SubmissionOptions::new().concurrency(ConcurrencyPolicy::RejectWhileSubmitting),
    )
}

/// Mount a widget with the given options.
pub fn init(options: WidgetOptions) -> crate::error::Result<FeedbackWidget> {
    FeedbackWidget::new(options)
}
