use crate::core::SubmitOptions;
use crate::media::ImageAttachment;
use serde::Serialize;

/// The not-yet-submitted contents of a feedback form.
#[derive(Debug, Clone, Default)]
pub struct DraftForm {
    pub message: String,
    pub email: String,
    pub attachment: Option<ImageAttachment>,
}

impl DraftForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.message.trim().is_empty()
    }

    /// Trimmed message and email; an empty email is left out.
    #[must_use]
    pub fn to_submit_options(&self) -> SubmitOptions {
        let mut options = SubmitOptions::new(self.message.trim());
        let email = self.email.trim();
        if !email.is_empty() {
            options = options.with_user_email(email);
        }
        if let Some(attachment) = &self.attachment {
            options = options.with_asset(attachment.to_asset());
        }
        options
    }

    #[must_use]
    pub fn preview(&self) -> Option<AttachmentPreview> {
        self.attachment.as_ref().map(|a| AttachmentPreview {
            filename: a.filename().map(String::from),
            mime_type: a.mime_type().to_string(),
            size: a.size(),
            data_url: a.data_url().to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttachmentPreview {
    pub filename: Option<String>,
    pub mime_type: String,
    pub size: u64,
    pub data_url: String,
}
