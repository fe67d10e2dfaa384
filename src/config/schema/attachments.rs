use crate::media::MAX_IMAGE_BYTES;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachmentConfig {
    /// Largest image accepted for upload, in megabytes (default: 3)
    #[serde(default = "default_max_image_mb")]
    pub max_image_mb: u64,
}

fn default_max_image_mb() -> u64 {
    MAX_IMAGE_BYTES / (1_024 * 1_024)
}

impl Default for AttachmentConfig {
    fn default() -> Self {
        Self {
            max_image_mb: default_max_image_mb(),
        }
    }
}

impl AttachmentConfig {
    #[must_use]
    pub fn max_image_bytes(&self) -> u64 {
        self.max_image_mb.saturating_mul(1_024 * 1_024)
    }
}
