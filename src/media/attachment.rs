use super::detection::detect_media_type;
use super::types::MediaType;
use crate::core::{Asset, AssetKind};
use crate::error::AttachmentError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// Upper bound for a single image attachment, checked before encoding.
pub const MAX_IMAGE_BYTES: u64 = 3 * 1_024 * 1_024;

/// An image accepted for upload, already encoded as a `data:` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    mime_type: String,
    filename: Option<String>,
    size: u64,
    data_url: String,
}

impl ImageAttachment {
    /// Validate and encode an image with the default 3 MB ceiling.
    ///
    /// The type check runs first, then the size check; neither touches any
    /// submission state.
    pub fn from_bytes(
        data: &[u8],
        declared_mime: Option<&str>,
        filename: Option<&str>,
    ) -> Result<Self, AttachmentError> {
        Self::from_bytes_with_limit(data, declared_mime, filename, MAX_IMAGE_BYTES)
    }

    pub fn from_bytes_with_limit(
        data: &[u8],
        declared_mime: Option<&str>,
        filename: Option<&str>,
        max_bytes: u64,
    ) -> Result<Self, AttachmentError> {
        let (mime_type, media_type) = detect_media_type(data, declared_mime, filename);
        if media_type != MediaType::Image {
            return Err(AttachmentError::NotAnImage { mime_type });
        }

        let size = data.len() as u64;
        if size > max_bytes {
            return Err(AttachmentError::TooLarge { size, max_bytes });
        }

        debug!(mime = %mime_type, size, "encoding image attachment");
        Ok(Self {
            data_url: encode_data_url(&mime_type, data),
            mime_type,
            filename: filename.map(String::from),
            size,
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, AttachmentError> {
        Self::from_path_with_limit(path, MAX_IMAGE_BYTES)
    }

    /// Read at most `max_bytes + 1` bytes from disk, so an oversized file is
    /// rejected without being loaded. Only regular files are accepted.
    pub fn from_path_with_limit(path: &Path, max_bytes: u64) -> Result<Self, AttachmentError> {
        let metadata = fs::metadata(path)?;
        if !metadata.is_file() {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "not a regular file").into());
        }

        let mut data = Vec::new();
        File::open(path)?
            .take(max_bytes.saturating_add(1))
            .read_to_end(&mut data)?;

        let filename = path.file_name().map(|n| n.to_string_lossy().into_owned());
        match Self::from_bytes_with_limit(&data, None, filename.as_deref(), max_bytes) {
            Err(AttachmentError::TooLarge { size, max_bytes }) => Err(AttachmentError::TooLarge {
                size: size.max(metadata.len()),
                max_bytes,
            }),
            other => other,
        }
    }

    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    #[must_use]
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Byte length of the original image.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.size
    }

    #[must_use]
    pub fn data_url(&self) -> &str {
        &self.data_url
    }

    #[must_use]
    pub fn to_asset(&self) -> Asset {
        Asset {
            kind: AssetKind::Image,
            url: self.data_url.clone(),
            size: self.size,
        }
    }
}

#[must_use]
pub fn encode_data_url(mime_type: &str, data: &[u8]) -> String {
    format!("data:{mime_type};base64,{}", STANDARD.encode(data))
}
