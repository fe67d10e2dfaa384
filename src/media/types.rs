use crate::core::AssetKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    Image,
    Video,
    Unknown,
}

impl MediaType {
    #[must_use]
    pub fn from_mime(mime: &str) -> Self {
        match mime.parse::<mime::Mime>() {
            Ok(parsed) if parsed.type_() == mime::IMAGE => Self::Image,
            Ok(parsed) if parsed.type_() == mime::VIDEO => Self::Video,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Unknown => "unknown",
        }
    }

    /// The asset kind this media travels as, if the endpoint accepts it.
    #[must_use]
    pub fn asset_kind(&self) -> Option<AssetKind> {
        match self {
            Self::Image => Some(AssetKind::Image),
            Self::Video => Some(AssetKind::Video),
            Self::Unknown => None,
        }
    }
}
