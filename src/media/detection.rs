use super::types::MediaType;

#[must_use]
pub fn detect_mime(data: &[u8]) -> Option<String> {
    infer::get(data).map(|info| info.mime_type().to_string())
}

#[must_use]
pub fn detect_mime_from_extension(filename: &str) -> Option<String> {
    let (_, ext) = filename.rsplit_once('.')?;
    match ext.to_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg".into()),
        "png" => Some("image/png".into()),
        "gif" => Some("image/gif".into()),
        "webp" => Some("image/webp".into()),
        "svg" => Some("image/svg+xml".into()),
        "mp4" => Some("video/mp4".into()),
        "webm" => Some("video/webm".into()),
        "pdf" => Some("application/pdf".into()),
        _ => None,
    }
}

/// Resolve the MIME type of an upload the way a browser file input would
/// report it: a declared type wins, then magic bytes, then the extension.
#[must_use]
pub fn detect_media_type(
    data: &[u8],
    declared: Option<&str>,
    filename: Option<&str>,
) -> (String, MediaType) {
    let mime = declared
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .or_else(|| detect_mime(data))
        .or_else(|| filename.and_then(detect_mime_from_extension))
        .unwrap_or_else(|| mime::APPLICATION_OCTET_STREAM.to_string());
    let media_type = MediaType::from_mime(&mime);
    (mime, media_type)
}
