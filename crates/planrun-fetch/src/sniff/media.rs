/// Media types treated as zip archives.
pub const ARCHIVE_MEDIA_TYPES: &[&str] = &[
    "application/zip",
    "application/x-zip-compressed",
    "application/x-zip",
    "multipart/x-zip",
];

/// The `type/subtype` part of a media type, lowercased, parameters dropped.
///
/// ```
/// use planrun_fetch::sniff::essence;
///
/// assert_eq!(essence("Application/JSON; charset=utf-8"), "application/json");
/// ```
pub fn essence(media_type: &str) -> String {
    media_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// `application/json` or any structured `+json` suffix.
pub fn is_json_media_type(media_type: &str) -> bool {
    let essence = essence(media_type);
    essence == "application/json" || essence.ends_with("+json")
}

pub fn is_archive_media_type(media_type: &str) -> bool {
    ARCHIVE_MEDIA_TYPES.contains(&essence(media_type).as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn essence_strips_parameters() {
        assert_eq!(essence("application/zip"), "application/zip");
        assert_eq!(essence(" text/plain ; charset=ascii"), "text/plain");
        assert_eq!(essence(""), "");
    }

    #[test]
    fn json_detection() {
        assert!(is_json_media_type("application/json"));
        assert!(is_json_media_type("application/json; charset=utf-8"));
        assert!(is_json_media_type("application/problem+json"));
        assert!(!is_json_media_type("text/json-ish"));
        assert!(!is_json_media_type("application/zip"));
        assert!(!is_json_media_type(""));
    }

    #[test]
    fn archive_detection() {
        assert!(is_archive_media_type("application/zip"));
        assert!(is_archive_media_type("Application/X-Zip-Compressed"));
        assert!(is_archive_media_type("application/zip; name=doc.zip"));
        assert!(!is_archive_media_type("application/octet-stream"));
        assert!(!is_archive_media_type("application/gzip"));
        assert!(!is_archive_media_type("application/json"));
    }
}
