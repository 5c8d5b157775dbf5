use bytes::Bytes;
use serde::Serialize;

/// Outcome of one fetch attempt that received a response.
///
/// Records are created by the fetcher and only ever handed out by shared
/// reference afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadRecord {
    pub source_url: String,
    /// Absent for expiry notices and non-200 responses.
    pub payload: Option<Bytes>,
    pub media_type: String,
    pub expired: bool,
    pub expiry_note: Option<String>,
}

impl DownloadRecord {
    /// A successful download.
    pub fn payload(
        source_url: impl Into<String>,
        media_type: impl Into<String>,
        body: Bytes,
    ) -> Self {
        Self {
            source_url: source_url.into(),
            payload: Some(body),
            media_type: media_type.into(),
            expired: false,
            expiry_note: None,
        }
    }

    /// A response with a non-200 status; the body is not kept.
    pub fn rejected(source_url: impl Into<String>, media_type: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            payload: None,
            media_type: media_type.into(),
            expired: false,
            expiry_note: None,
        }
    }

    /// A structured notice that the link has expired.
    pub fn expired(
        source_url: impl Into<String>,
        media_type: impl Into<String>,
        expiry_note: Option<String>,
    ) -> Self {
        Self {
            source_url: source_url.into(),
            payload: None,
            media_type: media_type.into(),
            expired: true,
            expiry_note,
        }
    }

    pub fn has_payload(&self) -> bool {
        self.payload.is_some()
    }

    pub fn payload_len(&self) -> usize {
        self.payload.as_ref().map_or(0, Bytes::len)
    }

    pub fn summary(&self) -> DownloadSummary {
        DownloadSummary {
            source_url: self.source_url.clone(),
            has_payload: self.has_payload(),
            payload_len: self.payload_len(),
            media_type: self.media_type.clone(),
            expired: self.expired,
            expiry_note: self.expiry_note.clone(),
        }
    }
}

/// Serializable read-out of a [`DownloadRecord`], without the payload bytes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DownloadSummary {
    pub source_url: String,
    pub has_payload: bool,
    pub payload_len: usize,
    pub media_type: String,
    pub expired: bool,
    pub expiry_note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_record() {
        let record = DownloadRecord::payload(
            "https://x/doc.zip",
            "application/zip",
            Bytes::from_static(b"PK"),
        );
        assert!(record.has_payload());
        assert_eq!(record.payload_len(), 2);
        assert!(!record.expired);
        assert_eq!(record.expiry_note, None);
    }

    #[test]
    fn expired_record_has_no_payload() {
        let record = DownloadRecord::expired(
            "https://x/doc.zip",
            "application/json",
            Some("contact support".to_string()),
        );
        assert!(!record.has_payload());
        assert!(record.expired);
        assert_eq!(record.expiry_note.as_deref(), Some("contact support"));
    }

    #[test]
    fn rejected_record() {
        let record = DownloadRecord::rejected("https://x/missing", "text/html");
        assert!(!record.has_payload());
        assert!(!record.expired);
        assert_eq!(record.payload_len(), 0);
    }

    #[test]
    fn summary_serializes_without_bytes() {
        let record =
            DownloadRecord::payload("https://x/a", "application/zip", Bytes::from_static(b"abc"));
        let json = serde_json::to_value(record.summary()).unwrap();
        assert_eq!(json["source_url"], "https://x/a");
        assert_eq!(json["has_payload"], true);
        assert_eq!(json["payload_len"], 3);
        assert_eq!(json["expired"], false);
        assert!(json["expiry_note"].is_null());
        assert!(json.get("payload").is_none());
    }
}
