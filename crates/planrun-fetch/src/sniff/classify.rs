use serde_json::Value;

use super::media::is_json_media_type;

/// Lowercase substring that marks an expired download link.
pub const EXPIRY_MARKER: &str = "url expired";

/// What a successful (HTTP 200) response body turned out to be.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Payload {
    /// A structured response announcing that the link has expired.
    Expired { instructions: Option<String> },
    /// Anything else; kept as opaque bytes.
    Data,
}

/// Classify a response body by its declared media type.
///
/// Only JSON media types are inspected. A JSON body that fails to parse, is
/// not an object, or has no matching `message` falls through to [`Payload::Data`].
pub fn classify(media_type: &str, body: &[u8]) -> Payload {
    if !is_json_media_type(media_type) {
        return Payload::Data;
    }

    let Ok(Value::Object(object)) = serde_json::from_slice::<Value>(body) else {
        return Payload::Data;
    };

    match object.get("message").and_then(Value::as_str) {
        Some(message) if is_expiry_message(message) => Payload::Expired {
            instructions: object
                .get("instructions")
                .and_then(Value::as_str)
                .map(str::to_owned),
        },
        _ => Payload::Data,
    }
}

pub fn is_expiry_message(message: &str) -> bool {
    message.to_lowercase().contains(EXPIRY_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: &str = "application/json";

    #[test]
    fn expired_with_instructions() {
        let body = br#"{"message":"URL expired","instructions":"contact support"}"#;
        assert_eq!(
            classify(JSON, body),
            Payload::Expired {
                instructions: Some("contact support".to_string())
            }
        );
    }

    #[test]
    fn expired_without_instructions() {
        let body = br#"{"message":"The download url EXPIRED yesterday"}"#;
        assert_eq!(
            classify(JSON, body),
            Payload::Expired { instructions: None }
        );
    }

    #[test]
    fn non_string_instructions_are_ignored() {
        let body = br#"{"message":"url expired","instructions":{"step":1}}"#;
        assert_eq!(
            classify(JSON, body),
            Payload::Expired { instructions: None }
        );
    }

    #[test]
    fn other_messages_are_data() {
        assert_eq!(classify(JSON, br#"{"message":"ok"}"#), Payload::Data);
        assert_eq!(classify(JSON, br#"{"message":"url has expired"}"#), Payload::Data);
        assert_eq!(classify(JSON, br#"{"msg":"url expired"}"#), Payload::Data);
        assert_eq!(classify(JSON, br#"{"message":42}"#), Payload::Data);
    }

    #[test]
    fn unparseable_or_non_object_json_is_data() {
        assert_eq!(classify(JSON, b"PK\x03\x04binary"), Payload::Data);
        assert_eq!(classify(JSON, br#"["url expired"]"#), Payload::Data);
        assert_eq!(classify(JSON, br#""url expired""#), Payload::Data);
    }

    #[test]
    fn non_json_media_type_is_never_inspected() {
        let body = br#"{"message":"URL expired"}"#;
        assert_eq!(classify("application/zip", body), Payload::Data);
        assert_eq!(classify("text/plain", body), Payload::Data);
    }
}
