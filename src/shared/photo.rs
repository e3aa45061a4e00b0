//! Photo payload handling for professional profiles.
//!
//! The dashboard converts a selected file to a base64 data URI before
//! submitting, so this layer only sees strings. A photo is accepted either
//! as an `data:image/...;base64,` URI (payload must decode and stay under
//! the size cap) or as an http(s) URL to an externally hosted image. The
//! accepted string is stored opaquely on the professional record.

use base64::prelude::*;
use thiserror::Error;
use validator::ValidationError;

use crate::shared::constants::MAX_PHOTO_BYTES;
use crate::shared::validation::{HTTP_URL_REGEX, IMAGE_DATA_URI_REGEX};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PhotoError {
    #[error("photo must be an image data URI or an http(s) URL")]
    UnsupportedFormat,

    #[error("photo payload is not valid base64")]
    InvalidBase64,

    #[error("photo payload exceeds {MAX_PHOTO_BYTES} bytes")]
    TooLarge,
}

/// Check that a submitted photo string is storable.
pub fn validate_photo(value: &str) -> Result<(), PhotoError> {
    if HTTP_URL_REGEX.is_match(value) {
        return Ok(());
    }

    let payload = data_uri_payload(value).ok_or(PhotoError::UnsupportedFormat)?;
    let decoded = BASE64_STANDARD
        .decode(payload)
        .map_err(|_| PhotoError::InvalidBase64)?;

    if decoded.len() > MAX_PHOTO_BYTES {
        return Err(PhotoError::TooLarge);
    }

    Ok(())
}

/// Strip the `data:image/...;base64,` prefix, returning the raw payload.
///
/// Returns `None` when the value is not an image data URI.
pub fn data_uri_payload(value: &str) -> Option<&str> {
    let m = IMAGE_DATA_URI_REGEX.find(value)?;
    Some(&value[m.end()..])
}

/// Adapter for `validator`'s custom-function attribute on request DTOs.
pub fn validate_photo_field(value: &str) -> Result<(), ValidationError> {
    validate_photo(value).map_err(|e| {
        let mut err = ValidationError::new("photo");
        err.message = Some(e.to_string().into());
        err
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_URI: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUg==";

    #[test]
    fn test_accepts_image_data_uri() {
        assert_eq!(validate_photo(PNG_URI), Ok(()));
    }

    #[test]
    fn test_accepts_http_url() {
        assert_eq!(
            validate_photo("https://cdn.example.com/photos/juan.jpg"),
            Ok(())
        );
    }

    #[test]
    fn test_rejects_bad_base64_payload() {
        assert_eq!(
            validate_photo("data:image/png;base64,!!not-base64!!"),
            Err(PhotoError::InvalidBase64)
        );
    }

    #[test]
    fn test_rejects_non_image_values() {
        assert_eq!(
            validate_photo("data:text/plain;base64,aGVsbG8="),
            Err(PhotoError::UnsupportedFormat)
        );
        assert_eq!(
            validate_photo("just a string"),
            Err(PhotoError::UnsupportedFormat)
        );
    }

    #[test]
    fn test_data_uri_payload_strips_prefix() {
        assert_eq!(
            data_uri_payload(PNG_URI),
            Some("iVBORw0KGgoAAAANSUhEUg==")
        );
        assert_eq!(data_uri_payload("https://example.com/p.png"), None);
    }

    #[test]
    fn test_validate_photo_field_reports_message() {
        let err = validate_photo_field("nonsense").unwrap_err();
        assert_eq!(err.code, "photo");
        assert!(err.message.is_some());
    }
}
