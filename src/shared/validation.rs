use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for the data-URI prefix produced by the dashboard's file reader
    /// (`data:image/<subtype>;base64,<payload>`).
    /// - Valid: "data:image/png;base64,iVBOR...", "data:image/jpeg;base64,/9j/4A..."
    /// - Invalid: "data:text/plain;base64,...", "image/png;base64,..."
    pub static ref IMAGE_DATA_URI_REGEX: Regex =
        Regex::new(r"^data:image/[a-z0-9.+-]+;base64,").unwrap();

    /// Regex for http(s) URLs accepted as externally hosted photos
    pub static ref HTTP_URL_REGEX: Regex = Regex::new(r"^https?://\S+$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_data_uri_regex_valid() {
        assert!(IMAGE_DATA_URI_REGEX.is_match("data:image/png;base64,iVBORw0KGgo="));
        assert!(IMAGE_DATA_URI_REGEX.is_match("data:image/jpeg;base64,/9j/4AAQ"));
        assert!(IMAGE_DATA_URI_REGEX.is_match("data:image/svg+xml;base64,PHN2Zz4="));
    }

    #[test]
    fn test_image_data_uri_regex_invalid() {
        assert!(!IMAGE_DATA_URI_REGEX.is_match("data:text/plain;base64,aGVsbG8=")); // not an image
        assert!(!IMAGE_DATA_URI_REGEX.is_match("image/png;base64,iVBOR")); // missing scheme
        assert!(!IMAGE_DATA_URI_REGEX.is_match("data:image/png,iVBOR")); // not base64-marked
        assert!(!IMAGE_DATA_URI_REGEX.is_match(""));
    }

    #[test]
    fn test_http_url_regex() {
        assert!(HTTP_URL_REGEX.is_match("https://cdn.example.com/photos/juan.jpg"));
        assert!(HTTP_URL_REGEX.is_match("http://localhost:9000/p.png"));
        assert!(!HTTP_URL_REGEX.is_match("ftp://example.com/p.png"));
        assert!(!HTTP_URL_REGEX.is_match("https:// spaced.example.com"));
    }
}
