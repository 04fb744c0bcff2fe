//! URL validation for the submission flow
//!
//! Pure, parse-based, runs before any network call. The two error messages
//! are the exact strings shown inline next to the input field.

use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlValidationError {
    Empty,
    Invalid,
}

impl UrlValidationError {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Empty => "URL is required",
            Self::Invalid => "Please enter a valid URL",
        }
    }
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for UrlValidationError {}

/// Validate a submission input: non-empty after trimming, and parses as an
/// absolute URL with a scheme and a host.
pub fn validate_submission_url(input: &str) -> Result<(), UrlValidationError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    match Url::parse(trimmed) {
        Ok(url) if url.has_host() => Ok(()),
        _ => Err(UrlValidationError::Invalid),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_urls() {
        assert!(validate_submission_url("http://example.com").is_ok());
        assert!(validate_submission_url("https://example.com/a/b").is_ok());
        assert!(validate_submission_url("https://example.com/path?q=1#frag").is_ok());
        assert!(validate_submission_url("https://sub.example.co.uk:8443/x").is_ok());
        assert!(validate_submission_url("  https://example.com  ").is_ok());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(validate_submission_url(""), Err(UrlValidationError::Empty));
        assert_eq!(
            validate_submission_url("   "),
            Err(UrlValidationError::Empty)
        );
    }

    #[test]
    fn test_invalid_urls() {
        assert_eq!(
            validate_submission_url("not a url"),
            Err(UrlValidationError::Invalid)
        );
        assert_eq!(
            validate_submission_url("example.com"),
            Err(UrlValidationError::Invalid),
            "missing scheme must be rejected"
        );
        assert_eq!(
            validate_submission_url("http://"),
            Err(UrlValidationError::Invalid),
            "missing host must be rejected"
        );
        assert_eq!(
            validate_submission_url("mailto:user@example.com"),
            Err(UrlValidationError::Invalid),
            "scheme without host must be rejected"
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(UrlValidationError::Empty.message(), "URL is required");
        assert_eq!(
            UrlValidationError::Invalid.message(),
            "Please enter a valid URL"
        );
    }
}
