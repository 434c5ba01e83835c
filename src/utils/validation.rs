//! Input validation utilities
//!
//! Checks applied to configuration values and tool parameters before any
//! request reaches the upstream API.

use crate::error::{CliError, ValidationError};
use chrono::NaiveDate;

/// Validate that a URL is properly formatted
pub fn validate_url(url: &str) -> crate::Result<()> {
    if url.is_empty() {
        return Err(CliError::InvalidArguments("URL cannot be empty".to_string()).into());
    }

    // Basic URL validation - must start with http:// or https://
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(CliError::InvalidArguments(format!(
            "Invalid URL '{}': URL must start with http:// or https://",
            url
        ))
        .into());
    }

    Ok(())
}

/// Validate an identifier that is embedded as a single URL path segment.
pub fn validate_identifier(field: &str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyIdentifier {
            field: field.to_string(),
        });
    }

    if matches!(trimmed, "." | "..") || trimmed.contains(['/', '?', '#']) {
        return Err(ValidationError::InvalidIdentifier {
            field: field.to_string(),
            value: trimmed.to_string(),
        });
    }

    Ok(trimmed.to_string())
}

/// Validate a `YYYY-MM-DD` calendar date.
pub fn validate_date(field: &str, value: &str) -> Result<(), ValidationError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| ValidationError::InvalidDate {
            field: field.to_string(),
            value: value.to_string(),
        })
}

pub fn validate_pagination(page: u32, limit: u32) -> Result<(), ValidationError> {
    if page == 0 {
        return Err(ValidationError::InvalidPage);
    }
    if limit == 0 {
        return Err(ValidationError::InvalidLimit);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url_accepts_valid_urls() {
        assert!(validate_url("http://localhost:3000").is_ok());
        assert!(validate_url("https://ly.govapi.tw/v2").is_ok());
    }

    #[test]
    fn test_validate_url_rejects_invalid_urls() {
        assert!(validate_url("").is_err());
        assert!(validate_url("ly.govapi.tw").is_err());
        assert!(validate_url("ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_identifier_trims() {
        assert_eq!(
            validate_identifier("bill_no", " 203110077970000 "),
            Ok("203110077970000".to_string())
        );
        assert_eq!(
            validate_identifier("name", "韓國瑜"),
            Ok("韓國瑜".to_string())
        );
    }

    #[test]
    fn test_validate_identifier_rejects_blank_and_separators() {
        assert_eq!(
            validate_identifier("bill_no", "   "),
            Err(ValidationError::EmptyIdentifier {
                field: "bill_no".to_string()
            })
        );
        assert!(matches!(
            validate_identifier("bill_no", "../stat"),
            Err(ValidationError::InvalidIdentifier { .. })
        ));
        assert!(validate_identifier("bill_no", "1?page=2").is_err());
        assert!(validate_identifier("bill_no", "..").is_err());
        assert!(validate_identifier("bill_no", " . ").is_err());
        assert_eq!(
            validate_identifier("name", "a%2Fb"),
            Ok("a%2Fb".to_string())
        );
    }

    #[test]
    fn test_validate_date() {
        assert!(validate_date("date", "2024-02-29").is_ok());
        assert!(validate_date("date", "2023-02-29").is_err());
        assert!(validate_date("date", "113/01/01").is_err());
        assert!(validate_date("date", "2024-03").is_err());
        assert!(validate_date("date", "2024").is_err());
        assert!(validate_date("date", "").is_err());
    }

    #[test]
    fn test_validate_pagination() {
        assert!(validate_pagination(1, 20).is_ok());
        assert_eq!(validate_pagination(0, 20), Err(ValidationError::InvalidPage));
        assert_eq!(validate_pagination(1, 0), Err(ValidationError::InvalidLimit));
    }
}
