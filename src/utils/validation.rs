use crate::utils::error::{Result, TravelError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(TravelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(TravelError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(TravelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(TravelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(TravelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(TravelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// 使用者輸入：空白字串視為未輸入
pub fn require_input(field_name: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TravelError::empty_input(field_name));
    }
    Ok(trimmed.to_string())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TravelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(TravelError::validation(format!(
            "{} must be between {} and {} (got {})",
            field_name, min, max, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("lookup.geocoder_url", "https://example.com").is_ok());
        assert!(validate_url("lookup.geocoder_url", "http://example.com").is_ok());
        assert!(validate_url("lookup.geocoder_url", "").is_err());
        assert!(validate_url("lookup.geocoder_url", "invalid-url").is_err());
        assert!(validate_url("lookup.geocoder_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("lookup.timeout_seconds", 5, 1).is_ok());
        assert!(validate_positive_number("lookup.timeout_seconds", 0, 1).is_err());
    }

    #[test]
    fn test_require_input_trims_and_rejects_blank() {
        assert_eq!(require_input("a place name", "  Goa ").unwrap(), "Goa");
        assert!(matches!(
            require_input("a place name", "   "),
            Err(TravelError::EmptyInput { .. })
        ));
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("rating", 1u8, 1, 5).is_ok());
        assert!(validate_range("rating", 5u8, 1, 5).is_ok());
        assert!(validate_range("rating", 0u8, 1, 5).is_err());
        assert!(validate_range("rating", 6u8, 1, 5).is_err());
    }
}
