use crate::utils::error::{PortfolioError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Accepts http(s) URLs or plain relative/absolute file paths. The data
/// document may be co-located with the page, so a bare `data.json` is valid.
pub fn validate_data_location(field_name: &str, location: &str) -> Result<()> {
    if location.is_empty() {
        return Err(PortfolioError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: location.to_string(),
            reason: "Data location cannot be empty".to_string(),
        });
    }

    if location.starts_with("http://") || location.starts_with("https://") {
        return match Url::parse(location) {
            Ok(_) => Ok(()),
            Err(e) => Err(PortfolioError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: location.to_string(),
                reason: format!("Invalid URL format: {}", e),
            }),
        };
    }

    if let Ok(url) = Url::parse(location) {
        return Err(PortfolioError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: location.to_string(),
            reason: format!("Unsupported URL scheme: {}", url.scheme()),
        });
    }

    validate_path(field_name, location)
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PortfolioError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PortfolioError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}
