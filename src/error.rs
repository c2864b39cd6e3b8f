//! Error types for the F1 CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, F1Error>;

#[derive(Error, Debug)]
pub enum F1Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse numeric argument: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Driver not found: {name}")]
    DriverNotFound { name: String },

    #[error("No {kind} session found for location: {location}")]
    SessionNotFound { location: String, kind: String },

    #[error("OpenF1 API returned no data")]
    NoData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_not_found_display() {
        let err = F1Error::DriverNotFound {
            name: "Ayrton Senna".to_string(),
        };
        assert_eq!(err.to_string(), "Driver not found: Ayrton Senna");
    }

    #[test]
    fn test_session_not_found_display() {
        let err = F1Error::SessionNotFound {
            location: "Adelaide".to_string(),
            kind: "Sprint".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "No Sprint session found for location: Adelaide"
        );
    }

    #[test]
    fn test_no_data_display() {
        assert_eq!(F1Error::NoData.to_string(), "OpenF1 API returned no data");
    }

    #[test]
    fn test_parse_int_conversion() {
        let parse_err = "abc".parse::<u32>().unwrap_err();
        let err = F1Error::from(parse_err);
        assert!(matches!(err, F1Error::InvalidNumber(_)));
    }

    #[test]
    fn test_json_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err = F1Error::from(json_err);
        assert!(err.to_string().starts_with("JSON parsing failed"));
    }
}
