use thiserror::Error;

/// Errors raised while assembling a reporter from its configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing credentials in environment: {}", .missing.join(", "))]
    MissingCredentials { missing: Vec<String> },
}

/// Errors raised while submitting metrics to the ingestion endpoint
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to reach metrics endpoint: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("metrics endpoint returned status {status}: {body}")]
    Api { status: u16, body: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credentials_lists_every_variable() {
        let err = ConfigError::MissingCredentials {
            missing: vec!["AWS_ACCESS_KEY".to_string(), "AWS_SECRET_KEY".to_string()],
        };

        let msg = err.to_string();
        assert!(msg.contains("AWS_ACCESS_KEY"));
        assert!(msg.contains("AWS_SECRET_KEY"));
    }

    #[test]
    fn test_api_error_formatting() {
        let err = ReportError::Api {
            status: 500,
            body: "Internal Error".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("Internal Error"));
    }
}
