use crate::domain::credentials::Credentials;
use crate::domain::errors::ConfigError;

/// Source of the AWS key pair, injected into the reporter constructor so
/// tests can supply fixed credentials instead of touching the environment.
pub trait CredentialProvider: Send + Sync {
    fn credentials(&self) -> Result<Credentials, ConfigError>;
}
