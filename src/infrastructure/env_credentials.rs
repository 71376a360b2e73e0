//! Environment-backed credential provider.

use std::env;

use crate::domain::credentials::Credentials;
use crate::domain::errors::ConfigError;
use crate::domain::ports::CredentialProvider;

pub const ACCESS_KEY_VAR: &str = "AWS_ACCESS_KEY";
pub const SECRET_KEY_VAR: &str = "AWS_SECRET_KEY";

/// Reads the key pair from `AWS_ACCESS_KEY` and `AWS_SECRET_KEY`.
///
/// An unset or empty variable counts as missing; every missing variable is
/// named in the resulting error so a misconfigured deploy surfaces both at
/// once.
pub struct EnvCredentials;

impl CredentialProvider for EnvCredentials {
    fn credentials(&self) -> Result<Credentials, ConfigError> {
        let access_key = env::var(ACCESS_KEY_VAR).unwrap_or_default();
        let secret_key = env::var(SECRET_KEY_VAR).unwrap_or_default();

        let mut missing = Vec::new();
        if access_key.is_empty() {
            missing.push(ACCESS_KEY_VAR.to_string());
        }
        if secret_key.is_empty() {
            missing.push(SECRET_KEY_VAR.to_string());
        }

        if !missing.is_empty() {
            return Err(ConfigError::MissingCredentials { missing });
        }

        Ok(Credentials::new(access_key, secret_key))
    }
}
