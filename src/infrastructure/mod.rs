pub mod cloudwatch;
pub mod env_credentials;
pub mod signing;
