/// AWS access key pair used to sign outbound requests.
///
/// Read once at reporter construction and never mutated afterwards, so a
/// single pair can back any number of concurrent `report` calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub access_key: String,
    pub secret_key: String,
}

impl Credentials {
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }
}
