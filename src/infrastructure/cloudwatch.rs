//! CloudWatch `PutMetricData` reporter.
//!
//! Builds the metric-submission parameter set, signs it with Signature
//! Version 2 and executes a single HTTP PUT against the monitoring
//! endpoint. No retries, no batching across calls; each `report` either
//! fully succeeds or surfaces its failure to the caller.

use chrono::{DateTime, Utc};
use reqwest::Client;
use tracing::{debug, info, warn};
use url::Url;

use crate::domain::credentials::Credentials;
use crate::domain::errors::{ConfigError, ReportError};
use crate::domain::metric::{MetricValue, member_params};
use crate::domain::ports::CredentialProvider;
use crate::infrastructure::env_credentials::EnvCredentials;
use crate::infrastructure::signing::{self, RequestDescriptor, SignedRequest};

pub const CLOUDWATCH_URL: &str = "https://monitoring.us-east-1.amazonaws.com/";

pub struct CloudWatchReporter {
    client: Client,
    credentials: Credentials,
    namespace: String,
    endpoint: Url,
    debug: bool,
}

impl CloudWatchReporter {
    /// Create a reporter with credentials taken from the environment.
    pub fn new(namespace: impl Into<String>, debug: bool) -> Result<Self, ConfigError> {
        Self::with_provider(&EnvCredentials, namespace, debug)
    }

    /// Create a reporter with an explicit credential source.
    pub fn with_provider(
        provider: &dyn CredentialProvider,
        namespace: impl Into<String>,
        debug: bool,
    ) -> Result<Self, ConfigError> {
        let credentials = provider.credentials()?;

        Ok(Self {
            client: Client::new(),
            credentials,
            namespace: namespace.into(),
            endpoint: Url::parse(CLOUDWATCH_URL).expect("endpoint constant is a valid URL"),
            debug,
        })
    }

    /// Redirect submissions to a different endpoint, e.g. a local test
    /// server. The signature covers the new host.
    pub fn with_endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Build the signed `PutMetricData` request without sending it.
    ///
    /// `report` uses this with the current time; taking the clock as an
    /// argument keeps the whole construction path deterministic under test.
    pub fn signed_request(&self, values: &[MetricValue], now: DateTime<Utc>) -> SignedRequest {
        let mut params = vec![
            ("Action".to_string(), "PutMetricData".to_string()),
            ("Namespace".to_string(), self.namespace.clone()),
        ];
        params.extend(member_params(values));

        let host = match self.endpoint.port() {
            Some(port) => format!("{}:{}", self.endpoint.host_str().unwrap_or_default(), port),
            None => self.endpoint.host_str().unwrap_or_default().to_string(),
        };

        let descriptor = RequestDescriptor {
            method: "PUT".to_string(),
            host,
            path: self.endpoint.path().to_string(),
            params,
        };

        signing::sign(&descriptor, &self.credentials, now)
    }

    /// Submit the given metric values in one signed call.
    ///
    /// Values are transmitted in input order; indices in the wire parameters
    /// are assigned from that order and nothing is deduplicated. An empty
    /// slice still produces a valid signed request.
    pub async fn report(&self, values: &[MetricValue]) -> Result<(), ReportError> {
        let signed = self.signed_request(values, Utc::now());

        let mut url = self.endpoint.clone();
        url.set_query(Some(&signed.query));

        let request = self.client.put(url).build()?;
        if self.debug {
            debug!(
                method = %request.method(),
                url = %request.url(),
                headers = ?request.headers(),
                "outbound PutMetricData request"
            );
        }

        let response = self.client.execute(request).await?;
        let status = response.status().as_u16();

        if status == 200 {
            if self.debug {
                let body = response.text().await.unwrap_or_default();
                debug!(status, %body, "metrics endpoint response");
            }
            info!(
                namespace = %self.namespace,
                count = values.len(),
                "reported metrics"
            );
            return Ok(());
        }

        // Body is captured on every failure, debug flag or not; it rides
        // along in the error.
        let body = response.text().await.unwrap_or_default();
        warn!(status, namespace = %self.namespace, "metrics endpoint rejected request");
        classify_response(status, body)
    }
}

/// Success iff the status is exactly 200; anything else carries the status
/// and raw body back to the caller.
pub(crate) fn classify_response(status: u16, body: String) -> Result<(), ReportError> {
    if status == 200 {
        return Ok(());
    }

    Err(ReportError::Api { status, body })
}
