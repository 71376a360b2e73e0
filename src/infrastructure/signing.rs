//! Query-parameter request signing (AWS Signature Version 2).
//!
//! The signer canonicalizes method, host, path and the sorted query string
//! into a newline-joined payload, computes HMAC-SHA256 over it with the
//! secret key and injects the base64 signature back into the query. It does
//! no I/O; the clock is an explicit input so signing stays deterministic
//! under test.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use chrono::{DateTime, SecondsFormat, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::domain::credentials::Credentials;

pub const SIGNATURE_VERSION: &str = "2";
pub const SIGNATURE_METHOD: &str = "HmacSHA256";

/// Parameters the signer owns. Any caller-supplied values under these keys
/// are overwritten unconditionally.
const RESERVED_KEYS: [&str; 5] = [
    "Timestamp",
    "AWSAccessKeyId",
    "SignatureVersion",
    "SignatureMethod",
    "Signature",
];

/// An outbound request before signing: method, target and the query
/// parameters accumulated so far, in insertion order.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: String,
    pub host: String,
    pub path: String,
    pub params: Vec<(String, String)>,
}

/// A request ready to send. `query` is the full sorted percent-encoded
/// parameter set including the `Signature` parameter.
#[derive(Debug, Clone)]
pub struct SignedRequest {
    pub method: String,
    pub host: String,
    pub path: String,
    pub query: String,
}

/// Sign a request descriptor with Signature Version 2.
///
/// Deterministic for a fixed `now`: identical inputs always produce an
/// identical `Signature` value.
pub fn sign(
    descriptor: &RequestDescriptor,
    credentials: &Credentials,
    now: DateTime<Utc>,
) -> SignedRequest {
    let mut params = descriptor.params.clone();
    params.retain(|(key, _)| !RESERVED_KEYS.contains(&key.as_str()));

    params.push((
        "Timestamp".to_string(),
        now.to_rfc3339_opts(SecondsFormat::Secs, true),
    ));
    params.push(("AWSAccessKeyId".to_string(), credentials.access_key.clone()));
    params.push(("SignatureVersion".to_string(), SIGNATURE_VERSION.to_string()));
    params.push(("SignatureMethod".to_string(), SIGNATURE_METHOD.to_string()));

    let method = descriptor.method.to_uppercase();
    let path = if descriptor.path.is_empty() {
        "/"
    } else {
        descriptor.path.as_str()
    };

    // The server recomputes this exact payload; field order and the sorted
    // query encoding are part of the protocol.
    let payload = format!(
        "{}\n{}\n{}\n{}",
        method,
        canonical_host(&descriptor.host),
        path,
        encode_sorted(&params),
    );

    type HmacSha256 = Hmac<Sha256>;

    let mut mac = HmacSha256::new_from_slice(credentials.secret_key.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(payload.as_bytes());
    let signature = BASE64.encode(mac.finalize().into_bytes());

    params.push(("Signature".to_string(), signature));

    SignedRequest {
        method,
        host: descriptor.host.clone(),
        path: path.to_string(),
        query: encode_sorted(&params),
    }
}

/// Lower-cased host with any `:port` suffix stripped.
fn canonical_host(host: &str) -> String {
    let host = host.to_ascii_lowercase();

    match host.rsplit_once(':') {
        Some((name, port)) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => {
            name.to_string()
        }
        _ => host,
    }
}

/// Percent-encode `key=value` pairs joined by `&`, sorted byte-wise
/// ascending by key.
fn encode_sorted(params: &[(String, String)]) -> String {
    let mut pairs: Vec<&(String, String)> = params.iter().collect();
    pairs.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

    let mut query = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        query.append_pair(key, value);
    }
    query.finish()
}
