//! AWS-style (SigV4) request signing for the JSON-RPC style POST requests
//! this service speaks. All requests go to `/` with an empty query string,
//! which keeps the canonical form small.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use crate::credentials::Credentials;

type HmacSha256 = Hmac<Sha256>;

pub(crate) const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

const ALGORITHM: &str = "AWS4-HMAC-SHA256";

pub(crate) struct SigningParams<'a> {
    pub credentials: &'a Credentials,
    pub region: &'a str,
    pub service: &'a str,
    pub host: &'a str,
    /// `x-amz-target` operation header value.
    pub target: &'a str,
    pub time: DateTime<Utc>,
}

/// Returns every header to attach to the signed POST of `body`, including
/// the derived `authorization` header. Header names are lowercase; the
/// signed set is content-type, host, x-amz-date, x-amz-target, and the
/// security token when the credentials carry one.
pub(crate) fn sign_request(params: &SigningParams<'_>, body: &[u8]) -> Vec<(String, String)> {
    let amz_date = params.time.format("%Y%m%dT%H%M%SZ").to_string();
    let date = params.time.format("%Y%m%d").to_string();

    let mut headers: Vec<(String, String)> = vec![
        ("content-type".to_string(), CONTENT_TYPE.to_string()),
        ("host".to_string(), params.host.to_string()),
        ("x-amz-date".to_string(), amz_date.clone()),
        ("x-amz-target".to_string(), params.target.to_string()),
    ];
    if let Some(token) = &params.credentials.session_token {
        headers.push(("x-amz-security-token".to_string(), token.clone()));
    }
    headers.sort_by(|a, b| a.0.cmp(&b.0));

    let signed_headers = headers
        .iter()
        .map(|(name, _)| name.as_str())
        .collect::<Vec<_>>()
        .join(";");
    let body_hash = hex(Sha256::digest(body));
    let canonical = canonical_request(&headers, &signed_headers, &body_hash);

    let scope = format!("{date}/{}/{}/aws4_request", params.region, params.service);
    let string_to_sign = format!(
        "{ALGORITHM}\n{amz_date}\n{scope}\n{}",
        hex(Sha256::digest(canonical.as_bytes()))
    );

    let signing_key = derive_key(
        &params.credentials.secret_access_key,
        &date,
        params.region,
        params.service,
    );
    let signature = hex(hmac_sha256(&signing_key, string_to_sign.as_bytes()));

    let authorization = format!(
        "{ALGORITHM} Credential={}/{scope}, SignedHeaders={signed_headers}, Signature={signature}",
        params.credentials.access_key_id
    );
    headers.push(("authorization".to_string(), authorization));
    headers
}

fn canonical_request(
    headers: &[(String, String)],
    signed_headers: &str,
    body_hash: &str,
) -> String {
    let mut canonical_headers = String::new();
    for (name, value) in headers {
        canonical_headers.push_str(name);
        canonical_headers.push(':');
        canonical_headers.push_str(value.trim());
        canonical_headers.push('\n');
    }
    format!("POST\n/\n\n{canonical_headers}\n{signed_headers}\n{body_hash}")
}

/// The SigV4 key-derivation chain: date, region, service, terminator.
fn derive_key(secret: &str, date: &str, region: &str, service: &str) -> Vec<u8> {
    let k_date = hmac_sha256(format!("AWS4{secret}").as_bytes(), date.as_bytes());
    let k_region = hmac_sha256(&k_date, region.as_bytes());
    let k_service = hmac_sha256(&k_region, service.as_bytes());
    hmac_sha256(&k_service, b"aws4_request")
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts keys of any length");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

fn hex(bytes: impl AsRef<[u8]>) -> String {
    let bytes = bytes.as_ref();
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(out, "{b:02x}");
    }
    out
}
