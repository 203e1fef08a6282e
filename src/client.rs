use http_body_util::{BodyExt, Full};
use hyper::Request;
use hyper::body::Bytes;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::config::Config;
use crate::credentials::CredentialsProvider;
use crate::error::{ApiError, Error, Result};
use crate::model::{
    DimensionValuesWithAttributes, GetDimensionValuesRequest, GetDimensionValuesResult,
};
use crate::sign;

/// Operation target prefix of the cost-analysis service's JSON protocol.
const TARGET_PREFIX: &str = "AWSInsightsIndexService";
const SERVICE_NAME: &str = "ce";

/// Base delay for exponential backoff between retries, doubling per attempt.
const BACKOFF_BASE_MS: u64 = 200;
const BACKOFF_CAP_MS: u64 = 5_000;

/// HTTP client for the cost-analysis API.
///
/// Features:
/// - SigV4-style request signing (fresh timestamp per attempt)
/// - Exponential backoff on throttles and server errors
/// - Configurable timeouts, retry limits, and request pacing
pub struct CostExplorerClient {
    client: Client<
        hyper_rustls::HttpsConnector<hyper_util::client::legacy::connect::HttpConnector>,
        Full<Bytes>,
    >,
    credentials: CredentialsProvider,
    endpoint: String,
    host: String,
    region: String,
    api_timeout: Duration,
    max_retries: u32,
    min_request_interval: Duration,
    last_request_time: Mutex<Instant>,
}

impl CostExplorerClient {
    /// Create a new client with the given configuration and credentials.
    pub fn new(config: &Config, credentials: CredentialsProvider) -> Self {
        // http is permitted only so an endpoint override can point at a
        // local test server; the derived production endpoint is always https.
        let connector = hyper_rustls::HttpsConnectorBuilder::new()
            .with_webpki_roots()
            .https_or_http()
            .enable_http1()
            .enable_http2()
            .build();

        let client = Client::builder(TokioExecutor::new()).build(connector);
        let endpoint = config.endpoint();
        let host = host_of(&endpoint);

        Self {
            client,
            credentials,
            endpoint,
            host,
            region: config.region.clone(),
            api_timeout: Duration::from_secs(config.timeout_secs),
            max_retries: config.max_retries,
            min_request_interval: Duration::from_millis(config.min_request_interval_ms),
            last_request_time: Mutex::new(Instant::now()),
        }
    }

    /// Retrieves one page of available values for a dimension.
    pub async fn get_dimension_values(
        &self,
        request: &GetDimensionValuesRequest,
    ) -> Result<GetDimensionValuesResult> {
        self.call("GetDimensionValues", request).await
    }

    /// Follows `next_page_token` until the listing is exhausted and returns
    /// every dimension value. A `RequestChanged` service error propagates
    /// untouched; whether to restart pagination is the caller's decision.
    pub async fn get_all_dimension_values(
        &self,
        request: &GetDimensionValuesRequest,
    ) -> Result<Vec<DimensionValuesWithAttributes>> {
        let mut page = request.clone();
        let mut values = Vec::new();

        loop {
            let result = self.get_dimension_values(&page).await?;
            if let Some(mut batch) = result.dimension_values {
                values.append(&mut batch);
            }
            match result.next_page_token {
                Some(token) => page.next_page_token = Some(token),
                None => break,
            }
        }

        Ok(values)
    }

    async fn call<Req, Res>(&self, operation: &'static str, request: &Req) -> Result<Res>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        let body = Bytes::from(serde_json::to_vec(request)?);
        let target = format!("{TARGET_PREFIX}.{operation}");
        let invocation_id = invocation_id();

        self.pace().await;

        let mut attempt = 0u32;
        loop {
            match self.dispatch(&target, &invocation_id, body.clone()).await {
                Ok(bytes) => {
                    debug!(operation, attempt, "request succeeded");
                    return Ok(serde_json::from_slice(&bytes)?);
                }
                Err(err) if attempt < self.max_retries && err.is_retryable() => {
                    attempt += 1;
                    let delay = backoff_delay(attempt);
                    warn!(
                        operation,
                        attempt,
                        max_retries = self.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "retryable failure, backing off"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Enforces the configured minimum interval between requests.
    async fn pace(&self) {
        if self.min_request_interval.is_zero() {
            return;
        }
        let mut last_time = self.last_request_time.lock().await;
        let elapsed = last_time.elapsed();
        if elapsed < self.min_request_interval {
            tokio::time::sleep(self.min_request_interval - elapsed).await;
        }
        *last_time = Instant::now();
    }

    /// One signed attempt, bounded by the configured timeout.
    async fn dispatch(&self, target: &str, invocation_id: &str, body: Bytes) -> Result<Bytes> {
        let credentials = self.credentials.resolve()?;
        let headers = sign::sign_request(
            &sign::SigningParams {
                credentials: &credentials,
                region: &self.region,
                service: SERVICE_NAME,
                host: &self.host,
                target,
                time: chrono::Utc::now(),
            },
            &body,
        );

        let url = format!("{}/", self.endpoint);
        debug!(url = %url, target, "sending request");

        match tokio::time::timeout(
            self.api_timeout,
            self.post(&url, &headers, invocation_id, body),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(Error::Timeout(self.api_timeout)),
        }
    }

    async fn post(
        &self,
        url: &str,
        headers: &[(String, String)],
        invocation_id: &str,
        body: Bytes,
    ) -> Result<Bytes> {
        let mut req = Request::builder().method("POST").uri(url);
        for (name, value) in headers {
            req = req.header(name.as_str(), value.as_str());
        }
        req = req.header("amz-sdk-invocation-id", invocation_id);
        let req = req
            .body(Full::new(body))
            .map_err(|e| Error::Http(e.to_string()))?;

        let response = self
            .client
            .request(req)
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        let status = response.status();
        let header_error_type = response
            .headers()
            .get("x-amzn-errortype")
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());
        let bytes = response
            .into_body()
            .collect()
            .await
            .map_err(|e| Error::Http(e.to_string()))?
            .to_bytes();

        if status.is_success() {
            Ok(bytes)
        } else {
            Err(unmarshal_error(
                status.as_u16(),
                header_error_type.as_deref(),
                &bytes,
            ))
        }
    }
}

/// Error shape of the service's JSON protocol.
#[derive(serde::Deserialize)]
struct WireError {
    #[serde(rename = "__type")]
    error_type: Option<String>,
    #[serde(rename = "message", alias = "Message")]
    message: Option<String>,
}

fn unmarshal_error(status: u16, header_error_type: Option<&str>, body: &[u8]) -> Error {
    let wire: WireError = serde_json::from_slice(body).unwrap_or(WireError {
        error_type: None,
        message: None,
    });
    let message = wire
        .message
        .unwrap_or_else(|| String::from_utf8_lossy(body).chars().take(500).collect());

    if status >= 500 {
        return Error::Api(ApiError::ServerError { status, message });
    }

    let code = wire
        .error_type
        .as_deref()
        .or(header_error_type)
        .map(error_code)
        .unwrap_or_default();
    if !code.is_empty() {
        Error::Api(ApiError::from_wire(code, message))
    } else if status == 429 {
        Error::Api(ApiError::Throttling { message })
    } else {
        Error::Http(format!("HTTP {status}: {message}"))
    }
}

/// Strips the namespace prefix and header metadata suffix from a wire error
/// code: `com.amazonaws.ce#RequestChangedException:Sender` becomes
/// `RequestChangedException`.
fn error_code(raw: &str) -> &str {
    let code = raw.rsplit('#').next().unwrap_or(raw);
    code.split(':').next().unwrap_or(code)
}

fn backoff_delay(attempt: u32) -> Duration {
    let exponent = attempt.saturating_sub(1).min(16);
    Duration::from_millis((BACKOFF_BASE_MS << exponent).min(BACKOFF_CAP_MS))
}

fn host_of(endpoint: &str) -> String {
    let rest = endpoint
        .strip_prefix("https://")
        .or_else(|| endpoint.strip_prefix("http://"))
        .unwrap_or(endpoint);
    rest.split('/').next().unwrap_or(rest).to_string()
}

fn invocation_id() -> String {
    let mut bytes = [0u8; 16];
    getrandom::fill(&mut bytes).expect("failed to generate random bytes");
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    format!(
        "{:02x}{:02x}{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
        bytes[0],
        bytes[1],
        bytes[2],
        bytes[3],
        bytes[4],
        bytes[5],
        bytes[6],
        bytes[7],
        bytes[8],
        bytes[9],
        bytes[10],
        bytes[11],
        bytes[12],
        bytes[13],
        bytes[14],
        bytes[15]
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::Credentials;
    use crate::model::Dimension;
    use httpmock::prelude::*;

    fn test_client(server: &MockServer, max_retries: u32) -> CostExplorerClient {
        let config = Config {
            endpoint: Some(server.base_url()),
            max_retries,
            timeout_secs: 5,
            ..Default::default()
        };
        CostExplorerClient::new(
            &config,
            CredentialsProvider::from_static(Credentials::new("AKIDEXAMPLE", "secret")),
        )
    }

    #[test]
    fn test_error_code_strips_namespace_and_suffix() {
        assert_eq!(
            error_code("com.amazonaws.ce#RequestChangedException:Sender"),
            "RequestChangedException"
        );
        assert_eq!(error_code("ThrottlingException"), "ThrottlingException");
        assert_eq!(
            error_code("namespace#DataUnavailableException"),
            "DataUnavailableException"
        );
    }

    #[test]
    fn test_unmarshal_error_wire_code() {
        let body = br#"{"__type":"com.amazonaws.ce#RequestChangedException","Message":"token is stale"}"#;
        let err = unmarshal_error(400, None, body);
        match err {
            Error::Api(ApiError::RequestChanged { message }) => {
                assert_eq!(message, "token is stale");
            }
            other => panic!("expected RequestChanged, got {other:?}"),
        }
    }

    #[test]
    fn test_unmarshal_error_header_fallback() {
        let err = unmarshal_error(400, Some("InvalidNextTokenException"), b"{}");
        assert!(matches!(
            err,
            Error::Api(ApiError::InvalidNextToken { .. })
        ));
    }

    #[test]
    fn test_unmarshal_error_server_status_wins() {
        let body = br#"{"__type":"InternalErrorException","message":"boom"}"#;
        let err = unmarshal_error(503, None, body);
        match err {
            Error::Api(ApiError::ServerError { status, message }) => {
                assert_eq!(status, 503);
                assert_eq!(message, "boom");
            }
            other => panic!("expected ServerError, got {other:?}"),
        }
    }

    #[test]
    fn test_unmarshal_error_plain_http() {
        let err = unmarshal_error(404, None, b"not found");
        match err {
            Error::Http(message) => assert!(message.contains("404")),
            other => panic!("expected Http, got {other:?}"),
        }
    }

    #[test]
    fn test_backoff_delay_doubles_and_caps() {
        assert_eq!(backoff_delay(1), Duration::from_millis(200));
        assert_eq!(backoff_delay(2), Duration::from_millis(400));
        assert_eq!(backoff_delay(3), Duration::from_millis(800));
        assert_eq!(backoff_delay(10), Duration::from_millis(5_000));
    }

    #[test]
    fn test_host_of() {
        assert_eq!(
            host_of("https://ce.us-east-1.amazonaws.com"),
            "ce.us-east-1.amazonaws.com"
        );
        assert_eq!(host_of("http://127.0.0.1:8080"), "127.0.0.1:8080");
        assert_eq!(host_of("http://127.0.0.1:8080/base"), "127.0.0.1:8080");
    }

    #[test]
    fn test_invocation_id_shape() {
        let id = invocation_id();
        assert_eq!(id.len(), 36);
        assert_eq!(id.chars().filter(|c| *c == '-').count(), 4);
        assert_ne!(id, invocation_id());
    }

    #[tokio::test]
    async fn test_get_dimension_values_round_trip() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/")
                .header("x-amz-target", "AWSInsightsIndexService.GetDimensionValues")
                .header("content-type", "application/x-amz-json-1.1");
            then.status(200)
                .header("content-type", "application/x-amz-json-1.1")
                .body(
                    r#"{"DimensionValues":[{"Value":"us-east-1","Attributes":{}}],"ReturnSize":1,"TotalSize":1}"#,
                );
        });

        let client = test_client(&server, 0);
        let request = GetDimensionValuesRequest::default().with_dimension(Dimension::Region);
        let result = client.get_dimension_values(&request).await.unwrap();

        mock.assert();
        assert_eq!(result.return_size, Some(1));
        let values = result.dimension_values.unwrap();
        assert_eq!(values[0].value.as_deref(), Some("us-east-1"));
    }

    #[tokio::test]
    async fn test_request_is_signed() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/")
                .header_exists("authorization")
                .header_exists("x-amz-date")
                .header_exists("amz-sdk-invocation-id");
            then.status(200).body("{}");
        });

        let client = test_client(&server, 0);
        client
            .get_dimension_values(&GetDimensionValuesRequest::default())
            .await
            .unwrap();

        mock.assert();
    }

    #[tokio::test]
    async fn test_service_error_maps_to_api_error() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/");
            then.status(400).body(
                r#"{"__type":"com.amazonaws.ce#RequestChangedException","Message":"parameters changed"}"#,
            );
        });

        let client = test_client(&server, 3);
        let err = client
            .get_dimension_values(&GetDimensionValuesRequest::default())
            .await
            .unwrap_err();

        // not retryable: exactly one attempt despite the retry budget
        mock.assert_hits(1);
        match err {
            Error::Api(ApiError::RequestChanged { message }) => {
                assert_eq!(message, "parameters changed");
            }
            other => panic!("expected RequestChanged, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_throttling_exhausts_retry_budget() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/");
            then.status(400)
                .body(r#"{"__type":"ThrottlingException","message":"slow down"}"#);
        });

        let client = test_client(&server, 2);
        let err = client
            .get_dimension_values(&GetDimensionValuesRequest::default())
            .await
            .unwrap_err();

        // initial attempt plus two retries
        mock.assert_hits(3);
        assert!(matches!(err, Error::Api(ApiError::Throttling { .. })));
    }

    #[tokio::test]
    async fn test_pagination_follows_tokens() {
        let server = MockServer::start();
        let page_one = server.mock(|when, then| {
            when.method(POST).path("/").body_contains("\"NextPageToken\":\"t1\"");
            then.status(200).body(
                r#"{"DimensionValues":[{"Value":"us-east-1"}],"NextPageToken":"t2"}"#,
            );
        });
        let page_two = server.mock(|when, then| {
            when.method(POST).path("/").body_contains("\"NextPageToken\":\"t2\"");
            then.status(200)
                .body(r#"{"DimensionValues":[{"Value":"eu-west-1"}]}"#);
        });

        let client = test_client(&server, 0);
        let request = GetDimensionValuesRequest::default()
            .with_dimension(Dimension::Region)
            .with_next_page_token("t1");
        let values = client.get_all_dimension_values(&request).await.unwrap();

        page_one.assert();
        page_two.assert();
        assert_eq!(values.len(), 2);
        assert_eq!(values[0].value.as_deref(), Some("us-east-1"));
        assert_eq!(values[1].value.as_deref(), Some("eu-west-1"));
    }
}
