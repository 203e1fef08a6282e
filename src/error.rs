use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("credentials error: {0}")]
    Credentials(#[from] CredentialsError),

    #[error("service error: {0}")]
    Api(#[from] ApiError),

    #[error(transparent)]
    InvalidEnum(#[from] InvalidEnumValue),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("http error: {0}")]
    Http(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),
}

impl Error {
    /// Whether the failed request may be retried as-is.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Api(api) => api.is_retryable(),
            Error::Timeout(_) => true,
            _ => false,
        }
    }
}

#[derive(Debug, Error)]
pub enum CredentialsError {
    #[error("no credentials found in the provider chain")]
    NotFound,

    #[error("incomplete credentials: missing {0}")]
    Incomplete(&'static str),
}

/// Service-reported failure, unmarshalled from the wire error code.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("bill expired for the requested time period: {message}")]
    BillExpiration { message: String },

    #[error("requested data is not available: {message}")]
    DataUnavailable { message: String },

    #[error("invalid pagination token: {message}")]
    InvalidNextToken { message: String },

    #[error("request rate limit exceeded: {message}")]
    LimitExceeded { message: String },

    /// The paginated request no longer matches the parameters that produced
    /// its continuation token. Callers decide whether to restart pagination.
    #[error("request parameters changed between pages: {message}")]
    RequestChanged { message: String },

    #[error("resource not found: {message}")]
    ResourceNotFound { message: String },

    #[error("service quota exceeded: {message}")]
    ServiceQuotaExceeded { message: String },

    #[error("unresolvable usage unit: {message}")]
    UnresolvableUsageUnit { message: String },

    #[error("throttled: {message}")]
    Throttling { message: String },

    #[error("server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    #[error("unrecognized service error {code}: {message}")]
    Unrecognized { code: String, message: String },
}

impl ApiError {
    /// Maps a wire error code (the part of `__type` after `#`) to its variant.
    pub fn from_wire(code: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        match code {
            "BillExpirationException" => ApiError::BillExpiration { message },
            "DataUnavailableException" => ApiError::DataUnavailable { message },
            "InvalidNextTokenException" => ApiError::InvalidNextToken { message },
            "LimitExceededException" => ApiError::LimitExceeded { message },
            "RequestChangedException" => ApiError::RequestChanged { message },
            "ResourceNotFoundException" => ApiError::ResourceNotFound { message },
            "ServiceQuotaExceededException" => ApiError::ServiceQuotaExceeded { message },
            "UnresolvableUsageUnitException" => ApiError::UnresolvableUsageUnit { message },
            "ThrottlingException" | "TooManyRequestsException" => ApiError::Throttling { message },
            _ => ApiError::Unrecognized {
                code: code.to_string(),
                message,
            },
        }
    }

    /// Whether the transport may retry the request that produced this error.
    /// Only throttles and server-side failures qualify; everything else
    /// signals a caller bug or a state change the caller must handle.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ApiError::LimitExceeded { .. }
                | ApiError::Throttling { .. }
                | ApiError::ServerError { .. }
        )
    }
}

/// Reverse lookup of a wire string into a closed enumeration failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{value:?} is not a valid {kind}")]
pub struct InvalidEnumValue {
    /// Name of the enumeration the value was parsed against.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl InvalidEnumValue {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
