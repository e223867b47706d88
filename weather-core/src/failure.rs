use thiserror::Error;

/// Terminal outcome of a failed weather lookup.
///
/// The `Display` output is the user-facing message: a short title, a newline,
/// then a hint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureReason {
    #[error("Bad request:\nPlease check your input")]
    BadRequest,

    #[error("Unauthorized:\nInvalid API key")]
    Unauthorized,

    #[error("Forbidden:\nAccess denied")]
    Forbidden,

    #[error("Not found:\nCity not found")]
    NotFound,

    #[error("Internal server error:\nPlease try again later")]
    ServerError,

    #[error("Bad gateway:\nInvalid response from the server")]
    BadGateway,

    #[error("Service unavailable:\nService is down")]
    ServiceUnavailable,

    #[error("Gateway timeout:\nNo response from the server")]
    GatewayTimeout,

    /// Any HTTP error status without a dedicated variant.
    #[error("HTTP error occurred:\nStatus {0}")]
    OtherHttp(u16),

    #[error("Connection error:\nCheck your internet connection")]
    Connection,

    #[error("Timeout error:\nThe request timed out")]
    Timeout,

    #[error("Too many redirects:\nCheck the URL")]
    TooManyRedirects,

    #[error("Request error:\n{0}")]
    OtherRequest(String),

    /// A 2xx response whose body is not the expected payload shape.
    #[error("Malformed response:\n{0}")]
    MalformedResponse(String),

    /// A 2xx response whose `cod` field reports something other than 200.
    #[error("Unexpected response code:\n{0}")]
    UnexpectedCode(String),
}

const STATUS_TABLE: &[(u16, FailureReason)] = &[
    (400, FailureReason::BadRequest),
    (401, FailureReason::Unauthorized),
    (403, FailureReason::Forbidden),
    (404, FailureReason::NotFound),
    (500, FailureReason::ServerError),
    (502, FailureReason::BadGateway),
    (503, FailureReason::ServiceUnavailable),
    (504, FailureReason::GatewayTimeout),
];

impl FailureReason {
    /// Map an HTTP error status to a failure. Statuses missing from the
    /// table become [`FailureReason::OtherHttp`].
    pub fn from_status(status: u16) -> Self {
        STATUS_TABLE
            .iter()
            .find(|(code, _)| *code == status)
            .map(|(_, reason)| reason.clone())
            .unwrap_or(FailureReason::OtherHttp(status))
    }

    /// Stable kebab-case identifier, used in machine-readable output.
    pub fn kind(&self) -> &'static str {
        match self {
            FailureReason::BadRequest => "bad-request",
            FailureReason::Unauthorized => "unauthorized",
            FailureReason::Forbidden => "forbidden",
            FailureReason::NotFound => "not-found",
            FailureReason::ServerError => "server-error",
            FailureReason::BadGateway => "bad-gateway",
            FailureReason::ServiceUnavailable => "service-unavailable",
            FailureReason::GatewayTimeout => "gateway-timeout",
            FailureReason::OtherHttp(_) => "other-http-error",
            FailureReason::Connection => "connection-error",
            FailureReason::Timeout => "timeout",
            FailureReason::TooManyRedirects => "too-many-redirects",
            FailureReason::OtherRequest(_) => "other-request-error",
            FailureReason::MalformedResponse(_) => "malformed-response",
            FailureReason::UnexpectedCode(_) => "unexpected-code",
        }
    }

    /// The HTTP status this failure was derived from, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            FailureReason::OtherHttp(status) => Some(*status),
            _ => STATUS_TABLE
                .iter()
                .find(|(_, reason)| reason == self)
                .map(|(code, _)| *code),
        }
    }
}
