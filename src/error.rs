/// All failures a page controller can hit at its network boundary.
///
/// Every variant is converted to inline display text by the component that
/// triggered the request; nothing is rethrown past a controller.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The fetch itself failed (offline, DNS, CORS, aborted navigation).
    #[error("network request failed: {0}")]
    Network(String),

    /// Server answered with a non-success HTTP status.
    #[error("unexpected status {0}")]
    Status(u16),

    /// Response body was not the structured data we expected.
    #[error("failed to parse api response: {0}")]
    Malformed(String),

    /// Server answered 200-shaped but flagged failure in the payload.
    /// Displayed verbatim, so the message carries no prefix.
    #[error("{0}")]
    Api(String),

    /// A browser API we depend on is unavailable.
    #[error("browser api unavailable: {0}")]
    Browser(&'static str),
}

pub type Result<T> = std::result::Result<T, ApiError>;
