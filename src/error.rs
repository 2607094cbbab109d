use serde::{Deserialize, Serialize};

/// Unified error type for all registrar operations.
///
/// Every public operation on [`DomainApiClient`](crate::DomainApiClient) returns
/// `Result<T, ApiError>`; no transport or parsing failure escapes as a panic or
/// an unwrapped error. All variants are serializable for structured error
/// reporting.
///
/// # Failure levels
///
/// Callers that only need a coarse diagnostic category can use
/// [`level()`](Self::level), which maps every variant onto one of the four
/// [`FailureLevel`]s the registrar protocol distinguishes:
///
/// | Level | Variants | Meaning |
/// |-------|----------|---------|
/// | `fault` | [`Fault`](Self::Fault) | remote SOAP fault (protocol-level rejection) |
/// | `fatal` | [`MissingData`](Self::MissingData), [`Parse`](Self::Parse) | response payload absent or unparseable |
/// | `error` | [`Operation`](Self::Operation) | well-formed response signaling a business failure |
/// | `exception` | [`Network`](Self::Network), [`Timeout`](Self::Timeout) | local/transport-level failure |
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ApiError {
    /// The response payload carried a SOAP fault indicator.
    Fault {
        /// Fault message reported by the service (`faultstring`).
        message: String,
    },

    /// The response contained no usable payload for the invoked operation.
    MissingData {
        /// Name of the remote operation that produced the empty response.
        operation: String,
    },

    /// The response body could not be decoded.
    Parse {
        /// Details about the decode failure.
        detail: String,
    },

    /// The service processed the request and reported a business failure
    /// (e.g. domain not available, insufficient balance).
    Operation {
        /// Failure message reported by the service (`OperationMessage`).
        message: String,
        /// Service error code, if the response carried one.
        #[serde(rename = "error_code", skip_serializing_if = "Option::is_none")]
        code: Option<String>,
    },

    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, TLS handshake failure, etc.).
    Network {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },
}

/// Coarse diagnostic category of a failed operation.
///
/// Serialized as the lowercase level token (`"fault"`, `"fatal"`, `"error"`,
/// `"exception"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureLevel {
    /// Remote SOAP fault.
    Fault,
    /// Response payload absent or unparseable.
    Fatal,
    /// Business-logic failure in a well-formed response.
    Error,
    /// Local or transport-level failure.
    Exception,
}

impl std::fmt::Display for FailureLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fault => write!(f, "fault"),
            Self::Fatal => write!(f, "fatal"),
            Self::Error => write!(f, "error"),
            Self::Exception => write!(f, "exception"),
        }
    }
}

impl ApiError {
    /// Diagnostic level of this error.
    #[must_use]
    pub fn level(&self) -> FailureLevel {
        match self {
            Self::Fault { .. } => FailureLevel::Fault,
            Self::MissingData { .. } | Self::Parse { .. } => FailureLevel::Fatal,
            Self::Operation { .. } => FailureLevel::Error,
            Self::Network { .. } | Self::Timeout { .. } => FailureLevel::Exception,
        }
    }

    /// Human-readable failure message.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Fault { message } | Self::Operation { message, .. } => message.clone(),
            Self::MissingData { .. } => "No data returned".to_string(),
            Self::Parse { detail } | Self::Network { detail } | Self::Timeout { detail } => {
                detail.clone()
            }
        }
    }

    /// 是否为预期行为（业务层失败），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Operation { .. })
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fault { message } => {
                write!(f, "[domainnameapi] SOAP fault: {message}")
            }
            Self::MissingData { operation } => {
                write!(f, "[domainnameapi] No data returned for '{operation}'")
            }
            Self::Parse { detail } => {
                write!(f, "[domainnameapi] Parse error: {detail}")
            }
            Self::Operation { message, code } => {
                if let Some(code) = code {
                    write!(f, "[domainnameapi] Operation failed ({code}): {message}")
                } else {
                    write!(f, "[domainnameapi] Operation failed: {message}")
                }
            }
            Self::Network { detail } => {
                write!(f, "[domainnameapi] Network error: {detail}")
            }
            Self::Timeout { detail } => {
                write!(f, "[domainnameapi] Request timeout: {detail}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;
