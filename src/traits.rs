use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// Transport seam between the client and the remote SOAP service.
///
/// Implementations perform one remote call: given the operation name and the
/// already-built request payload, they return the raw response object exactly
/// as the service shaped it (including the `"<operation>Result"` wrapper and
/// any fault indicator). The client never looks at the wire format; all
/// envelope/XML concerns live behind this trait.
///
/// The bundled implementation is
/// [`HttpSoapTransport`](crate::HttpSoapTransport); tests substitute an
/// in-memory mock.
///
/// # Errors
///
/// Implementations must report transport-level failures (connect, TLS, read,
/// decode) through [`ApiError`](crate::ApiError) — never panic. A SOAP fault
/// is not a transport error: it is returned inside the response payload so
/// the client can map it to the `fault` level.
#[async_trait]
pub trait SoapTransport: Send + Sync {
    /// Invoke the named remote operation with the given request payload.
    async fn invoke(&self, operation: &str, request: &Value) -> Result<Value>;
}
