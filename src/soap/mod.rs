//! Bundled HTTP transport for the registrar's SOAP endpoint.

mod decode;
mod envelope;

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{ApiError, Result};
use crate::traits::SoapTransport;

/// Production service endpoint.
pub(crate) const SERVICE_ENDPOINT: &str = "https://whmcs.domainnameapi.com/DomainApi.svc";
/// Service contract namespace.
pub(crate) const SERVICE_NAMESPACE: &str = "http://tempuri.org/";
/// SOAPAction prefix; the operation name is appended per call.
const SOAP_ACTION_PREFIX: &str = "http://tempuri.org/DomainApi/";

/// 连接建立超时。服务端处理批量查询可能较慢，请求整体不设超时。
const CONNECT_TIMEOUT: Duration = Duration::from_secs(20);

/// [`SoapTransport`] implementation speaking SOAP 1.1 over HTTPS.
///
/// Builds the envelope from the request payload, POSTs it with the
/// operation's `SOAPAction`, and decodes the response body back into a value
/// tree. SOAP faults stay inside the returned payload (under `Fault` or as
/// `faultcode`/`faultstring` fields) so the client can map them to the
/// `fault` level; only transport-layer problems become errors here.
pub struct HttpSoapTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSoapTransport {
    /// Transport against the production endpoint.
    pub fn new() -> Result<Self> {
        Self::with_endpoint(SERVICE_ENDPOINT)
    }

    /// Transport against a custom endpoint (proxies, local stubs).
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network {
                detail: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl SoapTransport for HttpSoapTransport {
    async fn invoke(&self, operation: &str, request: &Value) -> Result<Value> {
        let envelope = envelope::build(operation, request);

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "text/xml; charset=utf-8")
            .header("SOAPAction", format!("\"{SOAP_ACTION_PREFIX}{operation}\""))
            .body(envelope)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        log::debug!("[domainnameapi] {operation} HTTP {status}");

        let body_text = response.text().await.map_err(|e| ApiError::Network {
            detail: format!("failed to read response body: {e}"),
        })?;

        let document = match decode::to_value(&body_text) {
            Ok(document) => document,
            // 故障响应通常带 500 状态码且仍是合法 XML；到这里说明连 XML 都不是
            Err(_) if !status.is_success() => {
                return Err(ApiError::Network {
                    detail: format!("HTTP {status}"),
                });
            }
            Err(e) => return Err(e),
        };

        document
            .get("Envelope")
            .and_then(|envelope| envelope.get("Body"))
            .cloned()
            .ok_or_else(|| ApiError::Parse {
                detail: "response has no SOAP body".to_string(),
            })
    }
}

fn map_send_error(error: reqwest::Error) -> ApiError {
    if error.is_timeout() {
        ApiError::Timeout {
            detail: error.to_string(),
        }
    } else {
        ApiError::Network {
            detail: error.to_string(),
        }
    }
}
