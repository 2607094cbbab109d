//! Registrar client: transport handling and the per-call chokepoint.

mod account;
mod contacts;
mod domains;
mod nameservers;
mod requests;

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::OnceCell;

use crate::error::{ApiError, Result};
use crate::soap::HttpSoapTransport;
use crate::traits::SoapTransport;
use crate::types::RegistrarConfig;
use crate::utils::log_sanitizer::{sanitize_request, truncate_for_log};
use crate::utils::value::text;

/// Async client for the DomainNameAPI registrar service.
///
/// One instance holds the reseller credentials and a lazily-initialized,
/// shared transport handle; it is cheap to share behind an `Arc` and safe to
/// use from concurrent tasks (there is no mutable state beyond the one-time
/// transport initialization).
///
/// Every operation resolves to `Result<T, ApiError>`; see
/// [`ApiError`](crate::ApiError) for the failure taxonomy.
pub struct DomainApiClient {
    config: RegistrarConfig,
    transport: OnceCell<Arc<dyn SoapTransport>>,
}

impl DomainApiClient {
    /// Create a client using the bundled HTTP transport.
    ///
    /// Construction never fails: the transport is built on first use, and a
    /// failed initialization is reported by that call (and retried by the
    /// next) instead of being raised here.
    #[must_use]
    pub fn new(config: RegistrarConfig) -> Self {
        Self {
            config,
            transport: OnceCell::new(),
        }
    }

    /// Create a client over a caller-supplied transport.
    ///
    /// Used by tests to substitute an in-memory mock, or to share one
    /// transport between clients.
    #[must_use]
    pub fn with_transport(config: RegistrarConfig, transport: Arc<dyn SoapTransport>) -> Self {
        Self {
            config,
            transport: OnceCell::new_with(Some(transport)),
        }
    }

    /// 获取（必要时初始化）共享 transport。并发首次调用等待同一次初始化。
    async fn transport(&self) -> Result<&Arc<dyn SoapTransport>> {
        self.transport
            .get_or_try_init(|| async {
                let transport = HttpSoapTransport::new()?;
                Ok(Arc::new(transport) as Arc<dyn SoapTransport>)
            })
            .await
    }

    /// Single chokepoint for every remote operation.
    ///
    /// Locates the `"<operation>Result"` payload (top level, or one level
    /// down inside the first nested object — the two shapes the service
    /// stack emits), then maps the envelope onto the error taxonomy: fault
    /// indicator → [`ApiError::Fault`], absent/non-object payload →
    /// [`ApiError::MissingData`], `OperationResult != "SUCCESS"` →
    /// [`ApiError::Operation`]. Transport failures pass through untouched.
    pub(crate) async fn call(&self, operation: &str, request: Value) -> Result<Value> {
        let transport = self.transport().await?;

        log::debug!(
            "[domainnameapi] {operation} request: {}",
            sanitize_request(&request)
        );

        let response = transport.invoke(operation, &request).await?;

        log::debug!(
            "[domainnameapi] {operation} response: {}",
            truncate_for_log(&response.to_string())
        );

        if let Some(fault) = response.get("Fault") {
            return Err(self.report(fault_error(fault)));
        }

        let Some(payload) = locate_result(operation, &response) else {
            return Err(self.report(ApiError::MissingData {
                operation: operation.to_string(),
            }));
        };

        if payload.get("faultcode").is_some() {
            return Err(self.report(fault_error(payload)));
        }

        if text(payload.get("OperationResult")) != "SUCCESS" {
            let message = match text(payload.get("OperationMessage")) {
                m if m.is_empty() => "Operation did not succeed".to_string(),
                m => m,
            };
            let code = match text(payload.get("ErrorCode")) {
                c if c.is_empty() => None,
                c => Some(c),
            };
            return Err(self.report(ApiError::Operation { message, code }));
        }

        Ok(payload.clone())
    }

    /// 失败统一打日志：业务失败 warn，其余 error。
    fn report(&self, error: ApiError) -> ApiError {
        if error.is_expected() {
            log::warn!("{error}");
        } else {
            log::error!("{error}");
        }
        error
    }

    pub(crate) fn config(&self) -> &RegistrarConfig {
        &self.config
    }
}

/// Find the operation's result payload in the raw response.
///
/// The service stack produces either `{"<op>Result": {...}}` directly or
/// `{"<op>Response": {"<op>Result": {...}}}`; anything else counts as no
/// data. Only object payloads qualify.
fn locate_result<'a>(operation: &str, response: &'a Value) -> Option<&'a Value> {
    let key = format!("{operation}Result");

    if let Some(payload) = response.get(&key)
        && payload.is_object()
    {
        return Some(payload);
    }

    let nested = response.as_object()?.values().next()?;
    let payload = nested.get(&key)?;
    payload.is_object().then_some(payload)
}

fn fault_error(fault: &Value) -> ApiError {
    let message = match text(fault.get("faultstring")) {
        m if m.is_empty() => match text(fault.get("faultcode")) {
            c if c.is_empty() => "SOAP fault".to_string(),
            c => c,
        },
        m => m,
    };
    ApiError::Fault { message }
}
