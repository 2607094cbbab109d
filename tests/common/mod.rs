//! Shared test helpers: in-memory transport mock and response fixtures.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};

use domainnameapi_client::{
    ApiError, ContactRecord, ContactSet, DomainApiClient, RegistrarConfig, Result, SoapTransport,
};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Err`，并解包返回错误（成功则直接让测试失败）。
#[macro_export]
macro_rules! require_err {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_err(), "expected Err(..), got Ok");
        let Err(err) = res else {
            return;
        };
        err
    }};
}

/// Scripted [`SoapTransport`]: queued responses per operation, recorded
/// requests for assertions.
pub struct MockTransport {
    responses: Mutex<HashMap<String, VecDeque<Result<Value>>>>,
    failure: Option<ApiError>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Transport whose every invocation fails with the given error
    /// (exercises the "transport throws" path).
    pub fn failing(error: ApiError) -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            failure: Some(error),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Queue a raw response for one invocation of `operation`.
    #[must_use]
    pub fn expect(self, operation: &str, result: Result<Value>) -> Self {
        self.responses
            .lock()
            .expect("mock lock poisoned")
            .entry(operation.to_string())
            .or_default()
            .push_back(result);
        self
    }

    /// Queue a successful envelope whose result payload is `payload`.
    #[must_use]
    pub fn success(self, operation: &str, payload: Value) -> Self {
        let envelope = success_envelope(operation, payload);
        self.expect(operation, Ok(envelope))
    }

    /// Recorded `(operation, request)` pairs, in call order.
    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().expect("mock lock poisoned").clone()
    }

    /// Pointer lookup into the request of the first recorded call.
    pub fn first_request(&self, pointer: &str) -> Option<Value> {
        self.calls().first()?.1.pointer(pointer).cloned()
    }
}

#[async_trait]
impl SoapTransport for MockTransport {
    async fn invoke(&self, operation: &str, request: &Value) -> Result<Value> {
        self.calls
            .lock()
            .expect("mock lock poisoned")
            .push((operation.to_string(), request.clone()));

        if let Some(error) = &self.failure {
            return Err(error.clone());
        }

        self.responses
            .lock()
            .expect("mock lock poisoned")
            .get_mut(operation)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| {
                Err(ApiError::Network {
                    detail: format!("unexpected operation: {operation}"),
                })
            })
    }
}

/// Client over a shared mock, test-account credentials.
pub fn client(mock: &Arc<MockTransport>) -> DomainApiClient {
    DomainApiClient::with_transport(
        RegistrarConfig::new("reseller", "secret"),
        Arc::clone(mock) as Arc<dyn SoapTransport>,
    )
}

// ============ Envelope fixtures ============

/// The nested `{"<op>Response": {"<op>Result": ...}}` shape the service
/// stack emits.
pub fn success_envelope(operation: &str, payload: Value) -> Value {
    let mut result = serde_json::Map::new();
    result.insert(format!("{operation}Result"), payload);
    let mut response = serde_json::Map::new();
    response.insert(format!("{operation}Response"), Value::Object(result));
    Value::Object(response)
}

/// A payload that passed the service-side success check, merged with
/// operation-specific fields.
pub fn ok_payload(extra: Value) -> Value {
    let mut payload = json!({"OperationResult": "SUCCESS"});
    if let (Some(target), Some(fields)) = (payload.as_object_mut(), extra.as_object()) {
        for (key, value) in fields {
            target.insert(key.clone(), value.clone());
        }
    }
    payload
}

/// Envelope whose result payload carries a SOAP fault indicator.
pub fn fault_envelope(operation: &str) -> Value {
    success_envelope(
        operation,
        json!({"faultcode": "s:Server", "faultstring": "Invalid request"}),
    )
}

/// Envelope reporting a business failure.
pub fn error_envelope(operation: &str, message: &str) -> Value {
    success_envelope(
        operation,
        json!({
            "OperationResult": "ERROR",
            "OperationMessage": message,
            "ErrorCode": "2302"
        }),
    )
}

// ============ Record fixtures ============

/// A fully populated raw `DomainInfo` structure.
pub fn raw_domain_info() -> Value {
    json!({
        "Id": 1001,
        "Status": "Active",
        "DomainName": "example.com",
        "Auth": "epp-key",
        "LockStatus": true,
        "PrivacyProtectionStatus": false,
        "IsChildNameServer": false,
        "AdministrativeContactId": 11,
        "BillingContactId": 12,
        "TechnicalContactId": 13,
        "RegistrantContactId": 14,
        "StartDate": "2023-06-01T00:00:00",
        "ExpirationDate": "2025-06-01T00:00:00",
        "RemainingDay": 120,
        "NameServerList": ["ns1.example.com", "ns2.example.com"],
        "AdditionalAttributes": {
            "KeyValueOfstringstring": [{"Key": "IDNLANG", "Value": "tr"}]
        },
        "ChildNameServerInfo": {
            "ChildNameServer": "ns1.example.com",
            "IpAddress": {"string": "192.0.2.1"}
        }
    })
}

/// A raw `ContactInfo` structure.
pub fn raw_contact(first_name: &str, email: &str) -> Value {
    json!({
        "Id": 55,
        "Status": "OK",
        "AddressLine1": "123 Main St",
        "AddressLine2": "Apt 4B",
        "State": "Istanbul",
        "City": "Istanbul",
        "Country": "TR",
        "ZipCode": "34000",
        "Phone": "5554445452",
        "PhoneCountryCode": "90",
        "Fax": "5554445452",
        "FaxCountryCode": "90",
        "Auth": "",
        "FirstName": first_name,
        "LastName": "Doe",
        "Company": "MyCompany Ltd.",
        "EMail": email,
        "Type": "Contact"
    })
}

/// A contact set ready for save/register calls.
pub fn contact_set() -> ContactSet {
    let contact = ContactRecord {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        company: "MyCompany Ltd.".to_string(),
        email: "admin@example.com".to_string(),
        contact_type: "Contact".to_string(),
        ..ContactRecord::default()
    };
    ContactSet::uniform(contact)
}
