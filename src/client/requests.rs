//! Request payload assembly shared by all operations.

use std::collections::BTreeMap;

use serde_json::{Map, Value, json};

use super::DomainApiClient;

impl DomainApiClient {
    /// Wrap operation fields with the credential pair into the service's
    /// `{"request": {...}}` shape.
    pub(crate) fn request_with(&self, fields: Map<String, Value>) -> Value {
        let mut request = Map::new();
        request.insert(
            "UserName".to_string(),
            json!(self.config().effective_username()),
        );
        request.insert(
            "Password".to_string(),
            json!(self.config().effective_password()),
        );
        request.extend(fields);
        json!({ "request": request })
    }

    /// Request carrying only the credentials and a domain name.
    pub(crate) fn domain_request(&self, domain_name: &str) -> Value {
        let mut fields = Map::new();
        fields.insert("DomainName".to_string(), json!(domain_name));
        self.request_with(fields)
    }
}

/// The `{"string": [...]}` wrapper the service expects around string lists.
/// Always an explicit sequence, even for a single element.
pub(crate) fn string_list<S: AsRef<str>>(items: &[S]) -> Value {
    let items: Vec<&str> = items.iter().map(AsRef::as_ref).collect();
    json!({ "string": items })
}

/// The `KeyValueOfstringstring` pair-list shape for additional attributes.
/// Pairs are emitted in key order so request payloads are deterministic.
pub(crate) fn key_value_attributes<'a, I>(attributes: I) -> Value
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let ordered: BTreeMap<&str, &str> = attributes.into_iter().collect();
    let pairs: Vec<Value> = ordered
        .into_iter()
        .map(|(key, value)| json!({ "Key": key, "Value": value }))
        .collect();
    json!({ "KeyValueOfstringstring": pairs })
}
