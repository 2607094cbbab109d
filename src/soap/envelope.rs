//! SOAP 1.1 envelope assembly.
//!
//! The request payload is a plain value tree; objects become nested
//! elements, arrays become repeated sibling elements of the same name, and
//! scalars become text content. That is exactly the mapping the service's
//! own stack uses, so the `{"string": [...]}` and `KeyValueOfstringstring`
//! shapes built by the request builders serialize to the expected XML.

use serde_json::Value;

use super::SERVICE_NAMESPACE;

const SOAP_ENVELOPE_NAMESPACE: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// Render the full envelope for one operation call.
pub(crate) fn build(operation: &str, request: &Value) -> String {
    let mut inner = String::new();
    if let Some(fields) = request.as_object() {
        for (name, value) in fields {
            write_value(&mut inner, name, value);
        }
    }

    format!(
        "<s:Envelope xmlns:s=\"{SOAP_ENVELOPE_NAMESPACE}\"><s:Body>\
         <{operation} xmlns=\"{SERVICE_NAMESPACE}\">{inner}</{operation}>\
         </s:Body></s:Envelope>"
    )
}

fn write_value(out: &mut String, name: &str, value: &Value) {
    match value {
        Value::Array(items) => {
            for item in items {
                write_value(out, name, item);
            }
        }
        Value::Object(fields) => {
            out.push('<');
            out.push_str(name);
            out.push('>');
            for (child_name, child) in fields {
                write_value(out, child_name, child);
            }
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
        Value::Null => {
            out.push('<');
            out.push_str(name);
            out.push_str("/>");
        }
        Value::String(s) => write_element(out, name, &escape(s)),
        Value::Bool(b) => write_element(out, name, &b.to_string()),
        Value::Number(n) => write_element(out, name, &n.to_string()),
    }
}

fn write_element(out: &mut String, name: &str, content: &str) {
    out.push('<');
    out.push_str(name);
    out.push('>');
    out.push_str(content);
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
