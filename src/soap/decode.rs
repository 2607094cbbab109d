//! Response XML → value tree.
//!
//! Namespace prefixes are stripped (the client addresses elements by local
//! name), repeated sibling elements collapse into arrays, `xsi:nil` elements
//! become null, and text content is typed: `true`/`false` become booleans
//! and plain numeric text becomes numbers, matching what the service's own
//! clients see. Everything else stays a string.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use serde_json::{Map, Number, Value};

use crate::error::ApiError;

/// Decode a response document into a value tree keyed by the root element.
pub(crate) fn to_value(xml: &str) -> Result<Value, ApiError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    // (元素名, 子元素, 文本, xsi:nil)
    let mut stack: Vec<(String, Map<String, Value>, String, bool)> = Vec::new();
    let mut root = Map::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                let nil = is_nil(&start);
                stack.push((element_name(&start), Map::new(), String::new(), nil));
            }
            Ok(Event::Empty(start)) => {
                let value = if is_nil(&start) {
                    Value::Null
                } else {
                    Value::String(String::new())
                };
                attach(&mut stack, &mut root, element_name(&start), value);
            }
            Ok(Event::Text(text)) => {
                if let Some(top) = stack.last_mut() {
                    top.2.push_str(&text.unescape().map_err(parse_error)?);
                }
            }
            Ok(Event::CData(cdata)) => {
                if let Some(top) = stack.last_mut() {
                    top.2.push_str(&String::from_utf8_lossy(&cdata.into_inner()));
                }
            }
            Ok(Event::End(_)) => {
                let Some((name, children, text, nil)) = stack.pop() else {
                    return Err(ApiError::Parse {
                        detail: "unbalanced closing tag".to_string(),
                    });
                };
                let value = if !children.is_empty() {
                    Value::Object(children)
                } else if nil {
                    Value::Null
                } else {
                    scalar(&text)
                };
                attach(&mut stack, &mut root, name, value);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(parse_error(e)),
        }
    }

    if !stack.is_empty() {
        return Err(ApiError::Parse {
            detail: "unexpected end of document".to_string(),
        });
    }
    if root.is_empty() {
        return Err(ApiError::Parse {
            detail: "empty document".to_string(),
        });
    }

    Ok(Value::Object(root))
}

fn parse_error(error: impl std::fmt::Display) -> ApiError {
    ApiError::Parse {
        detail: error.to_string(),
    }
}

fn element_name(start: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(start.local_name().as_ref()).into_owned()
}

fn is_nil(start: &BytesStart<'_>) -> bool {
    start.attributes().flatten().any(|attr| {
        attr.key.local_name().as_ref() == b"nil" && attr.value.as_ref() == b"true"
    })
}

/// Insert a finished element into its parent (or the root), promoting
/// repeated names to arrays.
fn attach(
    stack: &mut [(String, Map<String, Value>, String, bool)],
    root: &mut Map<String, Value>,
    name: String,
    value: Value,
) {
    let target = stack.last_mut().map_or(root, |parent| &mut parent.1);
    match target.get_mut(&name) {
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            target.insert(name, value);
        }
    }
}

/// Type text content: booleans and plain numbers become typed scalars.
/// Leading-zero digit strings (phone numbers, zip codes) stay strings.
fn scalar(text: &str) -> Value {
    match text {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }

    let digits = text.strip_prefix('-').unwrap_or(text);
    if !digits.is_empty()
        && digits.chars().all(|c| c.is_ascii_digit())
        && (digits.len() == 1 || !digits.starts_with('0'))
        && let Ok(n) = text.parse::<i64>()
    {
        return Value::Number(n.into());
    }

    if text.contains('.')
        && let Ok(f) = text.parse::<f64>()
        && let Some(n) = Number::from_f64(f)
    {
        return Value::Number(n);
    }

    Value::String(text.to_string())
}
