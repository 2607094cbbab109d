//! 原始响应值的容错访问工具
//!
//! SOAP 栈把 XML 映射成动态对象：重复元素有时是数组有时塌缩成单个值，
//! 字符串列表包一层 `{"string": ...}`，缺失字段直接不存在。这里集中处理
//! 这些形状问题，解析器只面对统一的序列/标量。

use std::collections::HashMap;

use serde_json::Value;

/// Coerce an array-or-scalar value into a sequence.
///
/// The single normalization point for the SOAP stack's cardinality collapse:
/// a missing or null value becomes an empty sequence, an array stays as-is
/// (in order), and any other value becomes a one-element sequence.
pub(crate) fn coerce_sequence(value: Option<&Value>) -> Vec<Value> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.clone(),
        Some(other) => vec![other.clone()],
    }
}

/// Unwrap the `{"string": ...}` element the SOAP stack puts around string
/// lists, then coerce to a sequence of strings.
pub(crate) fn string_sequence(value: Option<&Value>) -> Vec<String> {
    let inner = match value {
        Some(Value::Object(map)) => map.get("string"),
        other => other,
    };
    coerce_sequence(inner).iter().map(|v| text(Some(v))).collect()
}

/// String rendering of a scalar: strings pass through, numbers are formatted,
/// everything else (including absent) becomes the empty string.
pub(crate) fn text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Tri-state flag token: a real boolean renders as `"true"`/`"false"`, an
/// absent or non-boolean value renders as `""`. Absence must never read as
/// `"false"`.
pub(crate) fn flag_token(value: Option<&Value>) -> String {
    match value {
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Numeric value from a number or numeric string, `0.0` otherwise.
pub(crate) fn f64_value(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Unsigned integer from a number or numeric string, `0` otherwise.
pub(crate) fn u32_value(value: Option<&Value>) -> u32 {
    match value {
        Some(Value::Number(n)) => u32::try_from(n.as_u64().unwrap_or(0)).unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

/// Boolean from a boolean, a `"true"`/`"false"` string, or a number.
pub(crate) fn bool_value(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s.trim().eq_ignore_ascii_case("true"),
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0) != 0.0,
        _ => false,
    }
}

/// Flatten a `KeyValueOfstringstring` pair list into a map, skipping entries
/// with a missing key or value.
pub(crate) fn attribute_map(value: Option<&Value>) -> HashMap<String, String> {
    let pairs = match value {
        Some(Value::Object(map)) => coerce_sequence(map.get("KeyValueOfstringstring")),
        _ => Vec::new(),
    };

    let mut attributes = HashMap::new();
    for pair in pairs {
        let key = text(pair.get("Key"));
        let val = text(pair.get("Value"));
        if !key.is_empty() && !val.is_empty() {
            attributes.insert(key, val);
        }
    }
    attributes
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coerce_missing_is_empty() {
        assert!(coerce_sequence(None).is_empty());
        assert!(coerce_sequence(Some(&Value::Null)).is_empty());
    }

    #[test]
    fn coerce_array_preserves_order() {
        let v = json!(["a", "b", "c"]);
        let seq = coerce_sequence(Some(&v));
        assert_eq!(seq, vec![json!("a"), json!("b"), json!("c")]);
    }

    #[test]
    fn coerce_scalar_wraps() {
        let v = json!("ns1.example.com");
        assert_eq!(coerce_sequence(Some(&v)), vec![json!("ns1.example.com")]);
    }

    #[test]
    fn coerce_object_wraps() {
        let v = json!({"Id": 1});
        assert_eq!(coerce_sequence(Some(&v)).len(), 1);
    }

    #[test]
    fn string_sequence_unwraps_wrapper() {
        let v = json!({"string": ["ns1.example.com", "ns2.example.com"]});
        assert_eq!(
            string_sequence(Some(&v)),
            vec!["ns1.example.com", "ns2.example.com"]
        );
    }

    #[test]
    fn string_sequence_wrapper_with_scalar() {
        let v = json!({"string": "ns1.example.com"});
        assert_eq!(string_sequence(Some(&v)), vec!["ns1.example.com"]);
    }

    #[test]
    fn string_sequence_bare_values() {
        let v = json!("ns1.example.com");
        assert_eq!(string_sequence(Some(&v)), vec!["ns1.example.com"]);

        let v = json!(["a", "b"]);
        assert_eq!(string_sequence(Some(&v)), vec!["a", "b"]);
    }

    #[test]
    fn text_renders_numbers() {
        assert_eq!(text(Some(&json!(42))), "42");
        assert_eq!(text(Some(&json!("x"))), "x");
        assert_eq!(text(None), "");
        assert_eq!(text(Some(&json!(true))), "");
    }

    #[test]
    fn flag_token_true_false_absent() {
        assert_eq!(flag_token(Some(&json!(true))), "true");
        assert_eq!(flag_token(Some(&json!(false))), "false");
        assert_eq!(flag_token(None), "");
        // 字符串不算布尔，保持空
        assert_eq!(flag_token(Some(&json!("true"))), "");
    }

    #[test]
    fn numeric_accessors_tolerate_strings() {
        assert_eq!(f64_value(Some(&json!("12.99"))), 12.99);
        assert_eq!(f64_value(Some(&json!(8))), 8.0);
        assert_eq!(f64_value(None), 0.0);
        assert_eq!(u32_value(Some(&json!("3"))), 3);
        assert_eq!(u32_value(Some(&json!(7))), 7);
        assert_eq!(u32_value(Some(&json!("x"))), 0);
    }

    #[test]
    fn bool_value_tolerates_strings_and_numbers() {
        assert!(bool_value(Some(&json!(true))));
        assert!(bool_value(Some(&json!("True"))));
        assert!(bool_value(Some(&json!(1))));
        assert!(!bool_value(Some(&json!("no"))));
        assert!(!bool_value(None));
    }

    #[test]
    fn attribute_map_from_pair_list() {
        let v = json!({
            "KeyValueOfstringstring": [
                {"Key": "IDNLANG", "Value": "tr"},
                {"Key": "", "Value": "dropped"},
                {"Key": "dropped", "Value": ""}
            ]
        });
        let map = attribute_map(Some(&v));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("IDNLANG").map(String::as_str), Some("tr"));
    }

    #[test]
    fn attribute_map_single_pair_collapsed() {
        let v = json!({
            "KeyValueOfstringstring": {"Key": "IDNLANG", "Value": "tr"}
        });
        let map = attribute_map(Some(&v));
        assert_eq!(map.get("IDNLANG").map(String::as_str), Some("tr"));
    }

    #[test]
    fn attribute_map_absent_is_empty() {
        assert!(attribute_map(None).is_empty());
        assert!(attribute_map(Some(&json!("x"))).is_empty());
    }
}
