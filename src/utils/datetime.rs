//! 日期解析工具
//!
//! 注册局返回的日期字段是字符串，格式不统一：
//! - RFC3339（带时区偏移）
//! - `yyyy-MM-ddTHH:mm:ss`（WCF 默认，无时区，按 UTC 处理）
//! - `MM/dd/yyyy`（部分列表接口）

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parse a registrar date string to UTC.
///
/// Returns `None` for empty or unrecognized input rather than failing the
/// surrounding operation; the raw string stays available on the record.
#[must_use]
pub fn parse_registrar_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%m/%d/%Y") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }

    None
}
