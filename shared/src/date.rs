//! 时间类型模块
//!
//! - `Timestamp`: 可序列化的毫秒时间戳，用于标记一次搜索请求
//! - `format_expiry`: 将后端返回的 OTP 过期时间渲染为本地时间字符串

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// =========================================================
// Timestamp - 可传输的时间戳类型
// =========================================================

/// 毫秒时间戳
///
/// 内部存储为 `i64`，表示自 Unix 纪元以来的毫秒数
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// 当前时间 (wasm 下由 chrono 的 wasmbind 读取 `Date.now()`)
    pub fn now() -> Self {
        Self(Utc::now().timestamp_millis())
    }
}

impl From<i64> for Timestamp {
    fn from(ms: i64) -> Self {
        Self(ms)
    }
}

impl From<Timestamp> for i64 {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

// =========================================================
// 过期时间格式化
// =========================================================

/// 以浏览器本地时区渲染过期时间
pub fn format_expiry(raw: Option<&str>) -> String {
    format_expiry_in(raw, &Local)
}

/// 以指定时区渲染过期时间
///
/// - RFC 3339 字符串按其自带偏移换算
/// - 不带时区的 ISO 字符串视为 UTC
/// - 无法解析时原样返回，缺失时返回 `N/A`
pub fn format_expiry_in<Tz>(raw: Option<&str>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return "N/A".to_string();
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(tz).format(DISPLAY_FORMAT).to_string();
    }

    if let Ok(naive) = raw.parse::<NaiveDateTime>() {
        return Utc
            .from_utc_datetime(&naive)
            .with_timezone(tz)
            .format(DISPLAY_FORMAT)
            .to_string();
    }

    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_missing_is_na() {
        assert_eq!(format_expiry_in(None, &Utc), "N/A");
        assert_eq!(format_expiry_in(Some("  "), &Utc), "N/A");
    }

    #[test]
    fn test_expiry_rfc3339_converted() {
        let out = format_expiry_in(Some("2025-03-01T10:15:00+02:00"), &Utc);
        assert_eq!(out, "2025-03-01 08:15:00");
    }

    #[test]
    fn test_expiry_naive_treated_as_utc() {
        let out = format_expiry_in(Some("2025-03-01T10:15:30.123456"), &Utc);
        assert_eq!(out, "2025-03-01 10:15:30");
    }

    #[test]
    fn test_expiry_unparseable_kept() {
        assert_eq!(format_expiry_in(Some("tomorrow"), &Utc), "tomorrow");
    }

    #[test]
    fn test_timestamp_roundtrip_millis() {
        let ts = Timestamp::from(1_700_000_000_123);
        assert_eq!(i64::from(ts), 1_700_000_000_123);
        assert!(Timestamp::now() > ts);
    }
}
