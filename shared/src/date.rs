//! 日期格式化模块
//!
//! 服务端的日期字段为 ISO-8601 字符串（带或不带时间部分），
//! 这里解析后渲染为本地化的 "YYYY年M月D日"，解析失败时原样返回。

use chrono::{DateTime, Datelike, NaiveDate};

/// 将 ISO-8601 日期字符串格式化为 "YYYY年M月D日"
pub fn format_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(d) => format!("{}年{}月{}日", d.year(), d.month(), d.day()),
        None => raw.to_string(),
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    // 无时区的 "2024-03-15T09:30:00" 与纯日期 "2024-03-15"
    let date_part = raw.split('T').next().unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_rfc3339_and_plain_dates() {
        assert_eq!(format_date("2024-03-15T09:30:00Z"), "2024年3月15日");
        assert_eq!(format_date("2024-03-15T09:30:00"), "2024年3月15日");
        assert_eq!(format_date("2024-03-05"), "2024年3月5日");
    }

    #[test]
    fn unparsable_input_passes_through() {
        assert_eq!(format_date("어제"), "어제");
        assert_eq!(format_date(""), "");
    }
}
