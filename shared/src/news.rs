//! 新闻展示计算模块
//!
//! 将复合查询结果转换为可直接渲染的展示数据：情感分档、价格涨跌、
//! 相似度百分比，以及相似新闻与价格窗口之间的下标回退规则。
//! 全部为纯函数，逐一对应线上产品的可观察行为。

use crate::protocol::PriceWindow;

// =========================================================
// 情感分档 (Sentiment)
// =========================================================

/// 情感标签，由有符号情感值按固定阈值分档
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// 分档规则：`> 0.2` 利好，`< -0.2` 利空，其余（含两个边界值）中性
    pub fn from_score(sentiment: f64) -> Self {
        if sentiment > 0.2 {
            Self::Positive
        } else if sentiment < -0.2 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Self::Positive => "利好",
            Self::Negative => "利空",
            Self::Neutral => "中性",
        }
    }

    /// 对应的样式类名
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Positive => "badge-success",
            Self::Negative => "badge-error",
            Self::Neutral => "badge-neutral",
        }
    }
}

// =========================================================
// 价格涨跌 (Price Change)
// =========================================================

/// 由单个价格窗口推导出的涨跌信息
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceChange {
    /// 收盘价 − 开盘价
    pub change: f64,
    /// 涨跌百分比，保留两位小数
    pub change_percent: f64,
    pub is_positive: bool,
}

impl PriceChange {
    /// 不对 `open == 0` 做保护，除零得到的 inf/NaN 原样透传
    pub fn from_window(window: &PriceWindow) -> Self {
        let change = window.close - window.open;
        Self {
            change,
            change_percent: round2(change / window.open * 100.0),
            is_positive: change >= 0.0,
        }
    }
}

/// 相似新闻条目 `j` 的价格窗口解析：
/// 下标越界时回退到第 0 个窗口，窗口列表为空则返回 `None`。
pub fn resolve_price_window(windows: &[PriceWindow], idx: usize) -> Option<&PriceWindow> {
    windows.get(idx).or_else(|| windows.first())
}

// =========================================================
// 相似度展示 (Similarity)
// =========================================================

/// 相似度百分比 = `100 − distance × 10`，保留一位小数。
///
/// distance 超出 [0, 10] 时会产生负值或大于 100 的值，
/// 线上行为即如此，不做截断。
pub fn similarity_percent(distance: f64) -> f64 {
    round1(100.0 - distance * 10.0)
}

// =========================================================
// 数值格式化 (Formatting)
// =========================================================

/// 千分位格式化金额，小数部分最多保留两位并去除尾随零
pub fn format_amount(value: f64) -> String {
    let rounded = (value.abs() * 100.0).round() / 100.0;
    let int_part = rounded.trunc() as u64;
    let cents = ((rounded - rounded.trunc()) * 100.0).round() as u64;

    let digits = int_part.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    match cents {
        0 => format!("{}{}", sign, grouped),
        c if c % 10 == 0 => format!("{}{}.{}", sign, grouped, c / 10),
        c => format!("{}{}.{:02}", sign, grouped, c),
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests;
