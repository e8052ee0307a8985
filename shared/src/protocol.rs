//! 线上协议类型模块
//!
//! 与 API 网关交换的请求/响应体。命名风格刻意与服务端保持一致：
//! 新闻事件接口使用 camelCase，相似新闻接口（由另一套检索服务提供）
//! 使用 snake_case，反序列化时原样对应，不在视图层做字段名兜底。

use serde::{Deserialize, Deserializer, Serialize};

// =========================================================
// 会员与认证 (Auth / Member)
// =========================================================

/// 会员完整信息
///
/// 服务端对昵称字段的大小写不统一（`nickName` / `nickname`），
/// 通过 serde alias 在反序列化边界归一化。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub email: String,
    #[serde(alias = "nickname", default)]
    pub nick_name: String,
    #[serde(default)]
    pub stocks: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub nick_name: String,
    pub stocks: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateMemberRequest {
    pub stocks: Vec<String>,
}

/// `GET /api/members/me` 的响应信封
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MyInfoResponse {
    pub data: UserInfo,
}

/// 4xx/5xx 响应体。字段全部可缺省：错误体可能为空或不是 JSON。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

// =========================================================
// 新闻查询 (News Events)
// =========================================================

/// `POST /api/events/news-with-past-data` 的请求体，股票列表恒为单元素
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsQueryRequest {
    pub stocks: Vec<String>,
}

/// 新闻查询的复合响应：当前新闻事件 + 按下标对齐的历史相似新闻组
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsWithPastData {
    #[serde(default)]
    pub news: NewsEnvelope,
    #[serde(default)]
    pub similar_news: Vec<SimilarNewsGroup>,
}

impl NewsWithPastData {
    /// 展平嵌套信封，视图层不再链式解包
    pub fn results(&self) -> &[NewsEvent] {
        &self.news.events.results
    }

    pub fn total_results(&self) -> u64 {
        self.news.events.total_results
    }

    /// 第 `i` 条新闻对应的相似新闻组（按下标对齐，可能缺失）
    pub fn similar_group(&self, i: usize) -> Option<&SimilarNewsGroup> {
        self.similar_news.get(i)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsEnvelope {
    #[serde(default)]
    pub events: EventsPage,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsPage {
    #[serde(default)]
    pub results: Vec<NewsEvent>,
    #[serde(default)]
    pub total_results: u64,
}

/// 单条新闻事件，情感值为 [-1, 1] 左右的有符号浮点数
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsEvent {
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub title: LocalizedText,
    #[serde(default)]
    pub summary: LocalizedText,
    #[serde(default)]
    pub event_date: String,
    #[serde(default)]
    pub sentiment: f64,
    #[serde(default)]
    pub total_article_count: u64,
}

/// 多语言文本，展示时优先英文
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(default)]
    pub eng: String,
    #[serde(default)]
    pub kor: Option<String>,
}

impl LocalizedText {
    pub fn display(&self) -> &str {
        if self.eng.is_empty() {
            self.kor.as_deref().unwrap_or("")
        } else {
            &self.eng
        }
    }
}

// =========================================================
// 历史相似新闻 (Similar News)
// =========================================================

/// 一条当前新闻对应的相似新闻组。
///
/// `items` 与 `top_price_window` 之间同样按下标对齐，
/// 价格窗口数量可能少于条目数量。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimilarNewsGroup {
    #[serde(default)]
    pub items: Vec<SimilarNewsItem>,
    #[serde(default)]
    pub top_price_window: Vec<PriceWindow>,
}

impl SimilarNewsGroup {
    pub fn has_items(&self) -> bool {
        !self.items.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimilarNewsItem {
    /// 检索服务对 id 的类型不稳定（字符串或数字），统一归一化为字符串
    #[serde(default, deserialize_with = "de_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub event_date: String,
    #[serde(default)]
    pub distance: f64,
}

/// 历史事件时间窗内的 OHLCV 行情快照
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceWindow {
    #[serde(default)]
    pub open: f64,
    #[serde(default)]
    pub high: f64,
    #[serde(default)]
    pub low: f64,
    #[serde(default)]
    pub close: f64,
    #[serde(default)]
    pub volume: f64,
}

fn de_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(Option::<RawId>::deserialize(deserializer)?.map(|raw| match raw {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
        RawId::Float(f) => f.to_string(),
    }))
}

#[cfg(test)]
mod tests;
