//! 金融梦之队 共享数据模块
//!
//! 定义前端与 API 网关之间的线上协议类型，以及不依赖浏览器环境的
//! 纯逻辑（新闻展示计算、关注列表编辑规则、日期格式化）。
//! 本 crate 可在原生目标上编译并运行单元测试。

pub mod date;
pub mod news;
pub mod protocol;
pub mod watchlist;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 登录响应中携带 Bearer 令牌的响应头名称
pub const HEADER_AUTHORIZATION: &str = "authorization";

pub use news::{PriceChange, SentimentLabel, resolve_price_window, similarity_percent};
pub use protocol::{
    ApiMessage, LocalizedText, LoginRequest, MyInfoResponse, NewsEvent, NewsQueryRequest,
    NewsWithPastData, PriceWindow, RegisterRequest, SimilarNewsGroup, SimilarNewsItem,
    UpdateMemberRequest, UserInfo,
};
pub use watchlist::{AddOutcome, add_ticker, remove_ticker};
