//! API 网关客户端
//!
//! 单一配置的 HTTP 客户端：固定基地址 + 可变的 Bearer 令牌。
//! 令牌的设置/清除对后续所有请求生效（客户端实例由会话层持有）。
//! 无重试、无缓存、无超时策略，失败以用户可读的消息字符串返回。

use financedream_shared::{
    ApiMessage, HEADER_AUTHORIZATION, LoginRequest, MyInfoResponse, NewsQueryRequest,
    NewsWithPastData, RegisterRequest, UpdateMemberRequest, UserInfo,
};
use gloo_net::http::{Request, RequestBuilder, Response};

/// API 网关的固定基地址
pub const API_BASE_URL: &str = "https://api.financedream.store";

#[derive(Clone, Debug, PartialEq)]
pub struct FinanceDreamApi {
    base_url: String,
    token: Option<String>,
}

impl Default for FinanceDreamApi {
    fn default() -> Self {
        Self::new()
    }
}

impl FinanceDreamApi {
    pub fn new() -> Self {
        Self {
            base_url: API_BASE_URL.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// 恢复/设置 Bearer 令牌（登录成功或启动时从本地存储恢复）
    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    /// 清除令牌，之后的请求不再携带认证头
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// 非 2xx 响应：优先透出服务端的 message 字段，否则用兜底文案
    async fn error_message(res: Response, fallback: &str) -> String {
        match res.json::<ApiMessage>().await {
            Ok(ApiMessage {
                message: Some(message),
            }) => message,
            _ => fallback.to_string(),
        }
    }

    /// 注册新会员
    pub async fn register(&self, req: &RegisterRequest) -> Result<(), String> {
        let res = self
            .authorized(Request::post(
                &self.url("/api/auth/register"),
            ))
            .json(req)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(Self::error_message(res, "注册失败，请稍后重试").await);
        }
        Ok(())
    }

    /// 登录。成功时从 `authorization` 响应头（而非响应体）提取令牌
    /// 并保存为后续请求的默认凭据。
    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), String> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let res = Request::post(&self.url("/api/auth/login"))
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(Self::error_message(res, "登录失败，请检查邮箱和密码").await);
        }

        // 响应头缺失令牌时不单独报错：后续认证请求会以服务端消息失败
        if let Some(token) = res.headers().get(HEADER_AUTHORIZATION) {
            if !token.is_empty() {
                self.token = Some(token);
            }
        }
        Ok(())
    }

    /// 当前令牌（用于登录成功后持久化）
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// 替换当前会员的关注列表，需要有效的 Bearer 凭据
    pub async fn update_member(&self, stocks: Vec<String>) -> Result<(), String> {
        let body = UpdateMemberRequest { stocks };
        let res = self
            .authorized(Request::put(&self.url("/api/auth")))
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(Self::error_message(res, "保存失败，请稍后重试").await);
        }
        Ok(())
    }

    /// 拉取当前会员的完整信息
    pub async fn get_my_info(&self) -> Result<UserInfo, String> {
        let res = self
            .authorized(Request::get(&self.url("/api/members/me")))
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(Self::error_message(res, "获取用户信息失败").await);
        }

        res.json::<MyInfoResponse>()
            .await
            .map(|r| r.data)
            .map_err(|e| e.to_string())
    }

    /// 查询单只股票的新闻及按下标对齐的历史相似新闻（含价格窗口）
    pub async fn fetch_news_with_history(&self, ticker: &str) -> Result<NewsWithPastData, String> {
        let body = NewsQueryRequest {
            stocks: vec![ticker.to_string()],
        };
        let res = self
            .authorized(Request::post(
                &self.url("/api/events/news-with-past-data"),
            ))
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(Self::error_message(res, "新闻加载失败，请稍后重试").await);
        }

        res.json::<NewsWithPastData>()
            .await
            .map_err(|e| e.to_string())
    }
}
