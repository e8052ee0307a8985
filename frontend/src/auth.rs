//! 会话模块
//!
//! 持有当前会员与登录标志，是整个应用唯一的共享可变状态。
//! 通过 Context 注入各视图；路由服务只拿到一个登录状态信号，
//! 与本模块解耦。每次变更同步写回 LocalStorage，启动时恢复。

use crate::api::FinanceDreamApi;
use crate::web::LocalStorage;
use financedream_shared::UserInfo;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// 会话快照的存储键（与线上产品一致，不做版本迁移）
const STORAGE_SESSION_KEY: &str = "auth-storage";
/// Bearer 令牌的存储键
const STORAGE_TOKEN_KEY: &str = "token";

// =========================================================
// 会话状态 (Session)
// =========================================================

/// 会话数据。不变量：`is_logged_in` 为真当且仅当 `user` 存在，
/// 由三个变更方法保证。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: Option<UserInfo>,
    #[serde(rename = "isLoggedIn", default)]
    pub is_logged_in: bool,
}

impl Session {
    /// 整体替换会员并置登录标志
    pub fn set_user(&mut self, user: UserInfo) {
        self.user = Some(user);
        self.is_logged_in = true;
    }

    /// 仅替换关注列表；无会员时为空操作
    pub fn update_stocks(&mut self, stocks: Vec<String>) {
        if let Some(user) = self.user.as_mut() {
            user.stocks = stocks;
        }
    }

    /// 清空会员与登录标志
    pub fn clear(&mut self) {
        self.user = None;
        self.is_logged_in = false;
    }
}

/// 认证状态：会话 + 持有令牌的 API 客户端
#[derive(Clone, Default)]
pub struct AuthState {
    pub api: FinanceDreamApi,
    pub session: Session,
}

/// 认证上下文，通过 Context 在组件间共享
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: ReadSignal<AuthState>,
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState::default());
        Self { state, set_state }
    }

    /// 登录状态信号（注入路由服务，保持解耦）
    pub fn is_logged_in_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().session.is_logged_in)
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

// =========================================================
// 会话操作 (Operations)
// =========================================================

/// 启动时从 LocalStorage 恢复会话与令牌。
/// 快照缺失、损坏或不变量不成立时回落到默认（未登录）。
pub fn init_auth(ctx: &AuthContext) {
    let session = LocalStorage::get_json::<Session>(STORAGE_SESSION_KEY)
        .filter(|s| s.is_logged_in == s.user.is_some())
        .unwrap_or_default();

    let mut api = FinanceDreamApi::new();
    if let Some(token) = LocalStorage::get(STORAGE_TOKEN_KEY) {
        api.set_token(token);
    }

    ctx.set_state.set(AuthState { api, session });
}

/// 登录：先换取令牌，再拉取完整会员信息（含关注列表）写入会话。
/// 成功后路由服务会监听到登录状态变化并自动跳转。
pub async fn login(ctx: &AuthContext, email: String, password: String) -> Result<(), String> {
    let mut api = ctx.state.get_untracked().api;
    api.login(&email, &password).await?;

    // 令牌在登录成功的瞬间即成为全局默认凭据并落盘，
    // 即使随后的会员信息拉取失败也保持不变
    if let Some(token) = api.token() {
        LocalStorage::set(STORAGE_TOKEN_KEY, token);
    }
    ctx.set_state.update(|state| state.api = api.clone());

    let user = api.get_my_info().await?;
    ctx.set_state.update(|state| {
        state.session.set_user(user);
        persist_session(&state.session);
    });
    Ok(())
}

/// 保存成功后由股票编辑页调用，使会话与服务端一致
pub fn update_stocks(ctx: &AuthContext, stocks: Vec<String>) {
    ctx.set_state.update(|state| {
        state.session.update_stocks(stocks);
        persist_session(&state.session);
    });
}

/// 注销：清空会话与令牌。跳转由路由服务的状态监听处理。
pub fn logout(ctx: &AuthContext) {
    LocalStorage::delete(STORAGE_TOKEN_KEY);
    ctx.set_state.update(|state| {
        state.api.clear_token();
        state.session.clear();
        persist_session(&state.session);
    });
}

fn persist_session(session: &Session) {
    LocalStorage::set_json(STORAGE_SESSION_KEY, session);
}

#[cfg(test)]
mod tests;
