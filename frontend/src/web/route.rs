//! 路由定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖 DOM 或 web_sys。
//! 定义应用的所有路由、路径映射与守卫决策。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 主面板 (默认路由，需要登录)
    #[default]
    Dashboard,
    /// 登录页面 (仅未登录)
    Login,
    /// 注册页面 (仅未登录)
    Register,
    /// 关注列表编辑 (需要登录)
    Stocks,
    /// 新闻浏览 (需要登录)
    News,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举，未知路径回落到主面板
    pub fn from_path(path: &str) -> Self {
        match path {
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/stocks" => Self::Stocks,
            "/news" => Self::News,
            _ => Self::Dashboard,
        }
    }

    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Stocks => "/stocks",
            Self::News => "/news",
        }
    }

    /// 该路由是否需要登录
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Dashboard | Self::Stocks | Self::News)
    }

    /// 该路由是否仅对未登录用户开放
    pub fn guest_only(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    /// **守卫决策**：返回 `Some(target)` 表示应重定向，`None` 表示放行。
    ///
    /// - 需要登录的路由 + 未登录 → 登录页
    /// - 仅访客的路由 + 已登录 → 主面板
    pub fn guard(&self, is_logged_in: bool) -> Option<AppRoute> {
        if self.requires_auth() && !is_logged_in {
            Some(Self::Login)
        } else if self.guest_only() && is_logged_in {
            Some(Self::Dashboard)
        } else {
            None
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests;
