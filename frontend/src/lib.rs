//! 金融梦之队 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型，含守卫决策）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth`: 会话状态管理与持久化
//! - `api`: API 网关客户端
//! - `components`: UI 组件层

mod api;
mod auth;
mod components {
    pub mod dashboard;
    pub mod login;
    pub mod news;
    pub mod register;
    pub mod stocks;
}

use crate::auth::{AuthContext, init_auth};
use crate::components::dashboard::DashboardPage;
use crate::components::login::LoginPage;
use crate::components::news::NewsPage;
use crate::components::register::RegisterPage;
use crate::components::stocks::StocksPage;

use leptos::prelude::*;

// 原生 Web API 封装模块
pub(crate) mod web {
    pub mod route;
    pub mod router;
    mod storage;

    pub use storage::LocalStorage;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数：根据 AppRoute 枚举返回对应的视图组件
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Stocks => view! { <StocksPage /> }.into_any(),
        AppRoute::News => view! { <NewsPage /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建会话上下文并从 LocalStorage 同步恢复
    //    （恢复在首次渲染前完成，守卫可直接信任登录标志）
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);
    init_auth(&auth_ctx);

    // 2. 登录状态信号注入路由服务（解耦！）
    let is_logged_in = auth_ctx.is_logged_in_signal();

    view! {
        <Router is_logged_in=is_logged_in>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
