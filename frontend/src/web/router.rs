//! 路由服务模块 - 核心引擎
//!
//! 封装 web_sys 的 History API，所有对 window.history 的操作都集中在此。
//! 守卫决策本身是 `AppRoute::guard` 的纯函数，这里只负责应用决策：
//! 导航请求、浏览器前进/后退、登录状态变化三条路径共用同一套守卫。

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（用于重定向，不产生可后退的记录）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 路由器服务
///
/// 通过 Signal 驱动界面更新；登录状态以信号注入，与会话模块解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    is_logged_in: Signal<bool>,
}

impl RouterService {
    fn new(is_logged_in: Signal<bool>) -> Self {
        let initial_route = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            is_logged_in,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// **核心方法：导航与守卫**
    pub fn navigate(&self, path: &str) {
        self.apply(AppRoute::from_path(path), true);
    }

    /// 应用守卫后更新 History 与路由信号
    ///
    /// `use_push` 为 true 时使用 pushState，否则 replaceState
    fn apply(&self, target: AppRoute, use_push: bool) {
        let route = match target.guard(self.is_logged_in.get_untracked()) {
            Some(redirect) => {
                web_sys::console::log_1(
                    &format!("[Router] Guard redirect: {} -> {}", target, redirect).into(),
                );
                redirect
            }
            None => target,
        };

        if use_push {
            push_history_state(route.to_path());
        } else {
            replace_history_state(route.to_path());
        }
        self.set_route.set(route);
    }

    /// 浏览器后退/前进按钮监听，popstate 时同样执行守卫
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let is_logged_in = self.is_logged_in;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target = AppRoute::from_path(&current_path());
            match target.guard(is_logged_in.get_untracked()) {
                Some(redirect) => {
                    replace_history_state(redirect.to_path());
                    set_route.set(redirect);
                }
                None => set_route.set(target),
            }
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 登录状态变化时对当前路由重新执行守卫：
    /// 登录成功自动离开登录/注册页，注销自动回到登录页。
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let is_logged_in = self.is_logged_in;

        Effect::new(move |_| {
            let is_auth = is_logged_in.get();
            let route = current_route.get_untracked();

            if let Some(redirect) = route.guard(is_auth) {
                web_sys::console::log_1(
                    &format!("[Router] Auth state changed, redirecting to {}", redirect).into(),
                );
                push_history_state(redirect.to_path());
                set_route.set(redirect);
            }
        });
    }
}

fn provide_router(is_logged_in: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_logged_in);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件，应在 App 根部使用
#[component]
pub fn Router(
    /// 登录状态信号
    is_logged_in: Signal<bool>,
    /// 子组件
    children: Children,
) -> impl IntoView {
    provide_router(is_logged_in);

    children()
}

/// 路由出口组件，根据当前路由渲染对应视图
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}
