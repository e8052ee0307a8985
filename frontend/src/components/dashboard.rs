use crate::auth::{logout, use_auth};
use crate::web::router::use_router;
use financedream_shared::date::format_date;
use leptos::prelude::*;

/// 主面板：会员信息、关注列表一览、功能入口
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth_ctx = use_auth();
    let router = use_router();

    let user = move || auth_ctx.state.get().session.user;

    let nickname = move || user().map(|u| u.nick_name).unwrap_or_default();
    let avatar_initial = move || {
        nickname()
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "U".to_string())
    };
    let joined = move || {
        user()
            .and_then(|u| u.created_at)
            .map(|d| format!("加入时间：{}", format_date(&d)))
    };
    let stocks = move || user().map(|u| u.stocks).unwrap_or_default();

    let on_logout = move |_| {
        // 跳转由路由服务对注销状态的监听处理
        logout(&auth_ctx);
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-3xl mx-auto space-y-6">
                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1">
                        <a class="btn btn-ghost text-xl">"📰 金融梦之队"</a>
                    </div>
                    <div class="flex-none">
                        <button on:click=on_logout class="btn btn-outline btn-error">
                            "退出登录"
                        </button>
                    </div>
                </div>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body flex-row items-center gap-4">
                        <div class="avatar placeholder">
                            <div class="bg-primary text-primary-content rounded-full w-16">
                                <span class="text-2xl">{avatar_initial}</span>
                            </div>
                        </div>
                        <div>
                            <h2 class="card-title">{nickname}</h2>
                            <p class="text-base-content/70">
                                {move || user().map(|u| u.email).unwrap_or_default()}
                            </p>
                            <Show when=move || joined().is_some()>
                                <p class="text-sm text-base-content/50">
                                    {move || joined().unwrap_or_default()}
                                </p>
                            </Show>
                        </div>
                    </div>
                </div>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <h3 class="card-title">"📈 我的关注列表"</h3>
                        <div class="flex flex-wrap gap-2">
                            <Show
                                when=move || !stocks().is_empty()
                                fallback=|| view! {
                                    <p class="text-base-content/50">"暂无关注的股票。"</p>
                                }
                            >
                                <For
                                    each=move || stocks()
                                    key=|stock| stock.clone()
                                    children=move |stock| {
                                        view! { <span class="badge badge-primary badge-outline">{stock}</span> }
                                    }
                                />
                            </Show>
                        </div>
                    </div>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <button
                        class="btn btn-lg btn-outline h-24"
                        on:click=move |_| router.navigate("/stocks")
                    >
                        "⚙️ 编辑关注列表"
                    </button>
                    <button
                        class="btn btn-lg btn-primary h-24"
                        on:click=move |_| router.navigate("/news")
                    >
                        "📰 查看新闻"
                    </button>
                </div>
            </div>
        </div>
    }
}
