use crate::auth::{update_stocks, use_auth};
use crate::web::router::use_router;
use financedream_shared::{AddOutcome, add_ticker, remove_ticker};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 关注列表编辑页。
///
/// 在本地工作副本上增删，保存成功后才写回会话并返回主面板；
/// 保存失败时会话保持不变。
#[component]
pub fn StocksPage() -> impl IntoView {
    let auth_ctx = use_auth();
    let router = use_router();

    // 工作副本：以会话当前的关注列表为起点
    let initial = auth_ctx
        .state
        .get_untracked()
        .session
        .user
        .map(|u| u.stocks)
        .unwrap_or_default();
    let (stocks, set_stocks) = signal(initial);
    let (stock_input, set_stock_input) = signal(String::new());
    let (is_saving, set_is_saving) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (success_msg, set_success_msg) = signal(Option::<String>::None);

    let add_stock = move || {
        let input = stock_input.get_untracked();
        set_stocks.update(|list| match add_ticker(list, &input) {
            AddOutcome::Added => {
                set_stock_input.set(String::new());
                set_error_msg.set(None);
            }
            AddOutcome::Duplicate => {
                set_error_msg.set(Some("该股票已在关注列表中".to_string()));
            }
            AddOutcome::Empty => {}
        });
    };

    let on_key_down = move |ev: leptos::web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            add_stock();
        }
    };

    let on_save = move |_| {
        set_is_saving.set(true);
        set_error_msg.set(None);
        set_success_msg.set(None);

        let list = stocks.get_untracked();
        spawn_local(async move {
            let api = auth_ctx.state.get_untracked().api;
            match api.update_member(list.clone()).await {
                Ok(()) => {
                    // 仅在服务端成功后才写回会话
                    update_stocks(&auth_ctx, list);
                    set_success_msg.set(Some("关注列表已保存！".to_string()));
                    set_timeout(
                        move || router.navigate("/"),
                        std::time::Duration::from_secs(1),
                    );
                }
                Err(msg) => set_error_msg.set(Some(msg)),
            }
            set_is_saving.set(false);
        });
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-2xl mx-auto space-y-6">
                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1 gap-2">
                        <button class="btn btn-ghost" on:click=move |_| router.navigate("/")>
                            "← 返回"
                        </button>
                        <span class="text-xl font-bold">"编辑关注列表"</span>
                    </div>
                </div>

                <Show when=move || error_msg.get().is_some()>
                    <div role="alert" class="alert alert-error">
                        <span>{move || error_msg.get().unwrap_or_default()}</span>
                    </div>
                </Show>
                <Show when=move || success_msg.get().is_some()>
                    <div role="alert" class="alert alert-success">
                        <span>{move || success_msg.get().unwrap_or_default()}</span>
                    </div>
                </Show>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <label class="label" for="stock_input">
                            <span class="label-text">"添加新股票"</span>
                        </label>
                        <div class="join">
                            <input
                                id="stock_input"
                                type="text"
                                placeholder="输入股票名后回车"
                                on:input=move |ev| set_stock_input.set(event_target_value(&ev))
                                on:keydown=on_key_down
                                prop:value=stock_input
                                class="input input-bordered join-item w-full"
                            />
                            <button class="btn btn-primary join-item" on:click=move |_| add_stock()>
                                "添加"
                            </button>
                        </div>
                    </div>
                </div>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <h3 class="card-title">
                            "当前关注 (" {move || stocks.get().len()} " 只)"
                        </h3>
                        <Show
                            when=move || !stocks.get().is_empty()
                            fallback=|| view! {
                                <p class="text-base-content/50">"暂无关注的股票。"</p>
                            }
                        >
                            <ul class="divide-y divide-base-200">
                                <For
                                    each=move || stocks.get()
                                    key=|stock| stock.clone()
                                    children=move |stock| {
                                        let name = stock.clone();
                                        view! {
                                            <li class="flex items-center justify-between py-2">
                                                <span>{stock}</span>
                                                <button
                                                    class="btn btn-ghost btn-sm text-error"
                                                    on:click=move |_| {
                                                        set_stocks.update(|list| remove_ticker(list, &name));
                                                    }
                                                >
                                                    "删除"
                                                </button>
                                            </li>
                                        }
                                    }
                                />
                            </ul>
                        </Show>
                    </div>
                </div>

                <button
                    class="btn btn-primary w-full"
                    disabled=move || is_saving.get()
                    on:click=on_save
                >
                    {move || if is_saving.get() {
                        view! { <span class="loading loading-spinner"></span> "保存中..." }.into_any()
                    } else {
                        "保存变更".into_any()
                    }}
                </button>
            </div>
        </div>
    }
}
