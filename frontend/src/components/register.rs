use crate::auth::use_auth;
use crate::web::router::use_router;
use financedream_shared::{AddOutcome, RegisterRequest, add_ticker, remove_ticker};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 注册页：基本信息 + 初始关注列表编辑。
/// 密码校验在客户端完成，不通过的提交不发起网络请求。
#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth_ctx = use_auth();
    let router = use_router();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (password_confirm, set_password_confirm) = signal(String::new());
    let (nickname, set_nickname) = signal(String::new());
    let (stocks, set_stocks) = signal(Vec::<String>::new());
    let (stock_input, set_stock_input) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (success_msg, set_success_msg) = signal(Option::<String>::None);

    // 注册页的重复添加静默忽略（与股票编辑页不同，不提示）
    let add_stock = move || {
        let input = stock_input.get_untracked();
        set_stocks.update(|list| {
            if add_ticker(list, &input) == AddOutcome::Added {
                set_stock_input.set(String::new());
            }
        });
    };

    let on_key_down = move |ev: leptos::web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            add_stock();
        }
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);

        if password.get() != password_confirm.get() {
            set_error_msg.set(Some("两次输入的密码不一致".to_string()));
            return;
        }
        if password.get().len() < 4 {
            set_error_msg.set(Some("密码长度至少为 4 位".to_string()));
            return;
        }

        set_is_submitting.set(true);

        let req = RegisterRequest {
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: password_confirm.get_untracked(),
            nick_name: nickname.get_untracked(),
            stocks: stocks.get_untracked(),
        };

        spawn_local(async move {
            let api = auth_ctx.state.get_untracked().api;
            match api.register(&req).await {
                Ok(()) => {
                    set_success_msg.set(Some("注册成功！即将跳转到登录页".to_string()));
                    set_timeout(
                        move || router.navigate("/login"),
                        std::time::Duration::from_secs(1),
                    );
                }
                Err(msg) => set_error_msg.set(Some(msg)),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"注册"</h1>
                    <p class="text-base-content/70">"加入金融梦之队新闻服务"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>
                        <Show when=move || success_msg.get().is_some()>
                            <div role="alert" class="alert alert-success text-sm py-2">
                                <span>{move || success_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"邮箱"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="example@email.com"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"密码"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="至少 4 位"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password_confirm">
                                <span class="label-text">"确认密码"</span>
                            </label>
                            <input
                                id="password_confirm"
                                type="password"
                                placeholder="再次输入密码"
                                on:input=move |ev| set_password_confirm.set(event_target_value(&ev))
                                prop:value=password_confirm
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="nickname">
                                <span class="label-text">"昵称"</span>
                            </label>
                            <input
                                id="nickname"
                                type="text"
                                placeholder="昵称"
                                on:input=move |ev| set_nickname.set(event_target_value(&ev))
                                prop:value=nickname
                                class="input input-bordered"
                                required
                            />
                        </div>

                        <div class="form-control">
                            <label class="label" for="stock_input">
                                <span class="label-text">"关注股票"</span>
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
                                <button
                                    type="button"
                                    class="btn join-item"
                                    on:click=move |_| add_stock()
                                >
                                    "添加"
                                </button>
                            </div>
                            <div class="flex flex-wrap gap-2 mt-2">
                                <For
                                    each=move || stocks.get()
                                    key=|stock| stock.clone()
                                    children=move |stock| {
                                        let name = stock.clone();
                                        view! {
                                            <span class="badge badge-outline gap-1">
                                                {stock}
                                                <button
                                                    type="button"
                                                    class="text-error"
                                                    on:click=move |_| {
                                                        set_stocks.update(|list| remove_ticker(list, &name));
                                                    }
                                                >
                                                    "×"
                                                </button>
                                            </span>
                                        }
                                    }
                                />
                            </div>
                        </div>

                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "注册中..." }.into_any()
                                } else {
                                    "注册".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>

                <p class="text-sm text-base-content/70">
                    "已有账号？"
                    <a class="link link-primary ml-1" on:click=move |_| router.navigate("/login")>
                        "登录"
                    </a>
                </p>
            </div>
        </div>
    }
}
