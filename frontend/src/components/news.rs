use crate::auth::use_auth;
use crate::web::router::use_router;
use financedream_shared::date::format_date;
use financedream_shared::news::format_amount;
use financedream_shared::{
    NewsEvent, NewsWithPastData, PriceChange, SentimentLabel, SimilarNewsGroup,
    resolve_price_window, similarity_percent,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 新闻视图的状态机：每次选择股票都重新进入 Loading
#[derive(Clone, PartialEq)]
enum NewsState {
    Idle,
    Loading,
    Results(NewsWithPastData),
    Empty,
    Error(String),
}

/// 新闻浏览页。
///
/// 选中股票后查询该股票的新闻事件；每条新闻按下标对应一个
/// 历史相似新闻组，展开面板在各条新闻之间互斥。
#[component]
pub fn NewsPage() -> impl IntoView {
    let auth_ctx = use_auth();
    let router = use_router();

    let (selected, set_selected) = signal(Option::<String>::None);
    let (state, set_state) = signal(NewsState::Idle);
    let (expanded, set_expanded) = signal(Option::<usize>::None);

    let user_stocks = move || {
        auth_ctx
            .state
            .get()
            .session
            .user
            .map(|u| u.stocks)
            .unwrap_or_default()
    };

    let fetch_news = move |ticker: String| {
        set_selected.set(Some(ticker.clone()));
        set_state.set(NewsState::Loading);
        set_expanded.set(None);

        spawn_local(async move {
            let api = auth_ctx.state.get_untracked().api;
            // 不做请求代际保护：晚到的旧响应允许覆盖新状态
            match api.fetch_news_with_history(&ticker).await {
                Ok(data) if data.results().is_empty() => set_state.set(NewsState::Empty),
                Ok(data) => set_state.set(NewsState::Results(data)),
                Err(msg) => {
                    web_sys::console::error_1(&format!("[News] fetch failed: {}", msg).into());
                    set_state.set(NewsState::Error(msg));
                }
            }
        });
    };

    let toggle_expand = move |index: usize| {
        set_expanded.update(|current| {
            *current = if *current == Some(index) {
                None
            } else {
                Some(index)
            };
        });
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-4xl mx-auto space-y-6">
                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1 gap-2">
                        <button class="btn btn-ghost" on:click=move |_| router.navigate("/")>
                            "← 返回"
                        </button>
                        <span class="text-xl font-bold">"📰 新闻查询"</span>
                    </div>
                </div>

                // 股票选择区
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <h3 class="card-title">"选择股票"</h3>
                        <Show
                            when=move || !user_stocks().is_empty()
                            fallback=move || view! {
                                <p class="text-base-content/50">
                                    "暂无关注的股票。"
                                    <a
                                        class="link link-primary ml-1"
                                        on:click=move |_| router.navigate("/stocks")
                                    >
                                        "去添加"
                                    </a>
                                </p>
                            }
                        >
                            <div class="flex flex-wrap gap-2">
                                <For
                                    each=move || user_stocks()
                                    key=|stock| stock.clone()
                                    children=move |stock| {
                                        let name = stock.clone();
                                        let is_active = {
                                            let name = name.clone();
                                            move || selected.get().as_deref() == Some(name.as_str())
                                        };
                                        view! {
                                            <button
                                                class=move || if is_active() {
                                                    "btn btn-primary btn-sm"
                                                } else {
                                                    "btn btn-outline btn-sm"
                                                }
                                                on:click=move |_| fetch_news(name.clone())
                                            >
                                                {stock}
                                            </button>
                                        }
                                    }
                                />
                            </div>
                        </Show>
                    </div>
                </div>

                // 新闻列表区
                {move || match state.get() {
                    NewsState::Idle => view! {
                        <div class="text-center py-12 text-base-content/50">
                            <p>"👆 选择上方的股票即可查询相关新闻。"</p>
                        </div>
                    }
                    .into_any(),
                    NewsState::Loading => view! {
                        <div class="flex flex-col items-center py-12 gap-4">
                            <span class="loading loading-spinner loading-lg text-primary"></span>
                            <p class="text-base-content/70">"正在加载新闻..."</p>
                        </div>
                    }
                    .into_any(),
                    NewsState::Empty => view! {
                        <div class="text-center py-12 text-base-content/50">
                            <p>"📭 " {selected.get().unwrap_or_default()} " 暂无相关新闻。"</p>
                        </div>
                    }
                    .into_any(),
                    NewsState::Error(msg) => view! {
                        <div role="alert" class="alert alert-error">
                            <span>{msg}</span>
                        </div>
                    }
                    .into_any(),
                    NewsState::Results(data) => {
                        let shown = data.results().len();
                        let total = data.total_results();
                        let cards = data
                            .results()
                            .iter()
                            .enumerate()
                            .map(|(i, event)| {
                                news_card(i, event, data.similar_group(i), expanded, toggle_expand)
                            })
                            .collect_view();
                        view! {
                            <h3 class="text-lg font-bold">
                                "📈 " {selected.get().unwrap_or_default()} " 相关最新新闻"
                            </h3>
                            <div class="space-y-4">{cards}</div>
                            <p class="text-center text-sm text-base-content/50">
                                "共 " {total} " 条新闻，当前显示 " {shown} " 条"
                            </p>
                        }
                        .into_any()
                    }
                }}
            </div>
        </div>
    }
}

/// 单条新闻卡片。`group` 缺失或无条目时不渲染展开入口。
fn news_card(
    index: usize,
    event: &NewsEvent,
    group: Option<&SimilarNewsGroup>,
    expanded: ReadSignal<Option<usize>>,
    toggle_expand: impl Fn(usize) + Copy + Send + Sync + 'static,
) -> AnyView {
    let sentiment = SentimentLabel::from_score(event.sentiment);
    let has_similar = group.is_some_and(|g| g.has_items());
    let is_expanded = expanded.get() == Some(index);

    let similar_section = match group {
        Some(g) if is_expanded && g.has_items() => similar_news_section(g),
        _ => view! { <></> }.into_any(),
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <div class="flex items-center justify-between">
                    <span class=format!("badge {}", sentiment.css_class())>
                        {sentiment.text()}
                    </span>
                    <span class="text-sm text-base-content/50">
                        {format_date(&event.event_date)}
                    </span>
                </div>
                <h4 class="card-title text-base">{event.title.display().to_string()}</h4>
                <p class="text-sm text-base-content/70">{event.summary.display().to_string()}</p>
                <div class="text-sm text-base-content/50">
                    "📄 相关报道 " {event.total_article_count} " 篇"
                </div>
                <Show when=move || has_similar>
                    <button
                        class="btn btn-ghost btn-sm"
                        on:click=move |_| toggle_expand(index)
                    >
                        {if is_expanded { "收起相似新闻 ▲" } else { "查看历史相似新闻 ▼" }}
                    </button>
                </Show>
                {similar_section}
            </div>
        </div>
    }
    .into_any()
}

/// 展开后的历史相似新闻面板。
/// 价格窗口按下标与条目对齐，越界回退到第 0 个，无窗口则省略行情面板。
fn similar_news_section(group: &SimilarNewsGroup) -> AnyView {
    let items = group
        .items
        .iter()
        .enumerate()
        .map(|(j, item)| {
            let price_panel = match resolve_price_window(&group.top_price_window, j) {
                Some(window) => {
                    let change = PriceChange::from_window(window);
                    let (arrow, change_class) = if change.is_positive {
                        ("▲", "text-error")
                    } else {
                        ("▼", "text-info")
                    };
                    view! {
                        <div class="bg-base-200 rounded-lg p-3 mt-2">
                            <h6 class="font-bold text-sm">"📊 当时股价变动"</h6>
                            <div class="grid grid-cols-4 gap-2 text-sm mt-1">
                                <div>
                                    <div class="text-base-content/50">"开盘"</div>
                                    <div>{format_amount(window.open)}</div>
                                </div>
                                <div>
                                    <div class="text-base-content/50">"最高"</div>
                                    <div class="text-error">{format_amount(window.high)}</div>
                                </div>
                                <div>
                                    <div class="text-base-content/50">"最低"</div>
                                    <div class="text-info">{format_amount(window.low)}</div>
                                </div>
                                <div>
                                    <div class="text-base-content/50">"收盘"</div>
                                    <div>{format_amount(window.close)}</div>
                                </div>
                            </div>
                            <div class=format!("text-sm font-bold mt-1 {}", change_class)>
                                {arrow} " " {format_amount(change.change.abs())}
                                " (" {format_percent(change.change_percent)} ")"
                            </div>
                            <div class="text-xs text-base-content/50 mt-1">
                                "成交量：" {format_amount(window.volume)} " 股"
                            </div>
                        </div>
                    }
                    .into_any()
                }
                None => view! { <></> }.into_any(),
            };

            view! {
                <div class="border-l-2 border-primary/30 pl-3 py-2">
                    <span class="text-xs text-base-content/50">
                        {format_date(&item.event_date)}
                    </span>
                    <h6 class="font-bold text-sm">{item.title.clone()}</h6>
                    <p class="text-sm text-base-content/70">{item.summary.clone()}</p>
                    <span class="badge badge-outline badge-sm mt-1">
                        "相似度：" {format!("{:.1}", similarity_percent(item.distance))} "%"
                    </span>
                    {price_panel}
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="mt-2 space-y-2">
            <h5 class="font-bold text-sm">"🔍 历史相似新闻"</h5>
            {items}
        </div>
    }
    .into_any()
}

/// 涨跌百分比展示：正值补 "+"，负值自带 "-"
fn format_percent(percent: f64) -> String {
    if percent >= 0.0 {
        format!("+{:.2}%", percent)
    } else {
        format!("{:.2}%", percent)
    }
}
