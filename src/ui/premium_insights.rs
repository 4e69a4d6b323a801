use gloo_console::error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::insights::{present, ChangeDirection, PresentedInsights, SeriesRow};
use crate::models::User;
use crate::route::Route;
use crate::ui::page_shell;

#[derive(Properties, PartialEq)]
pub struct PremiumInsightsPageProps {
    pub user: User,
    pub navigate: Callback<Route>,
}

#[function_component(PremiumInsightsPage)]
pub fn premium_insights_page(props: &PremiumInsightsPageProps) -> Html {
    let insights = use_state(|| None::<PresentedInsights>);
    let loading = use_state(|| true);

    {
        let insights = insights.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |&user_id| {
                spawn_local(async move {
                    match api::fetch_insights(user_id).await {
                        Ok(bundle) => insights.set(Some(present(&bundle))),
                        Err(err) => {
                            error!(format!("showing no insights: {err}"));
                        }
                    }
                    loading.set(false);
                });
                || ()
            },
            props.user.id,
        );
    }

    let on_back = {
        let navigate = props.navigate.clone();
        Callback::from(move |_| navigate.emit(Route::Dashboard))
    };

    if *loading {
        return html! {
            <div class="p-8 text-center">
                <h1 class="text-xl font-semibold text-slate-700">{"Loading premium insights..."}</h1>
            </div>
        };
    }

    let actions = html! {
        <button onclick={on_back} class="text-sm px-3 py-1 bg-slate-200 rounded hover:bg-slate-300 transition-colors">
            {"Back to Dashboard"}
        </button>
    };

    let body = match &*insights {
        None => html! {
            <p class="text-sm text-slate-500">{"Insights are not available right now."}</p>
        },
        Some(presented) => {
            let weekly_max = presented
                .weekly
                .iter()
                .map(|week| week.total)
                .fold(0.0_f64, f64::max);
            html! {
                <>
                    <section class="bg-white border border-slate-200 rounded-xl p-6">
                        <h2 class="text-lg font-semibold text-slate-800 mb-4">{"Weekly Spending Overview"}</h2>
                        <div class="space-y-3">
                            { for presented.weekly.iter().map(|week| {
                                let width = bar_width(week.total, weekly_max);
                                html! {
                                    <div class="text-sm">
                                        <div class="flex items-center justify-between mb-1">
                                            <span class="text-slate-600">{ week.range.clone() }</span>
                                            <span class="font-semibold text-slate-800">
                                                { week.amount.clone() }
                                                {
                                                    match &week.change {
                                                        Some(change) if change.direction == ChangeDirection::Up => html! {
                                                            <span class="text-red-600 ml-2">{ format!("\u{2191} {}", change.label) }</span>
                                                        },
                                                        Some(change) => html! {
                                                            <span class="text-green-600 ml-2">{ format!("\u{2193} {}", change.label) }</span>
                                                        },
                                                        None => html! {},
                                                    }
                                                }
                                            </span>
                                        </div>
                                        <div class="h-2 w-full bg-slate-100 rounded-full overflow-hidden">
                                            <div class="h-full bg-blue-500" style={format!("width: {width}%")}></div>
                                        </div>
                                    </div>
                                }
                            }) }
                        </div>
                    </section>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        { series_card("Top Categories", &presented.categories) }
                        { series_card("Top Merchants", &presented.merchants) }
                    </div>

                    <section class="bg-white border border-slate-200 rounded-xl p-6">
                        <h2 class="text-lg font-semibold text-slate-800 mb-2">{"Average Transaction Value"}</h2>
                        <p class="text-2xl font-bold text-slate-800">{ presented.average_transaction.clone() }</p>
                    </section>

                    <section class="bg-white border border-slate-200 rounded-xl p-6">
                        <h2 class="text-lg font-semibold text-slate-800 mb-4">{"Flagged Expensive Transactions"}</h2>
                        if presented.flagged.is_empty() {
                            <p class="text-sm text-slate-500">{"Nothing flagged this period."}</p>
                        }
                        <ul class="space-y-2">
                            { for presented.flagged.iter().map(|txn| html! {
                                <li class="flex items-center justify-between text-sm">
                                    <span class="text-slate-700">
                                        { txn.name.clone() }
                                        <span class="bg-slate-100 text-slate-600 px-2 py-0.5 rounded-full text-[10px] font-bold ml-2">{ txn.category.clone() }</span>
                                    </span>
                                    <span class="text-slate-500">{ format!("{} on {}", txn.amount, txn.date) }</span>
                                </li>
                            }) }
                        </ul>
                    </section>
                </>
            }
        }
    };

    html! {
        { page_shell("Premium Insights", actions, body) }
    }
}

fn bar_width(total: f64, max: f64) -> i32 {
    if max > 0.0 {
        ((total / max) * 100.0).round() as i32
    } else {
        0
    }
}

fn series_card(title: &'static str, rows: &[SeriesRow]) -> Html {
    let max = rows.iter().map(|row| row.total).fold(0.0_f64, f64::max);
    html! {
        <section class="bg-white border border-slate-200 rounded-xl p-6">
            <h2 class="text-lg font-semibold text-slate-800 mb-4">{ title }</h2>
            if rows.is_empty() {
                <p class="text-sm text-slate-500">{"No data yet."}</p>
            }
            <div class="space-y-3">
                { for rows.iter().map(|row| {
                    let width = bar_width(row.total, max);
                    html! {
                        <div class="text-sm">
                            <div class="flex items-center justify-between mb-1">
                                <span class="text-slate-600">{ row.label.clone() }</span>
                                <span class="font-semibold text-slate-800">{ row.amount.clone() }</span>
                            </div>
                            <div class="h-2 w-full bg-slate-100 rounded-full overflow-hidden">
                                <div class="h-full bg-blue-500" style={format!("width: {width}%")}></div>
                            </div>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}
