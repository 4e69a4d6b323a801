use std::rc::Rc;

use gloo_console::error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::filter::Visibility;
use crate::format::format_amount;
use crate::models::{Account, Transaction, User};
use crate::route::Route;
use crate::session::Session;
use crate::ui::transaction_table::TransactionTable;
use crate::ui::{icon_chevron_down, icon_chevron_up, icon_log_out, icon_trending_up, page_shell};
use crate::upgrade::UpgradeFlow;

#[derive(Properties, PartialEq)]
pub struct DashboardPageProps {
    pub user: User,
    pub session: UseStateHandle<Session>,
    pub navigate: Callback<Route>,
}

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    let accounts = use_state(Vec::<Account>::new);
    let transactions = use_state(|| Rc::new(Vec::<Transaction>::new()));
    let visibility = use_state(Visibility::default);
    let upgrade = use_mut_ref(UpgradeFlow::new);
    let checkout_error = use_state(|| None::<String>);
    let requesting_checkout = use_state(|| false);

    // Identity the page is currently rendering for; in-flight responses
    // issued for anyone else are dropped instead of applied to a stale view.
    let active_user = use_mut_ref(|| props.user.id);
    *active_user.borrow_mut() = props.user.id;

    {
        let accounts = accounts.clone();
        let transactions = transactions.clone();
        let active_user = active_user.clone();
        use_effect_with_deps(
            move |&user_id| {
                // Accounts and transactions have no ordering dependency on
                // each other; each lands in its own piece of state.
                {
                    let accounts = accounts.clone();
                    let active_user = active_user.clone();
                    spawn_local(async move {
                        match api::fetch_accounts(user_id).await {
                            Ok(list) => {
                                if *active_user.borrow() == user_id {
                                    accounts.set(list);
                                }
                            }
                            Err(err) => {
                                error!(format!("showing no accounts: {err}"));
                            }
                        }
                    });
                }
                {
                    let transactions = transactions.clone();
                    let active_user = active_user.clone();
                    spawn_local(async move {
                        match api::fetch_transactions(user_id).await {
                            Ok(list) => {
                                if *active_user.borrow() == user_id {
                                    transactions.set(Rc::new(list));
                                }
                            }
                            Err(err) => {
                                error!(format!("showing no transactions: {err}"));
                            }
                        }
                    });
                }
                || ()
            },
            props.user.id,
        );
    }

    let on_logout = {
        let session = props.session.clone();
        let navigate = props.navigate.clone();
        Callback::from(move |_| {
            let mut next = (*session).clone();
            next.logout();
            session.set(next);
            navigate.emit(Route::Login);
        })
    };

    let on_upgrade = {
        let upgrade = upgrade.clone();
        let checkout_error = checkout_error.clone();
        let requesting_checkout = requesting_checkout.clone();
        let email = props.user.email.clone();
        Callback::from(move |_| {
            if !upgrade.borrow_mut().request_checkout(&email) {
                return;
            }
            requesting_checkout.set(true);
            checkout_error.set(None);

            let upgrade = upgrade.clone();
            let checkout_error = checkout_error.clone();
            let requesting_checkout = requesting_checkout.clone();
            let email = email.clone();
            spawn_local(async move {
                match api::create_checkout_session(&email).await {
                    Ok(url) => {
                        upgrade.borrow_mut().checkout_ready();
                        // Leaving the app: the payment page owns the browser
                        // until it sends us back to the return view.
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(&url);
                        }
                    }
                    Err(err) => {
                        let message = err.to_string();
                        upgrade.borrow_mut().checkout_failed(message.clone());
                        checkout_error.set(Some(message));
                        requesting_checkout.set(false);
                    }
                }
            });
        })
    };

    let on_dismiss_checkout_error = {
        let upgrade = upgrade.clone();
        let checkout_error = checkout_error.clone();
        Callback::from(move |_| {
            upgrade.borrow_mut().acknowledge_failure();
            checkout_error.set(None);
        })
    };

    let on_insights = {
        let navigate = props.navigate.clone();
        Callback::from(move |_| navigate.emit(Route::PremiumInsights))
    };

    let actions = html! {
        <>
            {
                if props.user.is_premium {
                    html! {
                        <button onclick={on_insights} class="flex items-center gap-2 bg-blue-600 text-white px-4 py-2 rounded-xl font-bold text-sm hover:opacity-90 transition-all">
                            { icon_trending_up() }
                            {"Premium Insights"}
                        </button>
                    }
                } else {
                    html! {
                        <button
                            onclick={on_upgrade}
                            disabled={*requesting_checkout}
                            class="flex items-center gap-2 bg-amber-500 text-white px-4 py-2 rounded-xl font-bold text-sm hover:opacity-90 transition-all"
                        >
                            { icon_trending_up() }
                            { if *requesting_checkout { "Starting checkout..." } else { "Upgrade to Premium" } }
                        </button>
                    }
                }
            }
            <button onclick={on_logout} class="flex items-center gap-2 bg-red-500 text-white px-4 py-2 rounded-xl font-bold text-sm hover:opacity-90 transition-all">
                { icon_log_out() }
                {"Logout"}
            </button>
        </>
    };

    html! {
        { page_shell(
            "Dashboard",
            actions,
            html! {
                <>
                    <p class="text-lg text-slate-600">
                        { format!("Welcome, {}!", props.user.display_name()) }
                    </p>

                    if let Some(message) = &*checkout_error {
                        <div class="flex items-center justify-between bg-red-50 border border-red-200 text-red-700 text-sm rounded-xl px-4 py-3">
                            <span>{ message.clone() }</span>
                            <button onclick={on_dismiss_checkout_error} class="font-bold ml-4">{"Dismiss"}</button>
                        </div>
                    }

                    if accounts.is_empty() {
                        <p class="text-sm text-slate-500">{"No accounts to show."}</p>
                    }

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        { for accounts.iter().map(|account| {
                            let expanded = visibility.is_expanded(account.id);
                            let on_toggle = {
                                let visibility = visibility.clone();
                                let account_id = account.id;
                                Callback::from(move |_| {
                                    let mut next = (*visibility).clone();
                                    next.toggle(account_id);
                                    visibility.set(next);
                                })
                            };
                            html! {
                                <div key={account.id.to_string()} class="bg-white border border-slate-200 p-4 rounded-xl shadow-sm">
                                    <div class="flex items-start justify-between">
                                        <div>
                                            <h2 class="text-lg font-semibold text-slate-800">{ account.kind.to_uppercase() }</h2>
                                            <p class="text-sm text-slate-500">{ account.name.clone() }</p>
                                            <p class="text-xl font-bold mt-2 text-slate-800">{ format_amount(account.balance) }</p>
                                        </div>
                                        <button
                                            onclick={on_toggle}
                                            class="flex items-center gap-1 text-sm text-slate-500 hover:text-slate-700 transition-colors"
                                        >
                                            { if expanded { icon_chevron_up() } else { icon_chevron_down() } }
                                            { if expanded { "Hide transactions" } else { "Show transactions" } }
                                        </button>
                                    </div>
                                    if expanded {
                                        <TransactionTable
                                            account_id={account.id}
                                            transactions={(*transactions).clone()}
                                        />
                                    }
                                </div>
                            }
                        }) }
                    </div>
                </>
            },
        ) }
    }
}
