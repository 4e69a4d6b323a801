mod checkout_return;
mod dashboard;
mod login;
mod premium_insights;
mod transaction_table;

pub use checkout_return::CheckoutReturnPage;
pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use premium_insights::PremiumInsightsPage;

use yew::prelude::*;

pub(crate) fn page_shell(title: &'static str, actions: Html, children: Html) -> Html {
    html! {
        <div class="p-6 max-w-5xl mx-auto">
            <div class="flex items-center justify-between pb-4 border-b border-slate-200">
                <h1 class="text-2xl font-bold text-slate-800">{ title }</h1>
                <div class="flex items-center gap-3">{ actions }</div>
            </div>
            <div class="pt-5 space-y-6">
                { children }
            </div>
        </div>
    }
}

fn icon_base(path: &'static str) -> Html {
    html! {
        <svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d={path}></path>
        </svg>
    }
}

pub(crate) fn icon_log_out() -> Html {
    icon_base("M9 21H5a2 2 0 01-2-2V5a2 2 0 012-2h4M16 17l5-5-5-5M21 12H9")
}

pub(crate) fn icon_chevron_down() -> Html {
    icon_base("M6 9l6 6 6-6")
}

pub(crate) fn icon_chevron_up() -> Html {
    icon_base("M18 15l-6-6-6 6")
}

pub(crate) fn icon_trending_up() -> Html {
    icon_base("M3 17l6-6 4 4 7-7")
}
