mod api;
mod filter;
mod format;
mod insights;
mod models;
mod route;
mod session;
mod ui;
mod upgrade;

use yew::prelude::*;

use crate::route::Route;
use crate::session::{BrowserSession, SessionStore};
use crate::ui::{CheckoutReturnPage, DashboardPage, LoginPage, PremiumInsightsPage};

#[function_component(App)]
fn app() -> Html {
    // Identity is restored from the durable slot before anything renders,
    // so a reload lands straight on the view the URL names.
    let session = use_state(|| SessionStore::initialize(BrowserSession));
    let requested = use_state(route::initial);

    let navigate = {
        let requested = requested.clone();
        Callback::from(move |next: Route| {
            route::push(next);
            requested.set(next);
        })
    };

    let navigate_replace = {
        let requested = requested.clone();
        Callback::from(move |next: Route| {
            route::replace(next);
            requested.set(next);
        })
    };

    let showing = route::resolve(*requested, session.user());

    // Keep the address bar honest when a guard redirected the request.
    {
        let requested_handle = requested.clone();
        use_effect_with_deps(
            move |&(requested, showing)| {
                if requested != showing {
                    route::replace(showing);
                    requested_handle.set(showing);
                }
                || ()
            },
            (*requested, showing),
        );
    }

    match (showing, session.user().cloned()) {
        (Route::Login, _) => html! {
            <LoginPage session={session.clone()} navigate={navigate} />
        },
        (Route::Dashboard, Some(user)) => html! {
            <DashboardPage user={user} session={session.clone()} navigate={navigate} />
        },
        (Route::PremiumInsights, Some(user)) => html! {
            <PremiumInsightsPage user={user} navigate={navigate} />
        },
        (Route::CheckoutReturn, Some(user)) => html! {
            <CheckoutReturnPage user={user} session={session.clone()} navigate_replace={navigate_replace} />
        },
        // A guard redirect is about to land; render nothing for the frame.
        _ => html! {},
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
