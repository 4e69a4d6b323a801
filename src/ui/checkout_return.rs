use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::User;
use crate::route::Route;
use crate::session::Session;
use crate::upgrade::{UpgradeFlow, UpgradeState};

#[derive(Properties, PartialEq)]
pub struct CheckoutReturnPageProps {
    pub user: User,
    pub session: UseStateHandle<Session>,
    /// Replace-navigation so the back button cannot land here again and
    /// restart the hop.
    pub navigate_replace: Callback<Route>,
}

/// The view the payment processor redirects back to. Refreshes the identity
/// (picking up the premium flag) and moves on to the dashboard — at most
/// once per arrival, however often the view re-renders meanwhile.
#[function_component(CheckoutReturnPage)]
pub fn checkout_return_page(props: &CheckoutReturnPageProps) -> Html {
    // The machine lives in a mut-ref so re-renders cannot reset the latch;
    // the state handle mirrors it for rendering.
    let flow = use_mut_ref(UpgradeFlow::new);
    let shown_state = use_state(UpgradeState::default);

    {
        let flow = flow.clone();
        let shown_state = shown_state.clone();
        let session = props.session.clone();
        let navigate = props.navigate_replace.clone();
        let user_id = props.user.id;
        use_effect_with_deps(
            move |_| {
                if flow.borrow_mut().arrive_at_return() {
                    shown_state.set(flow.borrow().state().clone());
                    spawn_local(async move {
                        let mut next = (*session).clone();
                        match next.refresh(user_id).await {
                            Ok(()) => {
                                flow.borrow_mut().refresh_succeeded();
                                shown_state.set(flow.borrow().state().clone());
                                session.set(next);
                                navigate.emit(Route::Dashboard);
                            }
                            Err(err) => {
                                flow.borrow_mut().refresh_failed(err.to_string());
                                shown_state.set(flow.borrow().state().clone());
                            }
                        }
                    });
                }
                || ()
            },
            (),
        );
    }

    let on_back = {
        let navigate = props.navigate_replace.clone();
        Callback::from(move |_| navigate.emit(Route::Dashboard))
    };

    html! {
        <div class="p-8 text-center">
            {
                match &*shown_state {
                    UpgradeState::Failed(message) => html! {
                        <>
                            <h1 class="text-2xl font-semibold mb-4 text-slate-800">{"We could not confirm your upgrade"}</h1>
                            <p class="text-red-600 mb-6">{ message.clone() }</p>
                            <button onclick={on_back} class="bg-blue-600 text-white px-4 py-2 rounded-xl font-bold text-sm hover:opacity-90 transition-all">
                                {"Back to Dashboard"}
                            </button>
                        </>
                    },
                    _ => html! {
                        <>
                            <h1 class="text-2xl font-semibold mb-4 text-slate-800">{"Upgrading your account..."}</h1>
                            <p class="text-slate-500">{"Please wait while we activate your premium access."}</p>
                        </>
                    },
                }
            }
        </div>
    }
}
