use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::route::Route;
use crate::session::Session;

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    pub session: UseStateHandle<Session>,
    pub navigate: Callback<Route>,
}

#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let loading = loading.clone();
        let session = props.session.clone();
        let navigate = props.navigate.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let email_val = email.trim().to_string();
            let password_val = (*password).clone();

            if email_val.is_empty() || password_val.is_empty() {
                error.set(Some("Email and password are required".to_string()));
                return;
            }

            loading.set(true);
            error.set(None);

            let session = session.clone();
            let navigate = navigate.clone();
            let error = error.clone();
            let loading = loading.clone();
            spawn_local(async move {
                match api::login(&email_val, &password_val).await {
                    Ok(user) => {
                        let mut next = (*session).clone();
                        next.login(user);
                        session.set(next);
                        navigate.emit(Route::Dashboard);
                    }
                    Err(err) => {
                        error.set(Some(err.to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-slate-50">
            <div class="w-full max-w-md bg-white border border-slate-200 rounded-2xl shadow-lg p-8">
                <div class="text-center mb-6">
                    <h1 class="text-3xl font-bold text-slate-800">{"FinSight"}</h1>
                    <p class="text-sm text-slate-500 mt-2">{"Sign in to see your accounts."}</p>
                </div>

                <form class="space-y-4" onsubmit={on_submit}>
                    <div class="space-y-1">
                        <label class="text-sm font-medium text-slate-700">{"Email"}</label>
                        <input
                            type="email"
                            class="w-full px-4 py-2 border border-slate-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                            value={(*email).clone()}
                            oninput={{
                                let email = email.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    email.set(input.value());
                                })
                            }}
                        />
                    </div>
                    <div class="space-y-1">
                        <label class="text-sm font-medium text-slate-700">{"Password"}</label>
                        <input
                            type="password"
                            class="w-full px-4 py-2 border border-slate-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                            value={(*password).clone()}
                            oninput={{
                                let password = password.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    password.set(input.value());
                                })
                            }}
                        />
                    </div>

                    if let Some(message) = &*error {
                        <div class="text-sm text-red-500">{ message.clone() }</div>
                    }

                    <button
                        type="submit"
                        class="w-full bg-blue-600 text-white py-2 rounded-lg font-semibold hover:opacity-90 transition-opacity"
                        disabled={*loading}
                    >
                        { if *loading { "Please wait..." } else { "Login" } }
                    </button>
                </form>
            </div>
        </div>
    }
}
