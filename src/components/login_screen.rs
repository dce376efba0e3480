//! Login Screen Component

use leptos::prelude::*;

use crate::auth;
use crate::context::AppContext;

#[component]
pub fn LoginScreen() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let config = ctx.config();
    let missing_key = !config.has_api_key();

    view! {
        <div class="login-screen">
            <h1>{config.app_name.clone()}</h1>
            <p>"Sign in to see your organizations and boards."</p>
            <button
                class="login-btn"
                disabled=missing_key
                on:click=move |_| auth::start_login(&ctx.config())
            >
                "Sign in"
            </button>
            {missing_key.then(|| view! {
                <div class="inline-error">"No API key configured (set TASKBOARD_API_KEY at build time)."</div>
            })}
        </div>
    }
}
