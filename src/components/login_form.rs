//! Login Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::AppContext;
use crate::error::ApiError;
use crate::http::ApiClient;

/// Email/password sign-in card
#[component]
pub fn LoginForm(#[prop(into)] on_switch_to_register: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let client = use_context::<ApiClient>().expect("ApiClient should be provided");

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let email_value = email.get();
        let password_value = password.get();
        if email_value.trim().is_empty() || password_value.is_empty() {
            set_error.set(Some("Email and password are required".to_string()));
            return;
        }
        set_error.set(None);
        set_submitting.set(true);
        let client = client.clone();
        spawn_local(async move {
            // On success the auth phase flips and this form unmounts,
            // so local signals are only touched on failure.
            match ctx.login(&client, email_value.trim(), &password_value).await {
                Ok(()) => {}
                Err(ApiError::Unauthorized) => {
                    set_submitting.set(false);
                    set_error.set(Some("Invalid email or password".to_string()));
                }
                Err(e) => {
                    set_submitting.set(false);
                    set_error.set(Some(format!("Login failed: {}", e)));
                }
            }
        });
    };

    view! {
        <div class="auth-card">
            <h2 class="auth-title">"TaskBox"</h2>
            <p class="auth-subtitle">"Your smart companion for tasks & chats"</p>

            {move || error.get().map(|msg| view! {
                <div class="error-banner">{msg}</div>
            })}

            <form class="auth-form" on:submit=submit>
                <input
                    type="email"
                    placeholder="Email address"
                    autocomplete="email"
                    prop:value=move || email.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_email.set(input.value());
                    }
                />
                <input
                    type="password"
                    placeholder="Password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_password.set(input.value());
                    }
                />
                <button type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>

            <p class="auth-switch">
                "Don't have an account? "
                <button type="button" class="link-btn" on:click=move |_| on_switch_to_register.run(())>
                    "Register"
                </button>
            </p>
        </div>
    }
}
