//! TaskBox Frontend App
//!
//! Composition root: builds the client, store and context, restores the
//! session on startup, and routes between the auth views and dashboard.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{ChatWidget, LoginForm, RegisterForm, TodoFilterPanel, TodoList};
use crate::context::{AppContext, AuthPhase};
use crate::http::ApiClient;
use crate::models::FilterCriteria;
use crate::store::{store_clear, AppState};

#[component]
pub fn App() -> impl IntoView {
    // State
    let (auth, set_auth) = signal(AuthPhase::Loading);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (show_register, set_show_register) = signal(false);
    let (filters, set_filters) = signal(FilterCriteria::default());

    let unauthorized = RwSignal::new(0u32);
    let client = ApiClient::new(unauthorized);
    let store = Store::new(AppState::default());
    let ctx = AppContext::new((auth, set_auth), (reload_trigger, set_reload_trigger));

    // Provide context to all children
    provide_context(client.clone());
    provide_context(store);
    provide_context(ctx);

    // Startup: decide whether the stored credential is still usable.
    {
        let client = client.clone();
        spawn_local(async move {
            ctx.restore_session(&client).await;
        });
    }

    // Fail closed: a 401 from any endpoint ends the session and routes
    // back to the login entry point, whatever the user was doing.
    Effect::new(move |_| {
        if unauthorized.get() > 0 {
            web_sys::console::warn_1(
                &"[App] Session rejected by server, returning to login".into(),
            );
            ctx.set_unauthenticated();
        }
    });

    // The todo collection lives exactly as long as the session.
    Effect::new(move |_| {
        if !auth.get().is_authenticated() {
            store_clear(&store);
        }
    });

    let logout_client = client.clone();

    view! {
        {move || match auth.get() {
            AuthPhase::Loading => view! {
                <div class="app-loading">"Loading..."</div>
            }.into_any(),
            AuthPhase::Unauthenticated => view! {
                <div class="auth-screen">
                    <Show when=move || !show_register.get()>
                        <LoginForm on_switch_to_register=move |_| set_show_register.set(true) />
                    </Show>
                    <Show when=move || show_register.get()>
                        <RegisterForm on_switch_to_login=move |_| set_show_register.set(false) />
                    </Show>
                </div>
            }.into_any(),
            AuthPhase::Authenticated(user) => {
                let logout_client = logout_client.clone();
                view! {
                    <div class="dashboard">
                        <nav class="dashboard-nav">
                            <h1>"Todo Dashboard"</h1>
                            <div class="nav-user">
                                <span>{format!("Welcome, {}", user.email)}</span>
                                <button
                                    class="logout-btn"
                                    on:click=move |_| {
                                        let client = logout_client.clone();
                                        spawn_local(async move {
                                            ctx.logout(&client).await;
                                        });
                                    }
                                >
                                    "Logout"
                                </button>
                            </div>
                        </nav>

                        <main class="dashboard-main">
                            <section class="todos-pane">
                                <TodoFilterPanel
                                    on_change=move |criteria: FilterCriteria| set_filters.set(criteria)
                                />
                                <TodoList filters=filters />
                            </section>
                            <aside class="chat-pane">
                                <ChatWidget />
                            </aside>
                        </main>
                    </div>
                }.into_any()
            }
        }}
    }
}
