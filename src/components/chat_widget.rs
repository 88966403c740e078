//! Chat Widget Component
//!
//! Conversation with the Taskie assistant. Chat turns can mutate the
//! todo collection server-side; this widget only adopts the server's
//! `updated_tasks` and never re-issues the mutation through the todo
//! service.

use chrono::Utc;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::context::AppContext;
use crate::http::ApiClient;
use crate::models::{ChatMessage, Sender};
use crate::store::{store_apply_chat_patch, use_app_store};

#[component]
pub fn ChatWidget() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let client = use_context::<ApiClient>().expect("ApiClient should be provided");
    let store = use_app_store();

    let (input_value, set_input_value) = signal(String::new());
    let (messages, set_messages) = signal(Vec::<ChatMessage>::new());
    let (is_loading, set_is_loading) = signal(false);
    // In-flight guard: checked synchronously, so a second submit while
    // one call is outstanding is dropped, not queued.
    let sending = RwSignal::new(false);

    let send_message = {
        let client = client.clone();
        move || {
            if sending.get_untracked() {
                return;
            }
            let text = input_value.get_untracked();
            if text.trim().is_empty() {
                return;
            }
            sending.set(true);
            set_is_loading.set(true);
            set_messages.update(|log| {
                log.push(ChatMessage {
                    id: format!("{}", js_sys::Date::now()),
                    text: text.clone(),
                    sender: Sender::User,
                    timestamp: Utc::now(),
                });
            });
            set_input_value.set(String::new());

            let client = client.clone();
            spawn_local(async move {
                let reply = match api::send_message(&client, &text).await {
                    Ok(response) => {
                        // The server already applied any todo change;
                        // adopt its result instead of re-deriving it.
                        match (response.action_performed, response.updated_tasks.as_deref()) {
                            (Some(action), Some(tasks)) => {
                                store_apply_chat_patch(&store, action, tasks);
                            }
                            // Action reported without a payload: refresh
                            // the list instead of guessing what changed.
                            (Some(_), None) => ctx.reload(),
                            (None, _) => {}
                        }
                        response.reply
                    }
                    Err(e) => {
                        web_sys::console::error_1(&format!("[Chat] Send failed: {}", e).into());
                        api::failure_reply(&e)
                    }
                };
                set_messages.update(|log| {
                    log.push(ChatMessage {
                        id: format!("assistant-{}", js_sys::Date::now()),
                        text: reply,
                        sender: Sender::Assistant,
                        timestamp: Utc::now(),
                    });
                });
                set_is_loading.set(false);
                // Let the disabled-state render settle before accepting
                // another send.
                TimeoutFuture::new(100).await;
                sending.set(false);
            });
        }
    };
    let send_on_click = send_message.clone();
    let send_on_enter = send_message.clone();

    view! {
        <div class="chat-widget">
            <div class="chat-header">
                <div class="chat-avatar">"T"</div>
                <div>
                    <h2>"Taskie"</h2>
                    <p class="chat-status">"Online"</p>
                </div>
            </div>

            <div class="chat-messages">
                <Show when=move || messages.read().is_empty()>
                    <div class="chat-greeting">
                        <h3>"Hi there! 👋"</h3>
                        <p>
                            "I'm Taskie, your friendly assistant for TaskBox! "
                            "I can help you manage your tasks. Try saying:"
                        </p>
                        <ul>
                            <li>"\"Add 'buy groceries'\""</li>
                            <li>"\"Show my tasks\""</li>
                            <li>"\"Mark 'task name' as completed\""</li>
                            <li>"\"Update 'old task' to 'new task'\""</li>
                        </ul>
                    </div>
                </Show>

                {move || messages.get().into_iter().map(|message| {
                    let side = match message.sender {
                        Sender::User => "chat-row user",
                        Sender::Assistant => "chat-row assistant",
                    };
                    view! {
                        <div class=side>
                            <div class="chat-bubble">
                                <div class="chat-text">{message.text}</div>
                                <div class="chat-time">
                                    {message.timestamp.format("%H:%M").to_string()}
                                </div>
                            </div>
                        </div>
                    }
                }).collect_view()}

                <Show when=move || is_loading.get()>
                    <div class="chat-row assistant">
                        <div class="chat-bubble typing">"..."</div>
                    </div>
                </Show>
            </div>

            <div class="chat-input-row">
                <textarea
                    placeholder="Type your message to Taskie..."
                    rows="1"
                    disabled=move || is_loading.get()
                    prop:value=move || input_value.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                        set_input_value.set(input.value());
                    }
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" && !ev.shift_key() {
                            ev.prevent_default();
                            send_on_enter();
                        }
                    }
                ></textarea>
                <button
                    type="button"
                    class="send-btn"
                    disabled=move || is_loading.get() || input_value.read().trim().is_empty()
                    on:click=move |_| send_on_click()
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}
