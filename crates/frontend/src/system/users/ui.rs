use contracts::shared::errors::ValidationError;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::system::auth::LocalStorageCredentials;

/// Single-field form confirming a pending user account by id.
/// At most one of the success/error messages is visible at a time.
#[component]
pub fn ConfirmUserPage() -> impl IntoView {
    let (user_id, set_user_id) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (success_message, set_success_message) = signal(Option::<String>::None);

    let on_confirm = move |_| {
        // Each action resets prior messages before proceeding.
        set_error_message.set(None);
        set_success_message.set(None);

        let input = user_id.get();
        let id: i64 = match input.trim().parse() {
            Ok(id) if id > 0 => id,
            _ => {
                // Malformed input never reaches the network.
                set_error_message.set(Some(ValidationError::InvalidUserId.to_string()));
                return;
            }
        };

        spawn_local(async move {
            match api::confirm_user(&LocalStorageCredentials, id).await {
                Ok(()) => {
                    set_success_message.set(Some(format!("User {} confirmed.", id)));
                    set_user_id.set(String::new());
                }
                Err(e) => {
                    log::error!("Confirmation request failed: {}", e);
                    set_error_message.set(Some(e));
                }
            }
        });
    };

    view! {
        <div style="max-width: 420px; margin: 40px auto; padding: 0 16px;">
            <h1>"Confirm user by id"</h1>

            <div style="display: flex; gap: 8px; margin-bottom: 12px;">
                <input
                    type="number"
                    placeholder="User id"
                    style="flex: 1; padding: 6px 8px; border: 1px solid #ddd; border-radius: 4px;"
                    value=move || user_id.get()
                    on:input=move |ev| set_user_id.set(event_target_value(&ev))
                />
                <button
                    style="padding: 6px 16px; background: #1976d2; color: white; border: none; border-radius: 4px; cursor: pointer;"
                    on:click=on_confirm
                >
                    "Confirm"
                </button>
            </div>

            {move || {
                error_message
                    .get()
                    .map(|err| {
                        view! {
                            <p style="color: #b71c1c;">{err}</p>
                        }
                    })
            }}
            {move || {
                success_message
                    .get()
                    .map(|msg| {
                        view! {
                            <p style="color: #2e7d32;">{msg}</p>
                        }
                    })
            }}
        </div>
    }
}
