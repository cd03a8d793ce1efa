use leptos::prelude::*;

use crate::system::auth::context::{use_session, SessionState};
use crate::system::auth::storage;

/// Credential entry form. Encodes `user:password` with `btoa` and stores
/// the opaque value; every API call reads it back through the
/// `CredentialProvider` capability.
#[component]
pub fn CredentialPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let (_, set_session) = use_session();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error_message.set(None);

        let user = username.get();
        let pass = password.get();
        if user.trim().is_empty() {
            set_error_message.set(Some("Enter a username".to_string()));
            return;
        }

        let window = match web_sys::window() {
            Some(w) => w,
            None => return,
        };

        match window.btoa(&format!("{}:{}", user, pass)) {
            Ok(credential) => {
                storage::save_credential(&credential);
                // Updating the session switches the shell to MainLayout.
                set_session.set(SessionState {
                    credential: Some(credential),
                });
            }
            Err(_) => {
                set_error_message.set(Some("Failed to encode credentials".to_string()));
            }
        }
    };

    view! {
        <div style="max-width: 360px; margin: 80px auto; padding: 24px; border: 1px solid #ddd; border-radius: 8px;">
            <h1 style="margin-top: 0;">"Logistics Admin"</h1>
            <h2>"Sign in"</h2>

            <Show when=move || error_message.get().is_some()>
                <div style="margin-bottom: 12px; padding: 8px 12px; background: #fdecea; color: #b71c1c; border-radius: 4px;">
                    {move || error_message.get().unwrap_or_default()}
                </div>
            </Show>

            <form on:submit=on_submit>
                <div style="margin-bottom: 12px;">
                    <label for="username">"Username"</label>
                    <input
                        type="text"
                        id="username"
                        style="width: 100%; padding: 6px 8px; border: 1px solid #ddd; border-radius: 4px;"
                        value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                        required
                    />
                </div>

                <div style="margin-bottom: 16px;">
                    <label for="password">"Password"</label>
                    <input
                        type="password"
                        id="password"
                        style="width: 100%; padding: 6px 8px; border: 1px solid #ddd; border-radius: 4px;"
                        value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        required
                    />
                </div>

                <button
                    type="submit"
                    style="width: 100%; padding: 8px; background: #1976d2; color: white; border: none; border-radius: 4px; cursor: pointer;"
                >
                    "Sign in"
                </button>
            </form>
        </div>
    }
}
