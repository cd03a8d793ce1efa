use crate::domain::orders::ui::list::OrdersList;
use crate::system::auth::context::{use_session, SessionState};
use crate::system::auth::storage;
use crate::system::pages::login::CredentialPage;
use crate::system::users::ui::ConfirmUserPage;
use leptos::prelude::*;
// Plain Show-based shell; no router crate.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Orders,
    ConfirmUser,
}

#[component]
fn MainLayout() -> impl IntoView {
    let (section, set_section) = signal(Section::Orders);
    let (_, set_session) = use_session();

    let sign_out = move |_| {
        storage::clear_credential();
        set_session.set(SessionState::default());
    };

    let nav_button_style = move |target: Section| {
        if section.get() == target {
            "padding: 6px 14px; background: #1976d2; color: white; border: none; border-radius: 4px; cursor: pointer;"
        } else {
            "padding: 6px 14px; background: #eeeeee; color: #333; border: none; border-radius: 4px; cursor: pointer;"
        }
    };

    view! {
        <div>
            <nav style="display: flex; gap: 8px; align-items: center; padding: 10px 16px; border-bottom: 1px solid #ddd;">
                <span style="font-weight: 600; margin-right: 12px;">"Logistics Admin"</span>
                <button
                    style=move || nav_button_style(Section::Orders)
                    on:click=move |_| set_section.set(Section::Orders)
                >
                    "Orders"
                </button>
                <button
                    style=move || nav_button_style(Section::ConfirmUser)
                    on:click=move |_| set_section.set(Section::ConfirmUser)
                >
                    "Confirm user"
                </button>
                <button
                    style="margin-left: auto; padding: 6px 14px; background: none; border: 1px solid #ddd; border-radius: 4px; cursor: pointer;"
                    on:click=sign_out
                >
                    "Sign out"
                </button>
            </nav>
            {move || match section.get() {
                Section::Orders => view! { <OrdersList /> }.into_any(),
                Section::ConfirmUser => view! { <ConfirmUserPage /> }.into_any(),
            }}
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (session, _) = use_session();

    view! {
        <Show
            when=move || session.get().credential.is_some()
            fallback=|| view! { <CredentialPage /> }
        >
            <MainLayout />
        </Show>
    }
}
