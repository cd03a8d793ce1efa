use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub credential: Option<String>,
}

/// Session context provider component. The stored credential is opaque
/// to the frontend: it gates the shell, nothing validates it here.
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    // Restore the session from localStorage on mount.
    let (session, set_session) = signal(SessionState {
        credential: storage::get_credential(),
    });

    provide_context(session);
    provide_context(set_session);

    children()
}

/// Hook to access session state
pub fn use_session() -> (ReadSignal<SessionState>, WriteSignal<SessionState>) {
    let session = use_context::<ReadSignal<SessionState>>()
        .expect("SessionProvider not found in component tree");
    let set_session = use_context::<WriteSignal<SessionState>>()
        .expect("SessionProvider not found in component tree");

    (session, set_session)
}
