use web_sys::window;

// Key shared with the backend-facing login form.
const CREDENTIAL_KEY: &str = "basicCreds";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save the Basic credential to localStorage
pub fn save_credential(credential: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(CREDENTIAL_KEY, credential);
    }
}

/// Get the Basic credential from localStorage
pub fn get_credential() -> Option<String> {
    get_local_storage()?.get_item(CREDENTIAL_KEY).ok()?
}

/// Clear the stored credential
pub fn clear_credential() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(CREDENTIAL_KEY);
    }
}
