use gloo_net::http::Request;

use crate::shared::api_utils::api_base;
use crate::system::auth::{basic_header, CredentialProvider};

/// Confirm a pending user account by id
pub async fn confirm_user(creds: &impl CredentialProvider, user_id: i64) -> Result<(), String> {
    let response = Request::post(&format!("{}/api/v1/auth/confirm/{}", api_base(), user_id))
        .header("Authorization", &basic_header(creds))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        let text = response.text().await.unwrap_or_default();
        return Err(format!(
            "Confirmation failed: {} {}",
            response.status(),
            text
        ));
    }

    Ok(())
}
