use contracts::domain::orders::{Order, OrderStatus, OrdersPage, OrdersQuery};
use contracts::shared::errors::{FetchError, TransitionError};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;
use crate::system::auth::{basic_header, CredentialProvider};

/// Fetch the current page of orders. The returned collection fully
/// replaces whatever the caller held before.
pub async fn fetch_orders(creds: &impl CredentialProvider) -> Result<Vec<Order>, FetchError> {
    let response = Request::post(&format!("{}/api/orders/filtered", api_base()))
        .header("Authorization", &basic_header(creds))
        .json(&OrdersQuery::first_page())
        .map_err(|e| FetchError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        let message = response.text().await.unwrap_or_default();
        return Err(FetchError::Http {
            status: response.status(),
            message,
        });
    }

    let page: OrdersPage = response
        .json()
        .await
        .map_err(|e| FetchError::Parse(e.to_string()))?;

    Ok(page.content)
}

/// Move one order to the given target state. The target code is checked
/// against the enumeration before any request is built; the backend is
/// the sole judge of whether the transition itself is legal.
pub async fn update_order_status(
    creds: &impl CredentialProvider,
    order_id: i64,
    target_code: &str,
) -> Result<(), TransitionError> {
    let target = OrderStatus::from_code(target_code).ok_or(TransitionError::InvalidStatus)?;

    let response = Request::put(&format!(
        "{}/api/orders/{}/{}",
        api_base(),
        target.code(),
        order_id
    ))
    .header("Authorization", &basic_header(creds))
    .send()
    .await
    .map_err(|e| TransitionError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(TransitionError::Http {
            status: response.status(),
        });
    }

    Ok(())
}
