use contracts::orders::{Order, OrderDetail, OrderPayload};
use contracts::ListEnvelope;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch all orders
pub async fn fetch_orders() -> Result<Vec<Order>, String> {
    let response = Request::get(&api_url("/api/orders/orders/"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch orders: {}", response.status()));
    }

    let result: ListEnvelope<Order> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(result.into_vec())
}

/// Get order with line items by ID
pub async fn fetch_order(id: i64) -> Result<OrderDetail, String> {
    let response = Request::get(&api_url(&format!("/api/orders/orders/{}/", id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch order: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create new order from a submitted draft
pub async fn create_order(payload: &OrderPayload) -> Result<OrderDetail, String> {
    let response = Request::post(&api_url("/api/orders/orders/"))
        .json(payload)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        // Stock/validation errors carry the explanation in the body.
        let status = response.status();
        let detail = response.text().await.unwrap_or_default();
        if detail.trim().is_empty() {
            return Err(format!("Failed to create order ({})", status));
        }
        return Err(format!("Failed to create order ({}): {}", status, detail));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Delete order
pub async fn delete_order(id: i64) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/api/orders/orders/{}/", id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete order: {}", response.status()));
    }

    Ok(())
}

/// Download the sales report CSV produced by the server
pub async fn export_csv() -> Result<Vec<u8>, String> {
    let response = Request::get(&api_url("/api/orders/export-csv/"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to export CSV: {}", response.status()));
    }

    response
        .binary()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))
}
