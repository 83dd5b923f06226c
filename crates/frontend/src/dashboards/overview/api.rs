use contracts::analytics::SalesSummary;
use contracts::orders::TodayOrders;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch the sales summary for the default window (last 30 days)
pub async fn fetch_sales_summary() -> Result<SalesSummary, String> {
    let response = Request::get(&api_url("/api/orders/sales-summary/"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Failed to fetch sales summary: {}",
            response.status()
        ));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch today's order aggregates
pub async fn fetch_today_orders() -> Result<TodayOrders, String> {
    let response = Request::get(&api_url("/api/orders/today-orders/"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Failed to fetch today's orders: {}",
            response.status()
        ));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
