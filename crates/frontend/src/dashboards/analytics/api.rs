use contracts::analytics::{CategorySales, SalesSummary};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch the sales summary for an explicit date range
pub async fn fetch_sales_summary(start_date: &str, end_date: &str) -> Result<SalesSummary, String> {
    let url = api_url(&format!(
        "/api/orders/sales-summary/?start_date={}&end_date={}",
        start_date, end_date
    ));
    let response = Request::get(&url)
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

/// Fetch the per-category sales breakdown for a date range
pub async fn fetch_category_sales(
    start_date: &str,
    end_date: &str,
) -> Result<CategorySales, String> {
    let url = api_url(&format!(
        "/api/orders/category-sales/?start_date={}&end_date={}",
        start_date, end_date
    ));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Failed to fetch category sales: {}",
            response.status()
        ));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
