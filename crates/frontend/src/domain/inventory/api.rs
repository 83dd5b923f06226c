use contracts::inventory::{Category, CategoryPayload, InventorySummary, Product, ProductPayload};
use contracts::ListEnvelope;
use gloo_net::http::{Request, Response};

use crate::shared::api_utils::api_url;

/// Append the server's error payload so validation messages (duplicate SKU,
/// stock errors) reach the user verbatim.
async fn server_error(action: &str, response: Response) -> String {
    let status = response.status();
    match response.text().await {
        Ok(body) if !body.trim().is_empty() => format!("{} ({}): {}", action, status, body),
        _ => format!("{} ({})", action, status),
    }
}

/// Fetch all products
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    let response = Request::get(&api_url("/api/inventory/products/"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch products: {}", response.status()));
    }

    let result: ListEnvelope<Product> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(result.into_vec())
}

/// Fetch all categories
pub async fn fetch_categories() -> Result<Vec<Category>, String> {
    let response = Request::get(&api_url("/api/inventory/categories/"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch categories: {}", response.status()));
    }

    let result: ListEnvelope<Category> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(result.into_vec())
}

/// Create new product
pub async fn create_product(payload: &ProductPayload) -> Result<Product, String> {
    let response = Request::post(&api_url("/api/inventory/products/"))
        .json(payload)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(server_error("Failed to save product", response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Update existing product
pub async fn update_product(id: i64, payload: &ProductPayload) -> Result<Product, String> {
    let response = Request::put(&api_url(&format!("/api/inventory/products/{}/", id)))
        .json(payload)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(server_error("Failed to save product", response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Delete product
pub async fn delete_product(id: i64) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/api/inventory/products/{}/", id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete product: {}", response.status()));
    }

    Ok(())
}

/// Create new category
pub async fn create_category(payload: &CategoryPayload) -> Result<Category, String> {
    let response = Request::post(&api_url("/api/inventory/categories/"))
        .json(payload)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(server_error("Failed to create category", response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Delete category
pub async fn delete_category(id: i64) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/api/inventory/categories/{}/", id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete category: {}", response.status()));
    }

    Ok(())
}

/// Fetch inventory summary statistics
pub async fn fetch_summary() -> Result<InventorySummary, String> {
    let response = Request::get(&api_url("/api/inventory/summary/"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Failed to fetch inventory summary: {}",
            response.status()
        ));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
