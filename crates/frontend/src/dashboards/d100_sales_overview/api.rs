use crate::shared::api_utils::api_url;
use contracts::dashboards::d100_sales_overview::YearSalesResponse;
use gloo_net::http::Request;
use thiserror::Error;

/// Ошибки загрузки данных о продажах
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Network(String),

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Получить продажи за год
pub async fn get_year_sales(year: &str) -> Result<YearSalesResponse, FetchError> {
    let url = api_url(&format!("/api/sales?year={}", urlencoding::encode(year)));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    Ok(serde_json::from_str::<YearSalesResponse>(&text)?)
}
