use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use contracts::dashboards::d100_sales_overview::{
    AllSalesResponse, SalesErrorResponse, SalesQuery, YearSalesResponse,
};

use crate::dashboards::d100_sales_overview::{
    dataset,
    service::{self, SalesQueryError, SalesQueryResult},
};

/// GET /api/sales?year=2024
///
/// Without `year` returns every year keyed by year. A repeated `year`
/// resolves to its first value.
pub async fn get_sales(Query(pairs): Query<Vec<(String, String)>>) -> Response {
    let request = SalesQuery::from_pairs(pairs);

    let dataset = match dataset::sales_dataset() {
        Ok(dataset) => dataset,
        Err(e) => {
            tracing::error!("D100 Sales: dataset unavailable: {}", e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    match service::query(dataset, request.year_key()) {
        Ok(result) => {
            tracing::info!(
                "D100 Sales: returning {} rows for {}",
                result.row_count(),
                request.year_key().unwrap_or("all years")
            );
            match result {
                SalesQueryResult::Year {
                    entries,
                    year,
                    years,
                } => Json(YearSalesResponse {
                    data: entries,
                    year,
                    years,
                })
                .into_response(),
                SalesQueryResult::All { entries, years } => Json(AllSalesResponse {
                    data: entries,
                    years,
                })
                .into_response(),
            }
        }
        Err(SalesQueryError::NotFound(year)) => {
            tracing::warn!("D100 Sales: year {} not found", year);
            (
                StatusCode::NOT_FOUND,
                Json(SalesErrorResponse::year_not_found()),
            )
                .into_response()
        }
    }
}
