// src/handlers/dashboard.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{common::error::AppError, config::AppState, middleware::auth::AuthenticatedUser};

/// Contadores da página inicial.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub products_count: i64,
    pub ads_count: i64,
    pub leads_count: i64,
    pub customers_count: i64,
}

// GET /
//
// Visão geral; basta estar logado.
#[utoipa::path(
    get,
    path = "/",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Contadores gerais", body = DashboardSummary),
        (status = 401, description = "Token inválido ou ausente")
    ),
    security(("api_jwt" = []))
)]
pub async fn index(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let summary = DashboardSummary {
        products_count: app_state.product_service.count().await?,
        ads_count: app_state.ads_service.count().await?,
        leads_count: app_state.lead_service.count().await?,
        customers_count: app_state.customer_service.count().await?,
    };

    Ok((StatusCode::OK, Json(summary)))
}
