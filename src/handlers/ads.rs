// src/handlers/ads.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    handlers::redirect_to,
    middleware::{
        auth::AuthenticatedUser,
        rbac::{PermAddAds, PermChangeAds, PermDeleteAds, PermViewAds, RequirePermission},
    },
    models::ads::{Ads, AdsCreatePrefill, AdsStatistic, PromotionChannel},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdsPayload {
    #[validate(length(min = 1, max = 150, message = "O nome deve ter entre 1 e 150 caracteres."))]
    #[schema(example = "Campanha de verão")]
    pub name: String,

    pub product_id: Uuid,

    // Canal padrão: internet, como no modelo original.
    #[serde(default)]
    pub promotion_channel: PromotionChannel,

    pub description: String,

    #[schema(value_type = f64, example = 5000.0)]
    pub budget: Decimal,
}

// GET /ads/
#[utoipa::path(
    get,
    path = "/ads/",
    tag = "Ads",
    responses(
        (status = 200, description = "Lista de campanhas", body = Vec<Ads>),
        (status = 403, description = "Sem a permissão view_ads")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_ads(
    State(app_state): State<AppState>,
    _perm: RequirePermission<PermViewAds>,
) -> Result<impl IntoResponse, AppError> {
    let ads = app_state.ads_service.list().await?;
    Ok((StatusCode::OK, Json(ads)))
}

// GET /ads/new/
//
// Formulário de criação. Consome o slot de repasse Product -> Ads; se
// ninguém repassou nada (ou o TTL venceu), o formulário vem vazio.
#[utoipa::path(
    get,
    path = "/ads/new/",
    tag = "Ads",
    responses(
        (status = 200, description = "Pré-preenchimento do formulário", body = AdsCreatePrefill)
    ),
    security(("api_jwt" = []))
)]
pub async fn create_ads_form(
    State(app_state): State<AppState>,
    _perm: RequirePermission<PermAddAds>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let prefill = app_state
        .ads_service
        .prefill_create_form(&app_state.handoff, user.0.id)
        .await?;
    Ok((StatusCode::OK, Json(prefill)))
}

// GET /ads/{id}/
#[utoipa::path(
    get,
    path = "/ads/{id}/",
    tag = "Ads",
    params(("id" = Uuid, Path, description = "ID da campanha")),
    responses(
        (status = 200, description = "Detalhe da campanha", body = Ads),
        (status = 404, description = "Campanha não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_ads(
    State(app_state): State<AppState>,
    _perm: RequirePermission<PermViewAds>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let ads = app_state.ads_service.get(id).await?;
    Ok((StatusCode::OK, Json(ads)))
}

// POST /ads/new/
#[utoipa::path(
    post,
    path = "/ads/new/",
    tag = "Ads",
    request_body = AdsPayload,
    responses(
        (status = 302, description = "Criada; redireciona para a listagem"),
        (status = 400, description = "Dados inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_ads(
    State(app_state): State<AppState>,
    _perm: RequirePermission<PermAddAds>,
    Json(payload): Json<AdsPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    app_state
        .ads_service
        .create(
            &payload.name,
            payload.product_id,
            payload.promotion_channel,
            &payload.description,
            payload.budget,
        )
        .await?;

    Ok(redirect_to("/ads/"))
}

// POST /ads/{id}/edit/
#[utoipa::path(
    post,
    path = "/ads/{id}/edit/",
    tag = "Ads",
    params(("id" = Uuid, Path, description = "ID da campanha")),
    request_body = AdsPayload,
    responses(
        (status = 302, description = "Atualizada; redireciona para a listagem"),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Campanha não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_ads(
    State(app_state): State<AppState>,
    _perm: RequirePermission<PermChangeAds>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AdsPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    app_state
        .ads_service
        .update(
            id,
            &payload.name,
            payload.product_id,
            payload.promotion_channel,
            &payload.description,
            payload.budget,
        )
        .await?;

    Ok(redirect_to("/ads/"))
}

// POST /ads/{id}/delete/
#[utoipa::path(
    post,
    path = "/ads/{id}/delete/",
    tag = "Ads",
    params(("id" = Uuid, Path, description = "ID da campanha")),
    responses(
        (status = 302, description = "Removida; redireciona para a listagem"),
        (status = 404, description = "Campanha não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_ads(
    State(app_state): State<AppState>,
    _perm: RequirePermission<PermDeleteAds>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.ads_service.delete(id).await?;
    Ok(redirect_to("/ads/"))
}

// GET /ads/statistic/
//
// Página de estatísticas: basta estar logado, sem permissão específica.
#[utoipa::path(
    get,
    path = "/ads/statistic/",
    tag = "Ads",
    responses(
        (status = 200, description = "Desempenho por campanha", body = Vec<AdsStatistic>)
    ),
    security(("api_jwt" = []))
)]
pub async fn ads_statistic(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let stats = app_state.ads_service.statistics().await?;
    Ok((StatusCode::OK, Json(stats)))
}
