// src/handlers/contracts.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
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
        rbac::{
            PermAddContract, PermChangeContract, PermDeleteContract, PermViewContract,
            RequirePermission,
        },
    },
    models::contract::{Contract, ContractCreatePrefill},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContractPayload {
    #[validate(length(min = 1, max = 150, message = "O nome deve ter entre 1 e 150 caracteres."))]
    #[schema(example = "Contrato de consultoria")]
    pub name: String,

    pub lead_id: Uuid,
    pub ads_id: Uuid,
    pub product_id: Uuid,

    /// Caminho do scan do contrato, se já tiver sido arquivado.
    pub document: Option<String>,
    pub comment: Option<String>,

    #[schema(value_type = f64, example = 1500.0)]
    pub cost: Decimal,

    #[schema(value_type = String, format = Date, example = "2024-05-01")]
    pub conclusion_day: NaiveDate,
    #[schema(value_type = String, format = Date, example = "2024-05-10")]
    pub start_day: NaiveDate,
    #[schema(value_type = String, format = Date, example = "2024-11-10")]
    pub end_day: NaiveDate,
}

// GET /contracts/
#[utoipa::path(
    get,
    path = "/contracts/",
    tag = "Contracts",
    responses(
        (status = 200, description = "Lista de contratos", body = Vec<Contract>),
        (status = 403, description = "Sem a permissão view_contract")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_contracts(
    State(app_state): State<AppState>,
    _perm: RequirePermission<PermViewContract>,
) -> Result<impl IntoResponse, AppError> {
    let contracts = app_state.contract_service.list().await?;
    Ok((StatusCode::OK, Json(contracts)))
}

// GET /contracts/new/
//
// Consome o slot Lead -> Contract e devolve lead, campanha e serviço
// pré-selecionados; slot vazio ou vencido devolve tudo `null`.
#[utoipa::path(
    get,
    path = "/contracts/new/",
    tag = "Contracts",
    responses(
        (status = 200, description = "Pré-preenchimento do formulário", body = ContractCreatePrefill)
    ),
    security(("api_jwt" = []))
)]
pub async fn create_contract_form(
    State(app_state): State<AppState>,
    _perm: RequirePermission<PermAddContract>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let prefill = app_state
        .contract_service
        .prefill_create_form(&app_state.handoff, user.0.id)
        .await?;
    Ok((StatusCode::OK, Json(prefill)))
}

// GET /contracts/{id}/
#[utoipa::path(
    get,
    path = "/contracts/{id}/",
    tag = "Contracts",
    params(("id" = Uuid, Path, description = "ID do contrato")),
    responses(
        (status = 200, description = "Detalhe do contrato", body = Contract),
        (status = 404, description = "Contrato não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_contract(
    State(app_state): State<AppState>,
    _perm: RequirePermission<PermViewContract>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let contract = app_state.contract_service.get(id).await?;
    Ok((StatusCode::OK, Json(contract)))
}

// POST /contracts/new/
#[utoipa::path(
    post,
    path = "/contracts/new/",
    tag = "Contracts",
    request_body = ContractPayload,
    responses(
        (status = 302, description = "Criado; redireciona para a listagem"),
        (status = 400, description = "Dados inválidos ou inconsistentes entre si")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_contract(
    State(app_state): State<AppState>,
    _perm: RequirePermission<PermAddContract>,
    Json(payload): Json<ContractPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    app_state
        .contract_service
        .create(
            &payload.name,
            payload.lead_id,
            payload.ads_id,
            payload.product_id,
            payload.document.as_deref(),
            payload.comment.as_deref(),
            payload.cost,
            payload.conclusion_day,
            payload.start_day,
            payload.end_day,
        )
        .await?;

    Ok(redirect_to("/contracts/"))
}

// POST /contracts/{id}/edit/
#[utoipa::path(
    post,
    path = "/contracts/{id}/edit/",
    tag = "Contracts",
    params(("id" = Uuid, Path, description = "ID do contrato")),
    request_body = ContractPayload,
    responses(
        (status = 302, description = "Atualizado; redireciona para a listagem"),
        (status = 400, description = "Dados inválidos ou inconsistentes entre si"),
        (status = 404, description = "Contrato não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_contract(
    State(app_state): State<AppState>,
    _perm: RequirePermission<PermChangeContract>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ContractPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    app_state
        .contract_service
        .update(
            id,
            &payload.name,
            payload.lead_id,
            payload.ads_id,
            payload.product_id,
            payload.document.as_deref(),
            payload.comment.as_deref(),
            payload.cost,
            payload.conclusion_day,
            payload.start_day,
            payload.end_day,
        )
        .await?;

    Ok(redirect_to("/contracts/"))
}

// POST /contracts/{id}/delete/
#[utoipa::path(
    post,
    path = "/contracts/{id}/delete/",
    tag = "Contracts",
    params(("id" = Uuid, Path, description = "ID do contrato")),
    responses(
        (status = 302, description = "Removido; redireciona para a listagem"),
        (status = 404, description = "Contrato não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_contract(
    State(app_state): State<AppState>,
    _perm: RequirePermission<PermDeleteContract>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.contract_service.delete(id).await?;
    Ok(redirect_to("/contracts/"))
}
