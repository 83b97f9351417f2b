// src/handlers/customers.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
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
            PermAddCustomer, PermChangeCustomer, PermDeleteCustomer, PermViewCustomer,
            RequirePermission,
        },
    },
    models::customer::{Customer, CustomerCreatePrefill},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPayload {
    pub lead_id: Uuid,
    pub ads_id: Uuid,
    pub contract_id: Option<Uuid>,
    pub comment: Option<String>,
}

// GET /customers/
#[utoipa::path(
    get,
    path = "/customers/",
    tag = "Customers",
    responses(
        (status = 200, description = "Lista de clientes", body = Vec<Customer>),
        (status = 403, description = "Sem a permissão view_customer")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_customers(
    State(app_state): State<AppState>,
    _perm: RequirePermission<PermViewCustomer>,
) -> Result<impl IntoResponse, AppError> {
    let customers = app_state.customer_service.list().await?;
    Ok((StatusCode::OK, Json(customers)))
}

// GET /customers/new/
#[utoipa::path(
    get,
    path = "/customers/new/",
    tag = "Customers",
    responses(
        (status = 200, description = "Pré-preenchimento do formulário", body = CustomerCreatePrefill)
    ),
    security(("api_jwt" = []))
)]
pub async fn create_customer_form(
    State(app_state): State<AppState>,
    _perm: RequirePermission<PermAddCustomer>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let prefill = app_state
        .customer_service
        .prefill_create_form(&app_state.handoff, user.0.id)
        .await?;
    Ok((StatusCode::OK, Json(prefill)))
}

// GET /customers/{id}/
#[utoipa::path(
    get,
    path = "/customers/{id}/",
    tag = "Customers",
    params(("id" = Uuid, Path, description = "ID do cliente")),
    responses(
        (status = 200, description = "Detalhe do cliente", body = Customer),
        (status = 404, description = "Cliente não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_customer(
    State(app_state): State<AppState>,
    _perm: RequirePermission<PermViewCustomer>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let customer = app_state.customer_service.get(id).await?;
    Ok((StatusCode::OK, Json(customer)))
}

// POST /customers/new/
//
// O caminho que promove o lead: ativação + INSERT numa transação só.
#[utoipa::path(
    post,
    path = "/customers/new/",
    tag = "Customers",
    request_body = CustomerPayload,
    responses(
        (status = 302, description = "Criado; redireciona para a listagem"),
        (status = 400, description = "Dados inválidos ou inconsistentes entre si")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_customer(
    State(app_state): State<AppState>,
    _perm: RequirePermission<PermAddCustomer>,
    Json(payload): Json<CustomerPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    app_state
        .customer_service
        .create(
            payload.lead_id,
            payload.ads_id,
            payload.contract_id,
            payload.comment.as_deref(),
        )
        .await?;

    Ok(redirect_to("/customers/"))
}

// POST /customers/{id}/edit/
#[utoipa::path(
    post,
    path = "/customers/{id}/edit/",
    tag = "Customers",
    params(("id" = Uuid, Path, description = "ID do cliente")),
    request_body = CustomerPayload,
    responses(
        (status = 302, description = "Atualizado; redireciona para a listagem"),
        (status = 400, description = "Dados inválidos ou inconsistentes entre si"),
        (status = 404, description = "Cliente não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_customer(
    State(app_state): State<AppState>,
    _perm: RequirePermission<PermChangeCustomer>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CustomerPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    app_state
        .customer_service
        .update(
            id,
            payload.lead_id,
            payload.ads_id,
            payload.contract_id,
            payload.comment.as_deref(),
        )
        .await?;

    Ok(redirect_to("/customers/"))
}

// POST /customers/{id}/delete/
#[utoipa::path(
    post,
    path = "/customers/{id}/delete/",
    tag = "Customers",
    params(("id" = Uuid, Path, description = "ID do cliente")),
    responses(
        (status = 302, description = "Removido; redireciona para a listagem"),
        (status = 404, description = "Cliente não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_customer(
    State(app_state): State<AppState>,
    _perm: RequirePermission<PermDeleteCustomer>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.customer_service.delete(id).await?;
    Ok(redirect_to("/customers/"))
}
