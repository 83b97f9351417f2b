// src/handlers/leads.rs

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
    common::{
        error::AppError,
        handoff::HandoffKey,
        validators::{NAME_RE, PHONE_RE},
    },
    config::AppState,
    handlers::redirect_to,
    middleware::{
        auth::AuthenticatedUser,
        rbac::{
            PermAddContract, PermAddLead, PermChangeLead, PermDeleteLead,
            PermTransferLeadToActive, PermViewLead, RequirePermission,
        },
    },
    models::lead::Lead,
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeadPayload {
    #[validate(
        length(min = 1, max = 150, message = "O nome deve ter entre 1 e 150 caracteres."),
        regex(path = *NAME_RE, message = "Informe um nome válido: apenas letras e espaços.")
    )]
    #[schema(example = "Maria")]
    pub first_name: String,

    #[validate(
        length(min = 1, max = 150, message = "O sobrenome deve ter entre 1 e 150 caracteres."),
        regex(path = *NAME_RE, message = "Informe um nome válido: apenas letras e espaços.")
    )]
    #[schema(example = "Silva")]
    pub last_name: String,

    #[validate(email(message = "Informe um e-mail válido."))]
    #[schema(example = "maria@email.com")]
    pub email: Option<String>,

    #[validate(regex(
        path = *PHONE_RE,
        message = "Informe um telefone válido: código do país e 10 dígitos."
    ))]
    #[schema(example = "+5511987654321")]
    pub phone: String,

    pub ads_id: Uuid,

    pub comment: Option<String>,
}

// GET /leads/
//
// Só os leads ainda não convertidos aparecem aqui.
#[utoipa::path(
    get,
    path = "/leads/",
    tag = "Leads",
    responses(
        (status = 200, description = "Leads não convertidos", body = Vec<Lead>),
        (status = 403, description = "Sem a permissão view_lead")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_leads(
    State(app_state): State<AppState>,
    _perm: RequirePermission<PermViewLead>,
) -> Result<impl IntoResponse, AppError> {
    let leads = app_state.lead_service.list().await?;
    Ok((StatusCode::OK, Json(leads)))
}

// GET /leads/{id}/
#[utoipa::path(
    get,
    path = "/leads/{id}/",
    tag = "Leads",
    params(("id" = Uuid, Path, description = "ID do lead")),
    responses(
        (status = 200, description = "Detalhe do lead", body = Lead),
        (status = 404, description = "Lead não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_lead(
    State(app_state): State<AppState>,
    _perm: RequirePermission<PermViewLead>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let lead = app_state.lead_service.get(id).await?;
    Ok((StatusCode::OK, Json(lead)))
}

// POST /leads/new/
#[utoipa::path(
    post,
    path = "/leads/new/",
    tag = "Leads",
    request_body = LeadPayload,
    responses(
        (status = 302, description = "Criado; redireciona para a listagem"),
        (status = 400, description = "Dados inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_lead(
    State(app_state): State<AppState>,
    _perm: RequirePermission<PermAddLead>,
    Json(payload): Json<LeadPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    app_state
        .lead_service
        .create(
            &payload.first_name,
            &payload.last_name,
            payload.email.as_deref(),
            &payload.phone,
            payload.ads_id,
            payload.comment.as_deref(),
        )
        .await?;

    Ok(redirect_to("/leads/"))
}

// POST /leads/{id}/edit/
//
// `to_active` não entra no payload: a promoção só acontece pela criação
// de um cliente.
#[utoipa::path(
    post,
    path = "/leads/{id}/edit/",
    tag = "Leads",
    params(("id" = Uuid, Path, description = "ID do lead")),
    request_body = LeadPayload,
    responses(
        (status = 302, description = "Atualizado; redireciona para a listagem"),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Lead não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_lead(
    State(app_state): State<AppState>,
    _perm: RequirePermission<PermChangeLead>,
    Path(id): Path<Uuid>,
    Json(payload): Json<LeadPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    app_state
        .lead_service
        .update(
            id,
            &payload.first_name,
            &payload.last_name,
            payload.email.as_deref(),
            &payload.phone,
            payload.ads_id,
            payload.comment.as_deref(),
        )
        .await?;

    Ok(redirect_to("/leads/"))
}

// POST /leads/{id}/delete/
#[utoipa::path(
    post,
    path = "/leads/{id}/delete/",
    tag = "Leads",
    params(("id" = Uuid, Path, description = "ID do lead")),
    responses(
        (status = 302, description = "Removido; redireciona para a listagem"),
        (status = 404, description = "Lead não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_lead(
    State(app_state): State<AppState>,
    _perm: RequirePermission<PermDeleteLead>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.lead_service.delete(id).await?;
    Ok(redirect_to("/leads/"))
}

// GET /leads/{id}/to_active/
//
// Repassa o lead para o formulário de criação de cliente.
#[utoipa::path(
    get,
    path = "/leads/{id}/to_active/",
    tag = "Leads",
    params(("id" = Uuid, Path, description = "ID do lead")),
    responses(
        (status = 302, description = "Redireciona para /customers/new/ com o lead pré-selecionado")
    ),
    security(("api_jwt" = []))
)]
pub async fn transfer_to_active(
    State(app_state): State<AppState>,
    _perm: RequirePermission<PermTransferLeadToActive>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.handoff.stage(user.0.id, HandoffKey::LeadId, id);
    Ok(redirect_to("/customers/new/"))
}

// GET /leads/{id}/to_contract/
//
// Repassa o lead para o formulário de criação de contrato. Exige a
// permissão de criar contrato.
#[utoipa::path(
    get,
    path = "/leads/{id}/to_contract/",
    tag = "Leads",
    params(("id" = Uuid, Path, description = "ID do lead")),
    responses(
        (status = 302, description = "Redireciona para /contracts/new/ com o lead pré-selecionado")
    ),
    security(("api_jwt" = []))
)]
pub async fn transfer_to_contract(
    State(app_state): State<AppState>,
    _perm: RequirePermission<PermAddContract>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.handoff.stage(user.0.id, HandoffKey::LeadId, id);
    Ok(redirect_to("/contracts/new/"))
}
