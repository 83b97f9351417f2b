// src/handlers/rbac.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::{auth::AuthenticatedUser, rbac::ALL_PERMISSIONS},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GrantPermissionsPayload {
    #[validate(length(min = 1, message = "Informe ao menos uma permissão."))]
    #[schema(example = json!(["view_product", "add_product"]))]
    pub permissions: Vec<String>,
}

// Administração de permissões é coisa de staff.
fn require_staff(user: &AuthenticatedUser) -> Result<(), AppError> {
    if !user.0.is_staff {
        return Err(AppError::PermissionDenied("is_staff".into()));
    }
    Ok(())
}

// GET /permissions
#[utoipa::path(
    get,
    path = "/permissions",
    tag = "RBAC",
    responses(
        (status = 200, description = "Catálogo de permissões", body = Vec<String>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_permissions(
    _user: AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    Ok((StatusCode::OK, Json(ALL_PERMISSIONS)))
}

// GET /users/{id}/permissions
#[utoipa::path(
    get,
    path = "/users/{id}/permissions",
    tag = "RBAC",
    params(("id" = Uuid, Path, description = "ID do usuário")),
    responses(
        (status = 200, description = "Permissões do usuário", body = Vec<String>),
        (status = 403, description = "Somente staff")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_user_permissions(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    require_staff(&user)?;

    let permissions = app_state.rbac_repo.list_for_user(id).await?;
    Ok((StatusCode::OK, Json(permissions)))
}

// POST /users/{id}/permissions
#[utoipa::path(
    post,
    path = "/users/{id}/permissions",
    tag = "RBAC",
    params(("id" = Uuid, Path, description = "ID do usuário")),
    request_body = GrantPermissionsPayload,
    responses(
        (status = 200, description = "Permissões concedidas", body = Vec<String>),
        (status = 400, description = "Permissão desconhecida"),
        (status = 403, description = "Somente staff")
    ),
    security(("api_jwt" = []))
)]
pub async fn grant_user_permissions(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<GrantPermissionsPayload>,
) -> Result<impl IntoResponse, AppError> {
    require_staff(&user)?;
    payload.validate()?;

    // Só entra o que está no catálogo.
    for slug in &payload.permissions {
        if !ALL_PERMISSIONS.contains(&slug.as_str()) {
            return Err(AppError::FieldError {
                field: "permissions",
                message: format!("Permissão desconhecida: '{slug}'."),
            });
        }
    }

    app_state
        .user_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Usuário"))?;

    app_state.rbac_repo.grant(id, &payload.permissions).await?;

    let permissions = app_state.rbac_repo.list_for_user(id).await?;
    Ok((StatusCode::OK, Json(permissions)))
}
