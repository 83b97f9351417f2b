// src/handlers/products.rs

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
    common::{error::AppError, handoff::HandoffKey},
    config::AppState,
    handlers::redirect_to,
    middleware::{
        auth::AuthenticatedUser,
        rbac::{
            PermAddAds, PermAddProduct, PermChangeProduct, PermDeleteProduct, PermViewProduct,
            RequirePermission,
        },
    },
    models::product::Product,
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    #[validate(length(min = 1, max = 150, message = "O nome deve ter entre 1 e 150 caracteres."))]
    #[schema(example = "Consultoria")]
    pub name: String,

    pub description: String,

    #[schema(value_type = f64, example = 100.0)]
    pub price: Decimal,
}

// GET /products/
#[utoipa::path(
    get,
    path = "/products/",
    tag = "Products",
    responses(
        (status = 200, description = "Lista de serviços", body = Vec<Product>),
        (status = 403, description = "Sem a permissão view_product")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_products(
    State(app_state): State<AppState>,
    _perm: RequirePermission<PermViewProduct>,
) -> Result<impl IntoResponse, AppError> {
    let products = app_state.product_service.list().await?;
    Ok((StatusCode::OK, Json(products)))
}

// GET /products/{id}/
#[utoipa::path(
    get,
    path = "/products/{id}/",
    tag = "Products",
    params(("id" = Uuid, Path, description = "ID do serviço")),
    responses(
        (status = 200, description = "Detalhe do serviço", body = Product),
        (status = 404, description = "Serviço não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_product(
    State(app_state): State<AppState>,
    _perm: RequirePermission<PermViewProduct>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let product = app_state.product_service.get(id).await?;
    Ok((StatusCode::OK, Json(product)))
}

// POST /products/new/
#[utoipa::path(
    post,
    path = "/products/new/",
    tag = "Products",
    request_body = ProductPayload,
    responses(
        (status = 302, description = "Criado; redireciona para a listagem"),
        (status = 400, description = "Dados inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_product(
    State(app_state): State<AppState>,
    _perm: RequirePermission<PermAddProduct>,
    Json(payload): Json<ProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    app_state
        .product_service
        .create(&payload.name, &payload.description, payload.price)
        .await?;

    Ok(redirect_to("/products/"))
}

// POST /products/{id}/edit/
#[utoipa::path(
    post,
    path = "/products/{id}/edit/",
    tag = "Products",
    params(("id" = Uuid, Path, description = "ID do serviço")),
    request_body = ProductPayload,
    responses(
        (status = 302, description = "Atualizado; redireciona para a listagem"),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Serviço não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_product(
    State(app_state): State<AppState>,
    _perm: RequirePermission<PermChangeProduct>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    app_state
        .product_service
        .update(id, &payload.name, &payload.description, payload.price)
        .await?;

    Ok(redirect_to("/products/"))
}

// POST /products/{id}/delete/
#[utoipa::path(
    post,
    path = "/products/{id}/delete/",
    tag = "Products",
    params(("id" = Uuid, Path, description = "ID do serviço")),
    responses(
        (status = 302, description = "Removido; redireciona para a listagem"),
        (status = 404, description = "Serviço não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_product(
    State(app_state): State<AppState>,
    _perm: RequirePermission<PermDeleteProduct>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.product_service.delete(id).await?;
    Ok(redirect_to("/products/"))
}

// GET /products/{id}/to_ads/
//
// Ação de transferência: grava o product_id no slot de repasse e manda
// o usuário para o formulário de criação de campanha. Exige a permissão
// de CRIAR campanha, não a de ver serviço.
#[utoipa::path(
    get,
    path = "/products/{id}/to_ads/",
    tag = "Products",
    params(("id" = Uuid, Path, description = "ID do serviço")),
    responses(
        (status = 302, description = "Redireciona para /ads/new/ com o serviço pré-selecionado")
    ),
    security(("api_jwt" = []))
)]
pub async fn transfer_to_ads(
    State(app_state): State<AppState>,
    _perm: RequirePermission<PermAddAds>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.handoff.stage(user.0.id, HandoffKey::ProductId, id);
    Ok(redirect_to("/ads/new/"))
}
