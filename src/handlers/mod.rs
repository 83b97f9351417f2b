pub mod ads;
pub mod auth;
pub mod contracts;
pub mod customers;
pub mod dashboard;
pub mod leads;
pub mod products;
pub mod rbac;

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

/// Sucesso de criação/edição/remoção volta para a listagem da entidade
/// com 302 Found, reproduzindo a navegação original.
pub(crate) fn redirect_to(location: &'static str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}
