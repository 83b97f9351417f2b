// src/common/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::collections::HashMap;
use thiserror::Error;

// Nosso tipo de erro central, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    /// Erro de validação cruzada entre entidades, preso a um campo do
    /// formulário (ex.: serviço que não bate com a campanha).
    #[error("Campo inválido: {field}")]
    FieldError { field: &'static str, message: String },

    #[error("{0} não encontrado")]
    NotFound(&'static str),

    #[error("Nome completo já existe")]
    FullNameAlreadyExists,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Token inválido")]
    InvalidToken,

    #[error("Usuário desativado")]
    InactiveUser,

    #[error("Permissão '{0}' necessária")]
    PermissionDenied(String),

    // Variante para erros de banco de dados
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }

            // Mesmo formato dos erros de formulário: o front renderiza a
            // mensagem junto ao campo, nunca como falha dura.
            AppError::FieldError { field, message } => {
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": { field: [message] },
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }

            AppError::NotFound(entity) => {
                let body = Json(json!({ "error": format!("{entity} não encontrado.") }));
                return (StatusCode::NOT_FOUND, body).into_response();
            }

            AppError::PermissionDenied(perm) => {
                let body = Json(json!({
                    "error": format!("Você precisa da permissão '{perm}' para realizar esta ação."),
                }));
                return (StatusCode::FORBIDDEN, body).into_response();
            }

            AppError::FullNameAlreadyExists => {
                (StatusCode::CONFLICT, "Este nome completo já está em uso.")
            }
            AppError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Nome ou senha inválidos.")
            }
            AppError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "Token de autenticação inválido ou ausente.",
            ),
            AppError::InactiveUser => (StatusCode::FORBIDDEN, "Usuário desativado."),

            // Todos os outros erros (DatabaseError, InternalServerError) viram 500.
            ref e => {
                tracing::error!("Erro interno do servidor: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Ocorreu um erro inesperado.")
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_error_vira_400_com_detalhes() {
        let err = AppError::FieldError {
            field: "product",
            message: "não corresponde".into(),
        };
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn permissao_negada_vira_403() {
        let err = AppError::PermissionDenied("view_product".into());
        assert_eq!(err.into_response().status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn nao_encontrado_vira_404() {
        assert_eq!(
            AppError::NotFound("Lead").into_response().status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn token_invalido_vira_401() {
        assert_eq!(
            AppError::InvalidToken.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
    }
}
