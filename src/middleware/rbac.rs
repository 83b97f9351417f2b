// src/middleware/rbac.rs

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use std::marker::PhantomData;

use crate::{common::error::AppError, config::AppState, middleware::auth::AuthenticatedUser};

/// O trait que define o que é uma permissão nomeada.
pub trait PermissionDef: Send + Sync + 'static {
    fn slug() -> &'static str;
}

/// O extractor guardião: falha com 403 se o usuário autenticado não
/// tiver a permissão `T`. Staff tem todas as permissões.
pub struct RequirePermission<T>(pub PhantomData<T>);

impl<T, S> FromRequestParts<S> for RequirePermission<T>
where
    T: PermissionDef,
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        // O auth_guard já rodou; sem usuário aqui é token ausente.
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .ok_or(AppError::InvalidToken)?;

        if user.0.is_staff {
            return Ok(RequirePermission(PhantomData));
        }

        let required_perm = T::slug();
        let has_permission = app_state
            .rbac_repo
            .user_has_permission(user.0.id, required_perm)
            .await?;

        if !has_permission {
            return Err(AppError::PermissionDenied(required_perm.to_owned()));
        }

        Ok(RequirePermission(PhantomData))
    }
}

// ---
// DEFINIÇÃO DAS PERMISSÕES (TIPOS)
// ---

macro_rules! permission {
    ($name:ident, $slug:literal) => {
        pub struct $name;
        impl PermissionDef for $name {
            fn slug() -> &'static str {
                $slug
            }
        }
    };
}

permission!(PermViewProduct, "view_product");
permission!(PermAddProduct, "add_product");
permission!(PermChangeProduct, "change_product");
permission!(PermDeleteProduct, "delete_product");

permission!(PermViewAds, "view_ads");
permission!(PermAddAds, "add_ads");
permission!(PermChangeAds, "change_ads");
permission!(PermDeleteAds, "delete_ads");

permission!(PermViewLead, "view_lead");
permission!(PermAddLead, "add_lead");
permission!(PermChangeLead, "change_lead");
permission!(PermDeleteLead, "delete_lead");
// Transferir um lead para ativo é uma permissão própria, separada do CRUD.
permission!(PermTransferLeadToActive, "can_transfer_to_active");

permission!(PermViewContract, "view_contract");
permission!(PermAddContract, "add_contract");
permission!(PermChangeContract, "change_contract");
permission!(PermDeleteContract, "delete_contract");

permission!(PermViewCustomer, "view_customer");
permission!(PermAddCustomer, "add_customer");
permission!(PermChangeCustomer, "change_customer");
permission!(PermDeleteCustomer, "delete_customer");

/// Catálogo completo, usado pela administração de permissões.
pub const ALL_PERMISSIONS: &[&str] = &[
    "view_product",
    "add_product",
    "change_product",
    "delete_product",
    "view_ads",
    "add_ads",
    "change_ads",
    "delete_ads",
    "view_lead",
    "add_lead",
    "change_lead",
    "delete_lead",
    "can_transfer_to_active",
    "view_contract",
    "add_contract",
    "change_contract",
    "delete_contract",
    "view_customer",
    "add_customer",
    "change_customer",
    "delete_customer",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogo_cobre_os_tipos() {
        assert!(ALL_PERMISSIONS.contains(&PermViewProduct::slug()));
        assert!(ALL_PERMISSIONS.contains(&PermTransferLeadToActive::slug()));
        assert!(ALL_PERMISSIONS.contains(&PermDeleteCustomer::slug()));
        // nenhum slug duplicado
        let mut sorted: Vec<_> = ALL_PERMISSIONS.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), ALL_PERMISSIONS.len());
    }
}
