// src/services/auth.rs

use bcrypt::{hash, verify};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::UserRepository,
    models::auth::{Claims, User},
};

// Tokens valem por um dia; depois disso é login de novo.
const TOKEN_TTL_HOURS: i64 = 24;

pub fn create_token(jwt_secret: &str, user_id: Uuid) -> Result<String, AppError> {
    let claims = Claims {
        sub: user_id,
        exp: (Utc::now() + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )?;
    Ok(token)
}

pub fn decode_token(jwt_secret: &str, token: &str) -> Result<Claims, AppError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AppError::InvalidToken)?;
    Ok(data.claims)
}

#[derive(Clone)]
pub struct AuthService {
    user_repo: UserRepository,
    jwt_secret: String,
}

impl AuthService {
    pub fn new(user_repo: UserRepository, jwt_secret: String) -> Self {
        Self { user_repo, jwt_secret }
    }

    pub async fn register_user(&self, full_name: &str, password: &str) -> Result<String, AppError> {
        // O hashing é pesado, então sai da thread do runtime.
        let password_clone = password.to_owned();
        let hashed_password =
            tokio::task::spawn_blocking(move || hash(&password_clone, bcrypt::DEFAULT_COST))
                .await
                .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;

        let new_user = self.user_repo.create_user(full_name, &hashed_password).await?;

        create_token(&self.jwt_secret, new_user.id)
    }

    pub async fn login_user(&self, full_name: &str, password: &str) -> Result<String, AppError> {
        let user = self
            .user_repo
            .find_by_full_name(full_name)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !user.is_active {
            return Err(AppError::InactiveUser);
        }

        let password_clone = password.to_owned();
        let hash_clone = user.password_hash.clone();
        let valid = tokio::task::spawn_blocking(move || verify(&password_clone, &hash_clone))
            .await
            .map_err(|e| anyhow::anyhow!("Falha na task de verificação: {}", e))??;

        if !valid {
            return Err(AppError::InvalidCredentials);
        }

        create_token(&self.jwt_secret, user.id)
    }

    /// Valida o bearer token e carrega o usuário correspondente.
    pub async fn validate_token(&self, token: &str) -> Result<User, AppError> {
        let claims = decode_token(&self.jwt_secret, token)?;

        let user = self
            .user_repo
            .find_by_id(claims.sub)
            .await?
            .ok_or(AppError::InvalidToken)?;

        if !user.is_active {
            return Err(AppError::InactiveUser);
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_vai_e_volta() {
        let user_id = Uuid::new_v4();
        let token = create_token("segredo-de-teste", user_id).unwrap();
        let claims = decode_token("segredo-de-teste", &token).unwrap();
        assert_eq!(claims.sub, user_id);
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn segredo_errado_e_rejeitado() {
        let token = create_token("segredo-a", Uuid::new_v4()).unwrap();
        let err = decode_token("segredo-b", &token).unwrap_err();
        assert!(matches!(err, AppError::InvalidToken));
    }

    #[test]
    fn lixo_e_rejeitado() {
        let err = decode_token("segredo", "nem.um.jwt").unwrap_err();
        assert!(matches!(err, AppError::InvalidToken));
    }
}
