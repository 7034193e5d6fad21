use crate::entities::admin_user;
use crate::models::admin_model::AdminInfo;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use axum::http::StatusCode;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

pub struct AdminService;

impl AdminService {
    /// Credential check for the admin login. Unknown usernames, inactive
    /// accounts and bad passwords all answer with the same 401.
    pub async fn verify_login(
        db: &DatabaseConnection,
        username: &str,
        password: &str,
    ) -> Result<admin_user::Model, (StatusCode, &'static str, String)> {
        let admin = admin_user::Entity::find()
            .filter(admin_user::Column::Username.eq(username))
            .one(db)
            .await
            .map_err(|_| {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DB_ERR",
                    "Database error".to_string(),
                )
            })?
            .ok_or_else(Self::invalid_credentials)?;

        if !admin.is_active {
            return Err(Self::invalid_credentials());
        }

        if !Self::verify_password(password, &admin.password_hash) {
            return Err(Self::invalid_credentials());
        }

        Ok(admin)
    }

    pub async fn find_active_by_public_id(
        db: &DatabaseConnection,
        public_id: Uuid,
    ) -> Result<Option<admin_user::Model>, (StatusCode, &'static str, String)> {
        let admin = admin_user::Entity::find()
            .filter(admin_user::Column::PublicId.eq(public_id))
            .one(db)
            .await
            .map_err(|_| {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DB_ERR",
                    "Database error".to_string(),
                )
            })?;

        Ok(admin.filter(|a| a.is_active))
    }

    pub fn hash_password(password: &str) -> Result<String, String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| e.to_string())
    }

    pub fn verify_password(password: &str, hash: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(hash) else {
            return false;
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }

    pub fn map_to_info(admin: &admin_user::Model) -> AdminInfo {
        AdminInfo {
            id: admin.public_id,
            username: admin.username.clone(),
            email: admin.email.clone(),
        }
    }

    fn invalid_credentials() -> (StatusCode, &'static str, String) {
        (
            StatusCode::UNAUTHORIZED,
            "INVALID_CREDENTIALS",
            "Невірні дані для входу".to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_round_trip() {
        let hash = AdminService::hash_password("rus123").expect("hashing succeeds");
        assert!(AdminService::verify_password("rus123", &hash));
        assert!(!AdminService::verify_password("wrong", &hash));
    }

    #[test]
    fn malformed_hash_never_verifies() {
        assert!(!AdminService::verify_password("rus123", "not-a-phc-string"));
    }
}
