use crate::config::Config;
use crate::entities::admin_user;
use crate::services::admin_service::AdminService;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

/// Creates the panel admin on first boot. Credentials come from the
/// environment; an existing row is left untouched.
pub async fn seed_admin_user(db: &DatabaseConnection, config: &Config) -> Result<(), String> {
    let exists = admin_user::Entity::find()
        .filter(admin_user::Column::Username.eq(&config.admin_username))
        .one(db)
        .await
        .map_err(|e| e.to_string())?;

    if exists.is_none() {
        println!("🚀 Creating Admin User...");

        let hashed_password =
            AdminService::hash_password(&config.admin_password).map_err(|e| e.to_string())?;

        let new_admin = admin_user::ActiveModel {
            public_id: Set(Uuid::now_v7()),
            username: Set(config.admin_username.clone()),
            email: Set(config.admin_email.clone()),
            password_hash: Set(hashed_password),
            is_active: Set(true),
            created_at: Set(Utc::now()),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };
        new_admin.insert(db).await.map_err(|e| e.to_string())?;

        println!("✅ Admin User Created! (User: {})", config.admin_username);
    }

    Ok(())
}
