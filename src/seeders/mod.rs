use crate::config::Config;
use sea_orm::DatabaseConnection;

pub mod admin_seeder;

pub async fn run_seeders(db: &DatabaseConnection, config: &Config) -> Result<(), String> {
    admin_seeder::seed_admin_user(db, config).await?;
    Ok(())
}
