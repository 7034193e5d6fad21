use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 1. Contact Submissions Table
        manager.create_table(
            Table::create()
                .table(ContactSubmissions::Table)
                .if_not_exists()
                .col(ColumnDef::new(ContactSubmissions::Id).big_integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(ContactSubmissions::PublicId).uuid().not_null().unique_key())
                .col(ColumnDef::new(ContactSubmissions::BrideName).string().not_null())
                .col(ColumnDef::new(ContactSubmissions::GroomName).string().not_null())
                .col(ColumnDef::new(ContactSubmissions::Phone).string().not_null())
                .col(ColumnDef::new(ContactSubmissions::Email).string().not_null())
                .col(ColumnDef::new(ContactSubmissions::WeddingDate).string().not_null())
                .col(ColumnDef::new(ContactSubmissions::Location).string().not_null())
                .col(ColumnDef::new(ContactSubmissions::Services).array(ColumnType::Text).not_null())
                .col(ColumnDef::new(ContactSubmissions::AdditionalInfo).text().null())
                .col(ColumnDef::new(ContactSubmissions::Attachments).array(ColumnType::Text).not_null())
                .col(ColumnDef::new(ContactSubmissions::TotalPrice).integer().not_null().default(0))
                .col(ColumnDef::new(ContactSubmissions::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .to_owned(),
        ).await?;

        // 2. Portfolio Items Table
        manager.create_table(
            Table::create()
                .table(PortfolioItems::Table)
                .if_not_exists()
                .col(ColumnDef::new(PortfolioItems::Id).big_integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(PortfolioItems::PublicId).uuid().not_null().unique_key())
                .col(ColumnDef::new(PortfolioItems::CategoryName).string().not_null())
                .col(ColumnDef::new(PortfolioItems::CategoryPreview).text().null())
                .col(ColumnDef::new(PortfolioItems::PhotoThumbnail).text().null())
                .col(ColumnDef::new(PortfolioItems::Photos).array(ColumnType::Text).not_null())
                .col(ColumnDef::new(PortfolioItems::VideoThumbnail).text().null())
                .col(ColumnDef::new(PortfolioItems::VideoUrl).text().null())
                .col(ColumnDef::new(PortfolioItems::IsPublished).boolean().not_null().default(true))
                .col(ColumnDef::new(PortfolioItems::OrderIndex).integer().not_null().default(0))
                .col(ColumnDef::new(PortfolioItems::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .col(ColumnDef::new(PortfolioItems::UpdatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .to_owned(),
        ).await?;

        // 3. Admin Users Table
        manager.create_table(
            Table::create()
                .table(AdminUsers::Table)
                .if_not_exists()
                .col(ColumnDef::new(AdminUsers::Id).big_integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(AdminUsers::PublicId).uuid().not_null().unique_key())
                .col(ColumnDef::new(AdminUsers::Username).string_len(100).not_null().unique_key())
                .col(ColumnDef::new(AdminUsers::Email).string_len(255).not_null().unique_key())
                .col(ColumnDef::new(AdminUsers::PasswordHash).string_len(255).not_null())
                .col(ColumnDef::new(AdminUsers::IsActive).boolean().not_null().default(true))
                .col(ColumnDef::new(AdminUsers::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .col(ColumnDef::new(AdminUsers::UpdatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .to_owned(),
        ).await?;

        // 4. Booked Dates Table
        manager.create_table(
            Table::create()
                .table(BookedDates::Table)
                .if_not_exists()
                .col(ColumnDef::new(BookedDates::Id).big_integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(BookedDates::PublicId).uuid().not_null().unique_key())
                .col(ColumnDef::new(BookedDates::Date).string().not_null().unique_key())
                .col(ColumnDef::new(BookedDates::Description).text().null())
                .col(ColumnDef::new(BookedDates::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .to_owned(),
        ).await?;

        // Index for the public portfolio listing (published, ordered)
        manager.create_index(
            Index::create()
                .name("idx_portfolio_items_published_order")
                .table(PortfolioItems::Table)
                .col(PortfolioItems::IsPublished)
                .col(PortfolioItems::OrderIndex)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(BookedDates::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(AdminUsers::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(PortfolioItems::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(ContactSubmissions::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum ContactSubmissions {
    Table,
    Id,
    PublicId,
    BrideName,
    GroomName,
    Phone,
    Email,
    WeddingDate,
    Location,
    Services,
    AdditionalInfo,
    Attachments,
    TotalPrice,
    CreatedAt,
}

#[derive(DeriveIden)]
enum PortfolioItems {
    Table,
    Id,
    PublicId,
    CategoryName,
    CategoryPreview,
    PhotoThumbnail,
    Photos,
    VideoThumbnail,
    VideoUrl,
    IsPublished,
    OrderIndex,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum AdminUsers {
    Table,
    Id,
    PublicId,
    Username,
    Email,
    PasswordHash,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum BookedDates {
    Table,
    Id,
    PublicId,
    Date,
    Description,
    CreatedAt,
}
