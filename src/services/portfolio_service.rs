use crate::entities::portfolio_item;
use crate::models::portfolio_model::{
    CreatePortfolioItemRequest, PortfolioItemResponse, UpdatePortfolioItemRequest,
};
use axum::http::StatusCode;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

pub struct PortfolioService;

impl PortfolioService {
    /// Public listing: published categories only, in display order.
    pub async fn list_published(
        db: &DatabaseConnection,
    ) -> Result<Vec<PortfolioItemResponse>, (StatusCode, &'static str, String)> {
        let items = portfolio_item::Entity::find()
            .filter(portfolio_item::Column::IsPublished.eq(true))
            .order_by_asc(portfolio_item::Column::OrderIndex)
            .all(db)
            .await
            .map_err(|_| {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DB_ERR",
                    "Database error".to_string(),
                )
            })?;

        Ok(items.into_iter().map(Self::map_to_response).collect())
    }

    /// Admin listing: everything, drafts included.
    pub async fn list_all(
        db: &DatabaseConnection,
    ) -> Result<Vec<PortfolioItemResponse>, (StatusCode, &'static str, String)> {
        let items = portfolio_item::Entity::find()
            .order_by_asc(portfolio_item::Column::OrderIndex)
            .all(db)
            .await
            .map_err(|_| {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DB_ERR",
                    "Database error".to_string(),
                )
            })?;

        Ok(items.into_iter().map(Self::map_to_response).collect())
    }

    pub async fn create_item(
        db: &DatabaseConnection,
        payload: CreatePortfolioItemRequest,
    ) -> Result<PortfolioItemResponse, (StatusCode, &'static str, String)> {
        let item = portfolio_item::ActiveModel {
            id: NotSet,
            public_id: Set(Uuid::now_v7()),
            category_name: Set(payload.category_name),
            category_preview: Set(payload.category_preview.filter(|s| !s.is_empty())),
            photo_thumbnail: Set(payload.photo_thumbnail.filter(|s| !s.is_empty())),
            photos: Set(payload.photos),
            video_thumbnail: Set(payload.video_thumbnail.filter(|s| !s.is_empty())),
            video_url: Set(payload.video_url.filter(|s| !s.is_empty())),
            is_published: Set(payload.is_published),
            order_index: Set(payload.order_index),
            created_at: Set(Utc::now()),
            updated_at: Set(Utc::now()),
        };

        let saved = item.insert(db).await.map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DB_WRITE_ERR",
                format!("Failed to create portfolio item: {}", e),
            )
        })?;

        Ok(Self::map_to_response(saved))
    }

    pub async fn update_item(
        db: &DatabaseConnection,
        public_id: Uuid,
        payload: UpdatePortfolioItemRequest,
    ) -> Result<PortfolioItemResponse, (StatusCode, &'static str, String)> {
        let item = Self::find_by_public_id(db, public_id).await?;

        let mut active: portfolio_item::ActiveModel = item.into();

        if let Some(name) = payload.category_name {
            active.category_name = Set(name);
        }
        if let Some(preview) = payload.category_preview {
            active.category_preview = Set(Some(preview).filter(|s| !s.is_empty()));
        }
        if let Some(thumb) = payload.photo_thumbnail {
            active.photo_thumbnail = Set(Some(thumb).filter(|s| !s.is_empty()));
        }
        if let Some(photos) = payload.photos {
            active.photos = Set(photos);
        }
        if let Some(thumb) = payload.video_thumbnail {
            active.video_thumbnail = Set(Some(thumb).filter(|s| !s.is_empty()));
        }
        if let Some(url) = payload.video_url {
            active.video_url = Set(Some(url).filter(|s| !s.is_empty()));
        }
        if let Some(published) = payload.is_published {
            active.is_published = Set(published);
        }
        if let Some(order) = payload.order_index {
            active.order_index = Set(order);
        }
        active.updated_at = Set(Utc::now());

        let updated = active.update(db).await.map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DB_WRITE_ERR",
                format!("Failed to update portfolio item: {}", e),
            )
        })?;

        Ok(Self::map_to_response(updated))
    }

    pub async fn delete_item(
        db: &DatabaseConnection,
        public_id: Uuid,
    ) -> Result<(), (StatusCode, &'static str, String)> {
        let item = Self::find_by_public_id(db, public_id).await?;

        portfolio_item::Entity::delete_by_id(item.id)
            .exec(db)
            .await
            .map_err(|_| {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DB_WRITE_ERR",
                    "Failed to delete portfolio item".to_string(),
                )
            })?;

        Ok(())
    }

    async fn find_by_public_id(
        db: &DatabaseConnection,
        public_id: Uuid,
    ) -> Result<portfolio_item::Model, (StatusCode, &'static str, String)> {
        portfolio_item::Entity::find()
            .filter(portfolio_item::Column::PublicId.eq(public_id))
            .one(db)
            .await
            .map_err(|_| {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DB_ERR",
                    "Database error".to_string(),
                )
            })?
            .ok_or((
                StatusCode::NOT_FOUND,
                "PORTFOLIO_NOT_FOUND",
                "Portfolio item not found".to_string(),
            ))
    }

    fn map_to_response(model: portfolio_item::Model) -> PortfolioItemResponse {
        PortfolioItemResponse {
            id: model.public_id,
            category_name: model.category_name,
            category_preview: model.category_preview,
            photo_thumbnail: model.photo_thumbnail,
            photos: model.photos,
            video_thumbnail: model.video_thumbnail,
            video_url: model.video_url,
            is_published: model.is_published,
            order_index: model.order_index,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
