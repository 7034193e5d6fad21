use crate::entities::booked_date;
use crate::models::booking_model::{BookedDateResponse, CreateBookedDateRequest};
use axum::http::StatusCode;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

pub struct BookingService;

impl BookingService {
    pub async fn list_dates(
        db: &DatabaseConnection,
    ) -> Result<Vec<BookedDateResponse>, (StatusCode, &'static str, String)> {
        let dates = booked_date::Entity::find()
            .order_by_asc(booked_date::Column::Date)
            .all(db)
            .await
            .map_err(|_| {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DB_ERR",
                    "Database error".to_string(),
                )
            })?;

        Ok(dates.into_iter().map(Self::map_to_response).collect())
    }

    pub async fn create_date(
        db: &DatabaseConnection,
        payload: CreateBookedDateRequest,
    ) -> Result<BookedDateResponse, (StatusCode, &'static str, String)> {
        let exists = booked_date::Entity::find()
            .filter(booked_date::Column::Date.eq(&payload.date))
            .one(db)
            .await
            .map_err(|_| {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DB_ERR",
                    "Database error".to_string(),
                )
            })?;

        if exists.is_some() {
            return Err((
                StatusCode::CONFLICT,
                "DATE_ALREADY_BOOKED",
                format!("Date {} is already booked", payload.date),
            ));
        }

        let date = booked_date::ActiveModel {
            id: NotSet,
            public_id: Set(Uuid::now_v7()),
            date: Set(payload.date),
            description: Set(payload.description.filter(|s| !s.is_empty())),
            created_at: Set(Utc::now()),
        };

        let saved = date.insert(db).await.map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DB_WRITE_ERR",
                format!("Failed to save booked date: {}", e),
            )
        })?;

        Ok(Self::map_to_response(saved))
    }

    pub async fn delete_date(
        db: &DatabaseConnection,
        public_id: Uuid,
    ) -> Result<(), (StatusCode, &'static str, String)> {
        let date = booked_date::Entity::find()
            .filter(booked_date::Column::PublicId.eq(public_id))
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
                "DATE_NOT_FOUND",
                "Booked date not found".to_string(),
            ))?;

        booked_date::Entity::delete_by_id(date.id)
            .exec(db)
            .await
            .map_err(|_| {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DB_WRITE_ERR",
                    "Failed to delete booked date".to_string(),
                )
            })?;

        Ok(())
    }

    fn map_to_response(model: booked_date::Model) -> BookedDateResponse {
        BookedDateResponse {
            id: model.public_id,
            date: model.date,
            description: model.description,
            created_at: model.created_at,
        }
    }
}
