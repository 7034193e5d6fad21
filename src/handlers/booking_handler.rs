use crate::config::AppState;
use crate::models::booking_model::CreateBookedDateRequest;
use crate::services::booking_service::BookingService;
use crate::utils::api_response::ResponseBuilder;
use crate::utils::validated_wrapper::ValidatedJson;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

pub async fn list_booked_dates_handler(State(state): State<AppState>) -> impl IntoResponse {
    match BookingService::list_dates(&state.db).await {
        Ok(dates) => {
            ResponseBuilder::success("BOOKED_DATES_FETCHED", "Success", dates).into_response()
        }
        Err((status, code, message)) => {
            ResponseBuilder::error::<()>(status, code, &message).into_response()
        }
    }
}

pub async fn create_booked_date_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateBookedDateRequest>,
) -> impl IntoResponse {
    match BookingService::create_date(&state.db, payload).await {
        Ok(date) => {
            ResponseBuilder::created("BOOKED_DATE_CREATED", "Date booked", date).into_response()
        }
        Err((status, code, message)) => {
            ResponseBuilder::error::<()>(status, code, &message).into_response()
        }
    }
}

pub async fn delete_booked_date_handler(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> impl IntoResponse {
    match BookingService::delete_date(&state.db, id).await {
        Ok(()) => {
            ResponseBuilder::success::<()>("BOOKED_DATE_DELETED", "Date released", ())
                .into_response()
        }
        Err((status, code, message)) => {
            ResponseBuilder::error::<()>(status, code, &message).into_response()
        }
    }
}
