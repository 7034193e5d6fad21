use crate::config::AppState;
use crate::models::portfolio_model::{CreatePortfolioItemRequest, UpdatePortfolioItemRequest};
use crate::services::portfolio_service::PortfolioService;
use crate::utils::api_response::ResponseBuilder;
use crate::utils::validated_wrapper::ValidatedJson;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

pub async fn list_published_portfolio_handler(State(state): State<AppState>) -> impl IntoResponse {
    match PortfolioService::list_published(&state.db).await {
        Ok(items) => ResponseBuilder::success("PORTFOLIO_FETCHED", "Success", items).into_response(),
        Err((status, code, message)) => {
            ResponseBuilder::error::<()>(status, code, &message).into_response()
        }
    }
}

pub async fn list_all_portfolio_handler(State(state): State<AppState>) -> impl IntoResponse {
    match PortfolioService::list_all(&state.db).await {
        Ok(items) => ResponseBuilder::success("PORTFOLIO_FETCHED", "Success", items).into_response(),
        Err((status, code, message)) => {
            ResponseBuilder::error::<()>(status, code, &message).into_response()
        }
    }
}

pub async fn create_portfolio_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreatePortfolioItemRequest>,
) -> impl IntoResponse {
    match PortfolioService::create_item(&state.db, payload).await {
        Ok(item) => {
            ResponseBuilder::created("PORTFOLIO_CREATED", "Portfolio item created", item)
                .into_response()
        }
        Err((status, code, message)) => {
            ResponseBuilder::error::<()>(status, code, &message).into_response()
        }
    }
}

pub async fn update_portfolio_handler(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdatePortfolioItemRequest>,
) -> impl IntoResponse {
    match PortfolioService::update_item(&state.db, id, payload).await {
        Ok(item) => {
            ResponseBuilder::success("PORTFOLIO_UPDATED", "Portfolio item updated", item)
                .into_response()
        }
        Err((status, code, message)) => {
            ResponseBuilder::error::<()>(status, code, &message).into_response()
        }
    }
}

pub async fn delete_portfolio_handler(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> impl IntoResponse {
    match PortfolioService::delete_item(&state.db, id).await {
        Ok(()) => ResponseBuilder::success::<()>("PORTFOLIO_DELETED", "Portfolio item deleted", ())
            .into_response(),
        Err((status, code, message)) => {
            ResponseBuilder::error::<()>(status, code, &message).into_response()
        }
    }
}
