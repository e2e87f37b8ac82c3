use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;
use crate::config::AppState;
use crate::models::media_model::{CreateMediaRequest, UpdateMediaRequest};
use crate::models::reorder_model::{MediaReorderRequest, ReorderFailureData};
use crate::services::media_service::MediaService;
use crate::services::reorder_service::ReorderService;
use crate::utils::api_response::ResponseBuilder;
use crate::utils::validated_wrapper::ValidatedJson;

#[derive(Deserialize)]
pub struct MediaListParams {
    pub project_id: Uuid,
}

pub async fn list_media_handler(
    State(state): State<AppState>,
    Query(params): Query<MediaListParams>,
) -> impl IntoResponse {
    match MediaService::list_media(&state.db, params.project_id).await {
        Ok(res) => ResponseBuilder::success("MEDIA_FETCHED", "Success", res).into_response(),
        Err((status, code, msg)) => ResponseBuilder::error::<()>(status, code, &msg).into_response(),
    }
}

pub async fn add_media_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateMediaRequest>,
) -> impl IntoResponse {
    match MediaService::add_media(&state.db, payload).await {
        Ok(res) => ResponseBuilder::created("MEDIA_ADDED", "Media added", res).into_response(),
        Err((status, code, msg)) => ResponseBuilder::error::<()>(status, code, &msg).into_response(),
    }
}

pub async fn update_media_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateMediaRequest>,
) -> impl IntoResponse {
    match MediaService::update_media(&state.db, id, payload).await {
        Ok(res) => ResponseBuilder::success("MEDIA_UPDATED", "Media updated", res).into_response(),
        Err((status, code, msg)) => ResponseBuilder::error::<()>(status, code, &msg).into_response(),
    }
}

pub async fn delete_media_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match MediaService::delete_media(&state.db, id).await {
        Ok(_) => ResponseBuilder::success::<()>("MEDIA_DELETED", "Media deleted", ())
            .into_response(),
        Err((status, code, msg)) => ResponseBuilder::error::<()>(status, code, &msg).into_response(),
    }
}

pub async fn reorder_media_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<MediaReorderRequest>,
) -> impl IntoResponse {
    match ReorderService::reorder_media(&state.db, payload.project_id, &payload.ordered_ids).await {
        Ok(_) => ResponseBuilder::success::<()>("MEDIA_REORDERED", "Order updated", ())
            .into_response(),
        Err(failure) if failure.failed_ids.is_empty() => {
            ResponseBuilder::error::<()>(failure.status, failure.code, &failure.message)
                .into_response()
        }
        Err(failure) => ResponseBuilder::fail_with_data(
            failure.status,
            failure.code,
            &failure.message,
            ReorderFailureData { failed_ids: failure.failed_ids },
        )
        .into_response(),
    }
}
