use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Extension,
};
use uuid::Uuid;
use crate::config::AppState;
use crate::models::auth_model::CurrentAdmin;
use crate::models::category_model::*;
use crate::models::reorder_model::{ReorderFailureData, ReorderRequest};
use crate::services::category_service::CategoryService;
use crate::services::reorder_service::ReorderService;
use crate::utils::api_response::ResponseBuilder;
use crate::utils::validated_wrapper::ValidatedJson;

pub async fn list_public_categories_handler(
    State(state): State<AppState>,
) -> impl IntoResponse {
    match CategoryService::list_categories_with_counts(&state.db).await {
        Ok(res) => ResponseBuilder::success("CATEGORIES_FETCHED", "Success", res).into_response(),
        Err((status, code, msg)) => ResponseBuilder::error::<()>(status, code, &msg).into_response(),
    }
}

pub async fn list_admin_categories_handler(
    State(state): State<AppState>,
) -> impl IntoResponse {
    match CategoryService::list_categories(&state.db).await {
        Ok(res) => ResponseBuilder::success("CATEGORIES_FETCHED", "Success", res).into_response(),
        Err((status, code, msg)) => ResponseBuilder::error::<()>(status, code, &msg).into_response(),
    }
}

pub async fn create_category_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateCategoryRequest>,
) -> impl IntoResponse {
    match CategoryService::create_category(&state.db, payload).await {
        Ok(res) => ResponseBuilder::created("CATEGORY_CREATED", "Category created", res)
            .into_response(),
        Err((status, code, msg)) => ResponseBuilder::error::<()>(status, code, &msg).into_response(),
    }
}

pub async fn update_category_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateCategoryRequest>,
) -> impl IntoResponse {
    match CategoryService::update_category(&state.db, id, payload).await {
        Ok(res) => ResponseBuilder::success("CATEGORY_UPDATED", "Category updated", res)
            .into_response(),
        Err((status, code, msg)) => ResponseBuilder::error::<()>(status, code, &msg).into_response(),
    }
}

pub async fn delete_category_handler(
    State(state): State<AppState>,
    Extension(admin): Extension<CurrentAdmin>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match CategoryService::delete_category(&state.db, id).await {
        Ok(_) => {
            tracing::info!("Category {} deleted by admin {}", id, admin.id);
            ResponseBuilder::success::<()>("CATEGORY_DELETED", "Category deleted", ())
                .into_response()
        }
        Err((status, code, msg)) => ResponseBuilder::error::<()>(status, code, &msg).into_response(),
    }
}

pub async fn reorder_categories_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ReorderRequest>,
) -> impl IntoResponse {
    match ReorderService::reorder_categories(&state.db, &payload.ordered_ids).await {
        Ok(_) => ResponseBuilder::success::<()>("CATEGORIES_REORDERED", "Order updated", ())
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
