use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Extension,
};
use uuid::Uuid;
use crate::config::AppState;
use crate::models::auth_model::CurrentAdmin;
use crate::models::project_model::*;
use crate::models::reorder_model::{ReorderFailureData, ReorderRequest};
use crate::services::project_service::ProjectService;
use crate::services::reorder_service::ReorderService;
use crate::utils::api_response::ResponseBuilder;
use crate::utils::validated_wrapper::ValidatedJson;

pub async fn list_public_projects_handler(
    State(state): State<AppState>,
    Query(params): Query<ProjectFilterParams>,
) -> impl IntoResponse {
    match ProjectService::list_projects(&state.db, false, params).await {
        Ok(res) => ResponseBuilder::success("PROJECTS_FETCHED", "Success", res).into_response(),
        Err((status, code, msg)) => ResponseBuilder::error::<()>(status, code, &msg).into_response(),
    }
}

pub async fn get_public_project_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match ProjectService::get_project(&state.db, id).await {
        // Drafts are invisible on the public surface
        Ok(res) if !res.is_published => ResponseBuilder::error::<()>(
            StatusCode::NOT_FOUND,
            "PROJECT_NOT_FOUND",
            "Project not found",
        )
        .into_response(),
        Ok(res) => ResponseBuilder::success("PROJECT_FETCHED", "Success", res).into_response(),
        Err((status, code, msg)) => ResponseBuilder::error::<()>(status, code, &msg).into_response(),
    }
}

pub async fn list_admin_projects_handler(
    State(state): State<AppState>,
    Query(params): Query<ProjectFilterParams>,
) -> impl IntoResponse {
    match ProjectService::list_projects(&state.db, true, params).await {
        Ok(res) => ResponseBuilder::success("PROJECTS_FETCHED", "Success", res).into_response(),
        Err((status, code, msg)) => ResponseBuilder::error::<()>(status, code, &msg).into_response(),
    }
}

pub async fn get_admin_project_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match ProjectService::get_project(&state.db, id).await {
        Ok(res) => ResponseBuilder::success("PROJECT_FETCHED", "Success", res).into_response(),
        Err((status, code, msg)) => ResponseBuilder::error::<()>(status, code, &msg).into_response(),
    }
}

pub async fn create_project_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateProjectRequest>,
) -> impl IntoResponse {
    match ProjectService::create_project(&state.db, payload).await {
        Ok((res, Some(warning))) => {
            ResponseBuilder::created("PROJECT_CREATED_CATEGORIES_DEGRADED", &warning, res)
                .into_response()
        }
        Ok((res, None)) => {
            ResponseBuilder::created("PROJECT_CREATED", "Project created", res).into_response()
        }
        Err((status, code, msg)) => ResponseBuilder::error::<()>(status, code, &msg).into_response(),
    }
}

pub async fn update_project_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateProjectRequest>,
) -> impl IntoResponse {
    match ProjectService::update_project(&state.db, id, payload).await {
        Ok((res, Some(warning))) => {
            ResponseBuilder::success("PROJECT_UPDATED_CATEGORIES_DEGRADED", &warning, res)
                .into_response()
        }
        Ok((res, None)) => {
            ResponseBuilder::success("PROJECT_UPDATED", "Project updated", res).into_response()
        }
        Err((status, code, msg)) => ResponseBuilder::error::<()>(status, code, &msg).into_response(),
    }
}

pub async fn toggle_published_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match ProjectService::toggle_published(&state.db, id).await {
        Ok(res) => ResponseBuilder::success("PROJECT_TOGGLED", "Published state updated", res)
            .into_response(),
        Err((status, code, msg)) => ResponseBuilder::error::<()>(status, code, &msg).into_response(),
    }
}

pub async fn delete_project_handler(
    State(state): State<AppState>,
    Extension(admin): Extension<CurrentAdmin>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match ProjectService::delete_project(&state.db, id).await {
        Ok(_) => {
            tracing::info!("Project {} deleted by admin {}", id, admin.id);
            ResponseBuilder::success::<()>("PROJECT_DELETED", "Project deleted", ())
                .into_response()
        }
        Err((status, code, msg)) => ResponseBuilder::error::<()>(status, code, &msg).into_response(),
    }
}

pub async fn reorder_projects_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ReorderRequest>,
) -> impl IntoResponse {
    match ReorderService::reorder_projects(&state.db, &payload.ordered_ids).await {
        Ok(_) => ResponseBuilder::success::<()>("PROJECTS_REORDERED", "Order updated", ())
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
