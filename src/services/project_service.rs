use axum::http::StatusCode;
use chrono::Utc;
use sea_orm::*;
use uuid::Uuid;
use crate::entities::media::MediaType;
use crate::entities::project::TagList;
use crate::entities::{category, media, project, project_category};
use crate::models::category_model::CategoryResponse;
use crate::models::media_model::MediaResponse;
use crate::models::project_model::*;
use crate::utils::embed_utils::google_drive_embed_url;

pub struct ProjectService;

impl ProjectService {
    pub async fn create_project(
        db: &DatabaseConnection,
        payload: CreateProjectRequest,
    ) -> Result<(ProjectResponse, Option<String>), (StatusCode, &'static str, String)> {
        // Unknown category ids must fail before anything is written
        let category_ids = Self::resolve_category_ids(db, &payload.categories).await?;

        let next_rank = Self::next_rank(db).await?;

        let new_project = project::ActiveModel {
            id: NotSet,
            public_id: Set(Uuid::now_v7()),
            title: Set(payload.title),
            description: Set(payload.description),
            date: Set(payload.date),
            thumbnail: Set(payload.thumbnail),
            tags: Set(TagList(payload.tags)),
            is_published: Set(payload.is_published),
            sort_order: Set(next_rank),
            created_at: Set(Utc::now()),
            updated_at: Set(Utc::now()),
        };

        let saved = new_project.insert(db).await
            .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, "DB_WRITE_ERR", format!("Failed to create project: {}", e)))?;

        let warning = Self::replace_category_links(db, saved.id, &category_ids).await?;

        let response = Self::get_project(db, saved.public_id).await?;
        Ok((response, warning))
    }

    pub async fn get_project(
        db: &DatabaseConnection,
        public_id: Uuid,
    ) -> Result<ProjectResponse, (StatusCode, &'static str, String)> {
        let found = project::Entity::find()
            .filter(project::Column::PublicId.eq(public_id))
            .one(db).await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_ERR", "Database error".to_string()))?
            .ok_or((StatusCode::NOT_FOUND, "PROJECT_NOT_FOUND", "Project not found".to_string()))?;

        Self::load_details(db, found).await
    }

    /// Admin listing includes unpublished rows; the public one never does.
    pub async fn list_projects(
        db: &DatabaseConnection,
        include_unpublished: bool,
        params: ProjectFilterParams,
    ) -> Result<Vec<ProjectResponse>, (StatusCode, &'static str, String)> {
        let mut query = project::Entity::find();

        if !include_unpublished {
            query = query.filter(project::Column::IsPublished.eq(true));
        }

        if let Some(key) = params.category {
            query = query
                .join(JoinType::InnerJoin, project::Relation::ProjectCategory.def())
                .join(JoinType::InnerJoin, project_category::Relation::Category.def())
                .filter(category::Column::Key.eq(key));
        }

        let rows = query
            .order_by_desc(project::Column::SortOrder)
            .order_by_asc(project::Column::CreatedAt)
            .all(db).await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_ERR", "Fetch failed".to_string()))?;

        let mut data = Vec::new();
        for row in rows {
            data.push(Self::load_details(db, row).await?);
        }

        Ok(data)
    }

    pub async fn update_project(
        db: &DatabaseConnection,
        public_id: Uuid,
        payload: UpdateProjectRequest,
    ) -> Result<(ProjectResponse, Option<String>), (StatusCode, &'static str, String)> {
        let found = project::Entity::find()
            .filter(project::Column::PublicId.eq(public_id))
            .one(db).await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_ERR", "Database error".to_string()))?
            .ok_or((StatusCode::NOT_FOUND, "PROJECT_NOT_FOUND", "Project not found".to_string()))?;

        let category_ids = match &payload.categories {
            Some(ids) => Some(Self::resolve_category_ids(db, ids).await?),
            None => None,
        };

        let project_db_id = found.id;
        let mut active: project::ActiveModel = found.into();

        if let Some(t) = payload.title { active.title = Set(t); }
        if let Some(d) = payload.description { active.description = Set(d); }
        if let Some(d) = payload.date { active.date = Set(d); }
        if let Some(t) = payload.thumbnail { active.thumbnail = Set(t); }
        if let Some(t) = payload.tags { active.tags = Set(TagList(t)); }
        if let Some(p) = payload.is_published { active.is_published = Set(p); }
        // sort_order is deliberately untouched; ranks only move through the
        // reorder protocol

        active.updated_at = Set(Utc::now());

        active.update(db).await
            .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, "DB_WRITE_ERR", format!("Failed to update project: {}", e)))?;

        let warning = match category_ids {
            Some(ids) => Self::replace_category_links(db, project_db_id, &ids).await?,
            None => None,
        };

        let response = Self::get_project(db, public_id).await?;
        Ok((response, warning))
    }

    pub async fn toggle_published(
        db: &DatabaseConnection,
        public_id: Uuid,
    ) -> Result<ProjectResponse, (StatusCode, &'static str, String)> {
        let found = project::Entity::find()
            .filter(project::Column::PublicId.eq(public_id))
            .one(db).await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_ERR", "Database error".to_string()))?
            .ok_or((StatusCode::NOT_FOUND, "PROJECT_NOT_FOUND", "Project not found".to_string()))?;

        let flipped = !found.is_published;
        let mut active: project::ActiveModel = found.into();
        active.is_published = Set(flipped);
        active.updated_at = Set(Utc::now());

        let updated = active.update(db).await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_WRITE_ERR", "Failed to toggle published state".to_string()))?;

        Self::load_details(db, updated).await
    }

    /// Idempotent: deleting an id that is already gone is a success, and the
    /// owned media plus association rows go with the project.
    pub async fn delete_project(
        db: &DatabaseConnection,
        public_id: Uuid,
    ) -> Result<(), (StatusCode, &'static str, String)> {
        let found = project::Entity::find()
            .filter(project::Column::PublicId.eq(public_id))
            .one(db).await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_ERR", "Database error".to_string()))?;

        let found = match found {
            Some(f) => f,
            None => return Ok(()),
        };

        let txn = db.begin().await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "TXN_ERR", "Transaction start failed".to_string()))?;

        media::Entity::delete_many()
            .filter(media::Column::ProjectId.eq(found.id))
            .exec(&txn).await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_WRITE_ERR", "Failed to delete project media".to_string()))?;

        project_category::Entity::delete_many()
            .filter(project_category::Column::ProjectId.eq(found.id))
            .exec(&txn).await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_WRITE_ERR", "Failed to delete project categories".to_string()))?;

        project::Entity::delete_by_id(found.id).exec(&txn).await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_WRITE_ERR", "Failed to delete project".to_string()))?;

        txn.commit().await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "TXN_COMMIT_ERR", "Transaction commit failed".to_string()))?;

        Ok(())
    }

    // --- Helpers ---

    async fn next_rank(db: &DatabaseConnection) -> Result<i32, (StatusCode, &'static str, String)> {
        let max = project::Entity::find()
            .order_by_desc(project::Column::SortOrder)
            .one(db).await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_ERR", "Rank lookup failed".to_string()))?
            .map(|p| p.sort_order)
            .unwrap_or(0);
        Ok(max + 1)
    }

    async fn resolve_category_ids(
        db: &DatabaseConnection,
        public_ids: &[Uuid],
    ) -> Result<Vec<i64>, (StatusCode, &'static str, String)> {
        let mut ids = Vec::with_capacity(public_ids.len());
        for public_id in public_ids {
            let found = category::Entity::find()
                .filter(category::Column::PublicId.eq(*public_id))
                .one(db).await
                .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_ERR", "Category lookup failed".to_string()))?
                .ok_or((StatusCode::BAD_REQUEST, "CATEGORY_NOT_FOUND", format!("Category with ID {} not found", public_id)))?;
            ids.push(found.id);
        }
        Ok(ids)
    }

    /// Full replace of the association set: clear, then insert the new rows.
    /// Insert failures leave the project with an incomplete (possibly empty)
    /// category set; that is reported as a warning, never rolled back.
    async fn replace_category_links(
        db: &DatabaseConnection,
        project_db_id: i64,
        category_db_ids: &[i64],
    ) -> Result<Option<String>, (StatusCode, &'static str, String)> {
        project_category::Entity::delete_many()
            .filter(project_category::Column::ProjectId.eq(project_db_id))
            .exec(db).await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_WRITE_ERR", "Failed to clear category links".to_string()))?;

        let mut degraded = false;
        for category_id in category_db_ids {
            let link = project_category::ActiveModel {
                project_id: Set(project_db_id),
                category_id: Set(*category_id),
            };
            if let Err(e) = link.insert(db).await {
                tracing::warn!("Category link insert failed for project {}: {}", project_db_id, e);
                degraded = true;
            }
        }

        if degraded {
            Ok(Some("Some category links could not be written; the project has an incomplete category set".to_string()))
        } else {
            Ok(None)
        }
    }

    async fn load_details(
        db: &DatabaseConnection,
        model: project::Model,
    ) -> Result<ProjectResponse, (StatusCode, &'static str, String)> {
        let categories = model
            .find_related(category::Entity)
            .order_by_asc(category::Column::SortOrder)
            .order_by_asc(category::Column::CreatedAt)
            .all(db).await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_ERR", "Failed to fetch categories".to_string()))?;

        let media_rows = model
            .find_related(media::Entity)
            .order_by_asc(media::Column::SortOrder)
            .order_by_asc(media::Column::CreatedAt)
            .all(db).await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_ERR", "Failed to fetch media".to_string()))?;

        Ok(Self::map_to_response(model, categories, media_rows))
    }

    fn map_to_response(
        model: project::Model,
        categories: Vec<category::Model>,
        media_rows: Vec<media::Model>,
    ) -> ProjectResponse {
        ProjectResponse {
            id: model.public_id,
            title: model.title,
            description: model.description,
            date: model.date,
            thumbnail: model.thumbnail,
            tags: model.tags.0,
            is_published: model.is_published,
            sort_order: model.sort_order,
            categories: categories.into_iter().map(|c| CategoryResponse {
                id: c.public_id,
                key: c.key,
                label: c.label,
                sort_order: c.sort_order,
            }).collect(),
            media: media_rows.into_iter().map(Self::map_media).collect(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }

    pub(crate) fn map_media(m: media::Model) -> MediaResponse {
        let embed_src = match m.media_type {
            MediaType::Video => Some(google_drive_embed_url(&m.src)),
            MediaType::Image => None,
        };
        MediaResponse {
            id: m.public_id,
            media_type: m.media_type,
            src: m.src,
            embed_src,
            alt: m.alt,
            sort_order: m.sort_order,
        }
    }
}
