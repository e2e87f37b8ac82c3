use axum::http::StatusCode;
use chrono::Utc;
use sea_orm::*;
use uuid::Uuid;
use crate::entities::{media, project};
use crate::models::media_model::*;
use crate::services::project_service::ProjectService;

pub struct MediaService;

impl MediaService {
    pub async fn add_media(
        db: &DatabaseConnection,
        payload: CreateMediaRequest,
    ) -> Result<MediaResponse, (StatusCode, &'static str, String)> {
        let owner = project::Entity::find()
            .filter(project::Column::PublicId.eq(payload.project_id))
            .one(db).await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_ERR", "Database error".to_string()))?
            .ok_or((StatusCode::NOT_FOUND, "PROJECT_NOT_FOUND", format!("Project with ID {} not found", payload.project_id)))?;

        let next_rank = Self::next_rank(db, owner.id).await?;

        let new_media = media::ActiveModel {
            id: NotSet,
            public_id: Set(Uuid::now_v7()),
            project_id: Set(owner.id),
            media_type: Set(payload.media_type),
            src: Set(payload.src),
            alt: Set(payload.alt),
            sort_order: Set(next_rank),
            created_at: Set(Utc::now()),
        };

        let saved = new_media.insert(db).await
            .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, "DB_WRITE_ERR", format!("Failed to add media: {}", e)))?;

        Ok(ProjectService::map_media(saved))
    }

    pub async fn list_media(
        db: &DatabaseConnection,
        project_public_id: Uuid,
    ) -> Result<Vec<MediaResponse>, (StatusCode, &'static str, String)> {
        let owner = project::Entity::find()
            .filter(project::Column::PublicId.eq(project_public_id))
            .one(db).await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_ERR", "Database error".to_string()))?
            .ok_or((StatusCode::NOT_FOUND, "PROJECT_NOT_FOUND", "Project not found".to_string()))?;

        let rows = media::Entity::find()
            .filter(media::Column::ProjectId.eq(owner.id))
            .order_by_asc(media::Column::SortOrder)
            .order_by_asc(media::Column::CreatedAt)
            .all(db).await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_ERR", "Failed to fetch media".to_string()))?;

        Ok(rows.into_iter().map(ProjectService::map_media).collect())
    }

    pub async fn update_media(
        db: &DatabaseConnection,
        public_id: Uuid,
        payload: UpdateMediaRequest,
    ) -> Result<MediaResponse, (StatusCode, &'static str, String)> {
        let found = media::Entity::find()
            .filter(media::Column::PublicId.eq(public_id))
            .one(db).await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_ERR", "Database error".to_string()))?
            .ok_or((StatusCode::NOT_FOUND, "MEDIA_NOT_FOUND", "Media not found".to_string()))?;

        let mut active: media::ActiveModel = found.into();

        if let Some(t) = payload.media_type { active.media_type = Set(t); }
        if let Some(s) = payload.src { active.src = Set(s); }
        if let Some(a) = payload.alt { active.alt = Set(Some(a)); }
        // sort_order only moves through the reorder protocol

        let updated = active.update(db).await
            .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, "DB_WRITE_ERR", format!("Failed to update media: {}", e)))?;

        Ok(ProjectService::map_media(updated))
    }

    /// Idempotent: an id that is already gone deletes as a success.
    pub async fn delete_media(
        db: &DatabaseConnection,
        public_id: Uuid,
    ) -> Result<(), (StatusCode, &'static str, String)> {
        media::Entity::delete_many()
            .filter(media::Column::PublicId.eq(public_id))
            .exec(db).await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_WRITE_ERR", "Failed to delete media".to_string()))?;

        Ok(())
    }

    // Ranks are scoped to the owning project, never global
    async fn next_rank(
        db: &DatabaseConnection,
        project_db_id: i64,
    ) -> Result<i32, (StatusCode, &'static str, String)> {
        let max = media::Entity::find()
            .filter(media::Column::ProjectId.eq(project_db_id))
            .order_by_desc(media::Column::SortOrder)
            .one(db).await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_ERR", "Rank lookup failed".to_string()))?
            .map(|m| m.sort_order)
            .unwrap_or(0);
        Ok(max + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::media::MediaType;
    use crate::test_support::{insert_media, insert_project, test_db};

    fn image_request(project_id: Uuid, src: &str) -> CreateMediaRequest {
        CreateMediaRequest {
            project_id,
            media_type: MediaType::Image,
            src: src.to_string(),
            alt: Some("alt".to_string()),
        }
    }

    #[tokio::test]
    async fn ranks_are_scoped_per_project() {
        let db = test_db().await;
        let p = insert_project(&db, "p", 1, true).await;
        let q = insert_project(&db, "q", 2, true).await;

        let p1 = MediaService::add_media(&db, image_request(p.public_id, "p-1.webp"))
            .await
            .unwrap_or_else(|(_, code, msg)| panic!("{}: {}", code, msg));
        let p2 = MediaService::add_media(&db, image_request(p.public_id, "p-2.webp"))
            .await
            .unwrap_or_else(|(_, code, msg)| panic!("{}: {}", code, msg));
        let q1 = MediaService::add_media(&db, image_request(q.public_id, "q-1.webp"))
            .await
            .unwrap_or_else(|(_, code, msg)| panic!("{}: {}", code, msg));

        assert_eq!(p1.sort_order, 1);
        assert_eq!(p2.sort_order, 2);
        // A fresh project starts back at rank 1
        assert_eq!(q1.sort_order, 1);
    }

    #[tokio::test]
    async fn media_for_a_missing_project_is_rejected() {
        let db = test_db().await;

        let (status, code, _) = match MediaService::add_media(&db, image_request(Uuid::now_v7(), "x.webp")).await {
            Err(e) => e,
            Ok(_) => panic!("orphan media must be rejected"),
        };

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(code, "PROJECT_NOT_FOUND");
    }

    #[tokio::test]
    async fn video_responses_carry_an_embed_url() {
        let db = test_db().await;
        let p = insert_project(&db, "p", 1, true).await;

        let saved = MediaService::add_media(
            &db,
            CreateMediaRequest {
                project_id: p.public_id,
                media_type: MediaType::Video,
                src: "https://drive.google.com/file/d/abc123/view?usp=drive_link".to_string(),
                alt: None,
            },
        )
        .await
        .unwrap_or_else(|(_, code, msg)| panic!("{}: {}", code, msg));

        assert_eq!(
            saved.embed_src.as_deref(),
            Some("https://drive.google.com/file/d/abc123/preview")
        );
    }

    #[tokio::test]
    async fn list_follows_rank_order() {
        let db = test_db().await;
        let p = insert_project(&db, "p", 1, true).await;
        insert_media(&db, p.id, "second.webp", 2).await;
        insert_media(&db, p.id, "first.webp", 1).await;

        let listed = MediaService::list_media(&db, p.public_id).await.unwrap();
        let srcs: Vec<&str> = listed.iter().map(|m| m.src.as_str()).collect();
        assert_eq!(srcs, ["first.webp", "second.webp"]);
    }

    #[tokio::test]
    async fn update_patches_attributes_but_never_the_rank() {
        let db = test_db().await;
        let p = insert_project(&db, "p", 1, true).await;
        let m = insert_media(&db, p.id, "old.webp", 5).await;

        let updated = MediaService::update_media(
            &db,
            m.public_id,
            UpdateMediaRequest {
                media_type: None,
                src: Some("new.webp".to_string()),
                alt: Some("caption".to_string()),
            },
        )
        .await
        .unwrap_or_else(|(_, code, msg)| panic!("{}: {}", code, msg));

        assert_eq!(updated.src, "new.webp");
        assert_eq!(updated.alt.as_deref(), Some("caption"));
        assert_eq!(updated.sort_order, 5);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let db = test_db().await;
        let p = insert_project(&db, "p", 1, true).await;
        let m = insert_media(&db, p.id, "a.webp", 1).await;

        MediaService::delete_media(&db, m.public_id).await.unwrap();
        assert!(media::Entity::find_by_id(m.id).one(&db).await.unwrap().is_none());

        // Already gone; still a success
        MediaService::delete_media(&db, m.public_id).await.unwrap();
        MediaService::delete_media(&db, Uuid::now_v7()).await.unwrap();
    }
}
