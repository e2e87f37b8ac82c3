use axum::http::StatusCode;
use chrono::Utc;
use sea_orm::*;
use slug::slugify;
use uuid::Uuid;
use crate::entities::{category, project, project_category};
use crate::models::category_model::*;

pub struct CategoryService;

impl CategoryService {
    pub async fn create_category(
        db: &DatabaseConnection,
        payload: CreateCategoryRequest,
    ) -> Result<CategoryResponse, (StatusCode, &'static str, String)> {
        let key = match payload.key {
            Some(k) if !k.trim().is_empty() => slugify(&k),
            _ => slugify(&payload.label),
        };

        Self::ensure_key_free(db, &key, None).await?;

        let next_rank = Self::next_rank(db).await?;

        let new_category = category::ActiveModel {
            id: NotSet,
            public_id: Set(Uuid::now_v7()),
            key: Set(key),
            label: Set(payload.label),
            sort_order: Set(next_rank),
            created_at: Set(Utc::now()),
        };

        let saved = new_category.insert(db).await
            .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, "DB_WRITE_ERR", format!("Failed to create category: {}", e)))?;

        Ok(Self::map_to_response(saved))
    }

    pub async fn list_categories(
        db: &DatabaseConnection,
    ) -> Result<Vec<CategoryResponse>, (StatusCode, &'static str, String)> {
        let rows = category::Entity::find()
            .order_by_asc(category::Column::SortOrder)
            .order_by_asc(category::Column::CreatedAt)
            .all(db).await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_ERR", "Failed to fetch categories".to_string()))?;

        Ok(rows.into_iter().map(Self::map_to_response).collect())
    }

    /// Public listing: rank order plus how many published projects each
    /// category currently holds.
    pub async fn list_categories_with_counts(
        db: &DatabaseConnection,
    ) -> Result<Vec<CategoryCountResponse>, (StatusCode, &'static str, String)> {
        let rows = category::Entity::find()
            .order_by_asc(category::Column::SortOrder)
            .order_by_asc(category::Column::CreatedAt)
            .all(db).await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_ERR", "Failed to fetch categories".to_string()))?;

        let mut data = Vec::with_capacity(rows.len());
        for row in rows {
            let count = project_category::Entity::find()
                .filter(project_category::Column::CategoryId.eq(row.id))
                .join(JoinType::InnerJoin, project_category::Relation::Project.def())
                .filter(project::Column::IsPublished.eq(true))
                .count(db).await
                .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_ERR", "Count failed".to_string()))?;

            data.push(CategoryCountResponse {
                id: row.public_id,
                key: row.key,
                label: row.label,
                sort_order: row.sort_order,
                count,
            });
        }

        Ok(data)
    }

    pub async fn update_category(
        db: &DatabaseConnection,
        public_id: Uuid,
        payload: UpdateCategoryRequest,
    ) -> Result<CategoryResponse, (StatusCode, &'static str, String)> {
        let found = category::Entity::find()
            .filter(category::Column::PublicId.eq(public_id))
            .one(db).await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_ERR", "Database error".to_string()))?
            .ok_or((StatusCode::NOT_FOUND, "CATEGORY_NOT_FOUND", "Category not found".to_string()))?;

        let mut active: category::ActiveModel = found.into();

        if let Some(k) = payload.key {
            let key = slugify(&k);
            Self::ensure_key_free(db, &key, Some(public_id)).await?;
            active.key = Set(key);
        }
        if let Some(l) = payload.label { active.label = Set(l); }
        // sort_order only moves through the reorder protocol

        let updated = active.update(db).await
            .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, "DB_WRITE_ERR", format!("Failed to update category: {}", e)))?;

        Ok(Self::map_to_response(updated))
    }

    /// Idempotent; takes the association rows with it and nothing else.
    pub async fn delete_category(
        db: &DatabaseConnection,
        public_id: Uuid,
    ) -> Result<(), (StatusCode, &'static str, String)> {
        let found = category::Entity::find()
            .filter(category::Column::PublicId.eq(public_id))
            .one(db).await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_ERR", "Database error".to_string()))?;

        let found = match found {
            Some(f) => f,
            None => return Ok(()),
        };

        let txn = db.begin().await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "TXN_ERR", "Transaction start failed".to_string()))?;

        project_category::Entity::delete_many()
            .filter(project_category::Column::CategoryId.eq(found.id))
            .exec(&txn).await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_WRITE_ERR", "Failed to delete category links".to_string()))?;

        category::Entity::delete_by_id(found.id).exec(&txn).await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_WRITE_ERR", "Failed to delete category".to_string()))?;

        txn.commit().await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "TXN_COMMIT_ERR", "Transaction commit failed".to_string()))?;

        Ok(())
    }

    // --- Helpers ---

    async fn next_rank(db: &DatabaseConnection) -> Result<i32, (StatusCode, &'static str, String)> {
        let max = category::Entity::find()
            .order_by_desc(category::Column::SortOrder)
            .one(db).await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_ERR", "Rank lookup failed".to_string()))?
            .map(|c| c.sort_order)
            .unwrap_or(0);
        Ok(max + 1)
    }

    // The schema tolerates duplicate keys; this layer does not
    async fn ensure_key_free(
        db: &DatabaseConnection,
        key: &str,
        exclude: Option<Uuid>,
    ) -> Result<(), (StatusCode, &'static str, String)> {
        let mut query = category::Entity::find().filter(category::Column::Key.eq(key));
        if let Some(public_id) = exclude {
            query = query.filter(category::Column::PublicId.ne(public_id));
        }

        let existing = query.one(db).await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_ERR", "Key check failed".to_string()))?;

        if existing.is_some() {
            return Err((StatusCode::CONFLICT, "CATEGORY_KEY_TAKEN", format!("Category key '{}' is already in use", key)));
        }
        Ok(())
    }

    fn map_to_response(model: category::Model) -> CategoryResponse {
        CategoryResponse {
            id: model.public_id,
            key: model.key,
            label: model.label,
            sort_order: model.sort_order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{insert_category, insert_project, test_db};
    use sea_orm::Set;

    #[tokio::test]
    async fn create_slugifies_the_label_and_counts_ranks_up() {
        let db = test_db().await;

        let first = CategoryService::create_category(
            &db,
            CreateCategoryRequest { label: "AI Video".to_string(), key: None },
        )
        .await
        .unwrap_or_else(|(_, code, msg)| panic!("{}: {}", code, msg));
        assert_eq!(first.key, "ai-video");
        assert_eq!(first.sort_order, 1);

        let second = CategoryService::create_category(
            &db,
            CreateCategoryRequest { label: "Web".to_string(), key: Some("WEB Work".to_string()) },
        )
        .await
        .unwrap_or_else(|(_, code, msg)| panic!("{}: {}", code, msg));
        assert_eq!(second.key, "web-work");
        assert_eq!(second.sort_order, 2);
    }

    #[tokio::test]
    async fn duplicate_keys_are_rejected_with_a_conflict() {
        let db = test_db().await;
        insert_category(&db, "web", "WEB", 1).await;

        let (status, code, _) = match CategoryService::create_category(
            &db,
            CreateCategoryRequest { label: "Web".to_string(), key: None },
        )
        .await
        {
            Err(e) => e,
            Ok(_) => panic!("duplicate key must be rejected"),
        };

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(code, "CATEGORY_KEY_TAKEN");
    }

    #[tokio::test]
    async fn updating_a_category_keeps_its_rank() {
        let db = test_db().await;
        let seeded = insert_category(&db, "web", "WEB", 4).await;

        let updated = CategoryService::update_category(
            &db,
            seeded.public_id,
            UpdateCategoryRequest { key: None, label: Some("WEB & APPS".to_string()) },
        )
        .await
        .unwrap_or_else(|(_, code, msg)| panic!("{}: {}", code, msg));

        assert_eq!(updated.label, "WEB & APPS");
        assert_eq!(updated.sort_order, 4);
    }

    #[tokio::test]
    async fn counts_only_cover_published_projects() {
        let db = test_db().await;
        let cat = insert_category(&db, "web", "WEB", 1).await;
        let live = insert_project(&db, "live", 1, true).await;
        let draft = insert_project(&db, "draft", 2, false).await;

        for project_id in [live.id, draft.id] {
            project_category::ActiveModel {
                project_id: Set(project_id),
                category_id: Set(cat.id),
            }
            .insert(&db)
            .await
            .unwrap();
        }

        let counted = CategoryService::list_categories_with_counts(&db).await.unwrap();
        assert_eq!(counted.len(), 1);
        assert_eq!(counted[0].count, 1);
    }

    #[tokio::test]
    async fn delete_removes_links_but_not_projects_and_is_idempotent() {
        let db = test_db().await;
        let cat = insert_category(&db, "web", "WEB", 1).await;
        let proj = insert_project(&db, "p", 1, true).await;
        project_category::ActiveModel {
            project_id: Set(proj.id),
            category_id: Set(cat.id),
        }
        .insert(&db)
        .await
        .unwrap();

        CategoryService::delete_category(&db, cat.public_id).await.unwrap();

        let links = project_category::Entity::find().all(&db).await.unwrap();
        assert!(links.is_empty());
        assert!(project::Entity::find_by_id(proj.id).one(&db).await.unwrap().is_some());

        CategoryService::delete_category(&db, cat.public_id).await.unwrap();
    }
}
