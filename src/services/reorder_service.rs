use axum::http::StatusCode;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;
use crate::entities::{category, media, project};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    /// First id gets rank 1 (categories, media)
    Ascending,
    /// First id gets the highest rank (projects: newest on top)
    Descending,
}

/// Pure phase of the reorder protocol: map a desired ordering onto rank
/// values. Ranks are a bijection of 1..=N, so a fully applied assignment can
/// never leave two rows of one scope sharing a rank.
pub fn assign_ranks(ordered_ids: &[Uuid], direction: SortDirection) -> Vec<(Uuid, i32)> {
    let len = ordered_ids.len() as i32;
    ordered_ids
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let rank = match direction {
                SortDirection::Ascending => i as i32 + 1,
                SortDirection::Descending => len - i as i32,
            };
            (*id, rank)
        })
        .collect()
}

/// Failure report for a rank batch. `failed_ids` empty means the whole batch
/// failed before any per-id write was attempted.
pub struct ReorderFailure {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
    pub failed_ids: Vec<Uuid>,
}

impl ReorderFailure {
    fn storage(message: String) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code: "DB_ERR",
            message,
            failed_ids: Vec::new(),
        }
    }

    fn not_found(message: String) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            code: "PROJECT_NOT_FOUND",
            message,
            failed_ids: Vec::new(),
        }
    }

    fn partial(failed_ids: Vec<Uuid>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code: "REORDER_PARTIAL_FAILURE",
            message: format!(
                "{} rank update(s) failed; the remaining ranks were persisted",
                failed_ids.len()
            ),
            failed_ids,
        }
    }
}

/// Effectful phase of the reorder protocol. Writes are independent per-id
/// updates: an id not present in the scope matches zero rows and is ignored,
/// ids in the scope but missing from the list keep their old rank. Per-id
/// failures are collected, never retried.
pub struct ReorderService;

impl ReorderService {
    pub async fn reorder_projects(
        db: &DatabaseConnection,
        ordered_ids: &[Uuid],
    ) -> Result<(), ReorderFailure> {
        let mut failed = Vec::new();

        for (public_id, rank) in assign_ranks(ordered_ids, SortDirection::Descending) {
            let res = project::Entity::update_many()
                .col_expr(project::Column::SortOrder, Expr::value(rank))
                .filter(project::Column::PublicId.eq(public_id))
                .exec(db)
                .await;

            if let Err(e) = res {
                tracing::error!("Rank update failed for project {}: {}", public_id, e);
                failed.push(public_id);
            }
        }

        if failed.is_empty() {
            Ok(())
        } else {
            Err(ReorderFailure::partial(failed))
        }
    }

    pub async fn reorder_categories(
        db: &DatabaseConnection,
        ordered_ids: &[Uuid],
    ) -> Result<(), ReorderFailure> {
        let mut failed = Vec::new();

        for (public_id, rank) in assign_ranks(ordered_ids, SortDirection::Ascending) {
            let res = category::Entity::update_many()
                .col_expr(category::Column::SortOrder, Expr::value(rank))
                .filter(category::Column::PublicId.eq(public_id))
                .exec(db)
                .await;

            if let Err(e) = res {
                tracing::error!("Rank update failed for category {}: {}", public_id, e);
                failed.push(public_id);
            }
        }

        if failed.is_empty() {
            Ok(())
        } else {
            Err(ReorderFailure::partial(failed))
        }
    }

    pub async fn reorder_media(
        db: &DatabaseConnection,
        project_public_id: Uuid,
        ordered_ids: &[Uuid],
    ) -> Result<(), ReorderFailure> {
        let project = project::Entity::find()
            .filter(project::Column::PublicId.eq(project_public_id))
            .one(db)
            .await
            .map_err(|_| ReorderFailure::storage("Database error".to_string()))?
            .ok_or_else(|| ReorderFailure::not_found("Project not found".to_string()))?;

        let mut failed = Vec::new();

        for (public_id, rank) in assign_ranks(ordered_ids, SortDirection::Ascending) {
            // The owning-project filter makes ids from another scope inert
            let res = media::Entity::update_many()
                .col_expr(media::Column::SortOrder, Expr::value(rank))
                .filter(media::Column::PublicId.eq(public_id))
                .filter(media::Column::ProjectId.eq(project.id))
                .exec(db)
                .await;

            if let Err(e) = res {
                tracing::error!("Rank update failed for media {}: {}", public_id, e);
                failed.push(public_id);
            }
        }

        if failed.is_empty() {
            Ok(())
        } else {
            Err(ReorderFailure::partial(failed))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{insert_category, insert_media, insert_project, test_db};
    use sea_orm::{ConnectionTrait, QueryOrder, Statement};

    #[test]
    fn ascending_ranks_count_up_from_one() {
        let ids: Vec<Uuid> = (0..3).map(|_| Uuid::now_v7()).collect();
        let ranks = assign_ranks(&ids, SortDirection::Ascending);
        assert_eq!(ranks[0], (ids[0], 1));
        assert_eq!(ranks[1], (ids[1], 2));
        assert_eq!(ranks[2], (ids[2], 3));
    }

    #[test]
    fn descending_ranks_give_the_top_item_the_highest_rank() {
        let ids: Vec<Uuid> = (0..3).map(|_| Uuid::now_v7()).collect();
        let ranks = assign_ranks(&ids, SortDirection::Descending);
        assert_eq!(ranks[0], (ids[0], 3));
        assert_eq!(ranks[1], (ids[1], 2));
        assert_eq!(ranks[2], (ids[2], 1));
    }

    #[test]
    fn empty_input_assigns_nothing() {
        assert!(assign_ranks(&[], SortDirection::Ascending).is_empty());
    }

    #[tokio::test]
    async fn reordering_categories_persists_the_requested_order() {
        let db = test_db().await;
        let a = insert_category(&db, "web", "WEB", 1).await;
        let b = insert_category(&db, "ai-video", "AI VIDEO", 2).await;
        let c = insert_category(&db, "etc", "ETC", 3).await;

        ReorderService::reorder_categories(&db, &[c.public_id, a.public_id, b.public_id])
            .await
            .unwrap_or_else(|e| panic!("reorder failed: {}", e.message));

        let listed = category::Entity::find()
            .order_by_asc(category::Column::SortOrder)
            .order_by_asc(category::Column::CreatedAt)
            .all(&db)
            .await
            .unwrap();
        let keys: Vec<&str> = listed.iter().map(|m| m.key.as_str()).collect();
        assert_eq!(keys, ["etc", "web", "ai-video"]);
        assert_eq!(listed[0].sort_order, 1);
        assert_eq!(listed[1].sort_order, 2);
        assert_eq!(listed[2].sort_order, 3);
    }

    #[tokio::test]
    async fn reordering_projects_uses_descending_ranks() {
        let db = test_db().await;
        let p1 = insert_project(&db, "one", 1, true).await;
        let p2 = insert_project(&db, "two", 2, true).await;
        let p3 = insert_project(&db, "three", 3, true).await;

        // Drag "one" to the top
        ReorderService::reorder_projects(&db, &[p1.public_id, p3.public_id, p2.public_id])
            .await
            .unwrap_or_else(|e| panic!("reorder failed: {}", e.message));

        let listed = project::Entity::find()
            .order_by_desc(project::Column::SortOrder)
            .order_by_asc(project::Column::CreatedAt)
            .all(&db)
            .await
            .unwrap();
        let titles: Vec<&str> = listed.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, ["one", "three", "two"]);
        assert_eq!(listed[0].sort_order, 3);
    }

    #[tokio::test]
    async fn reorder_is_idempotent() {
        let db = test_db().await;
        let a = insert_category(&db, "a", "A", 1).await;
        let b = insert_category(&db, "b", "B", 2).await;
        let order = [b.public_id, a.public_id];

        ReorderService::reorder_categories(&db, &order).await.ok();
        let first: Vec<(String, i32)> = category::Entity::find()
            .all(&db)
            .await
            .unwrap()
            .into_iter()
            .map(|m| (m.key, m.sort_order))
            .collect();

        ReorderService::reorder_categories(&db, &order).await.ok();
        let second: Vec<(String, i32)> = category::Entity::find()
            .all(&db)
            .await
            .unwrap()
            .into_iter()
            .map(|m| (m.key, m.sort_order))
            .collect();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn media_reorder_never_leaks_into_another_project() {
        let db = test_db().await;
        let p = insert_project(&db, "p", 1, true).await;
        let q = insert_project(&db, "q", 2, true).await;
        let m1 = insert_media(&db, p.id, "p-1", 1).await;
        let m2 = insert_media(&db, p.id, "p-2", 2).await;
        let m3 = insert_media(&db, p.id, "p-3", 3).await;
        let q1 = insert_media(&db, q.id, "q-1", 1).await;

        // q1 smuggled into p's ordering must stay untouched
        ReorderService::reorder_media(
            &db,
            p.public_id,
            &[m3.public_id, q1.public_id, m1.public_id, m2.public_id],
        )
        .await
        .unwrap_or_else(|e| panic!("reorder failed: {}", e.message));

        let q_media = media::Entity::find_by_id(q1.id).one(&db).await.unwrap().unwrap();
        assert_eq!(q_media.sort_order, 1);

        let p_media = media::Entity::find()
            .filter(media::Column::ProjectId.eq(p.id))
            .order_by_asc(media::Column::SortOrder)
            .order_by_asc(media::Column::CreatedAt)
            .all(&db)
            .await
            .unwrap();
        let srcs: Vec<&str> = p_media.iter().map(|m| m.src.as_str()).collect();
        assert_eq!(srcs, ["p-3", "p-1", "p-2"]);
    }

    #[tokio::test]
    async fn ids_missing_from_the_list_keep_their_rank() {
        let db = test_db().await;
        let a = insert_category(&db, "a", "A", 1).await;
        let b = insert_category(&db, "b", "B", 2).await;
        let c = insert_category(&db, "c", "C", 3).await;

        // Caller only submits two of three ids
        ReorderService::reorder_categories(&db, &[b.public_id, a.public_id])
            .await
            .unwrap_or_else(|e| panic!("reorder failed: {}", e.message));

        let c_row = category::Entity::find_by_id(c.id).one(&db).await.unwrap().unwrap();
        assert_eq!(c_row.sort_order, 3);

        let unknown = Uuid::now_v7();
        // Unknown ids match zero rows and are not an error
        ReorderService::reorder_categories(&db, &[a.public_id, unknown, b.public_id])
            .await
            .unwrap_or_else(|e| panic!("reorder failed: {}", e.message));
    }

    #[tokio::test]
    async fn failed_writes_are_reported_per_id() {
        let db = test_db().await;
        let p = insert_project(&db, "p", 1, true).await;
        let m1 = insert_media(&db, p.id, "m-1", 1).await;
        let m2 = insert_media(&db, p.id, "m-2", 2).await;
        let m3 = insert_media(&db, p.id, "m-3", 3).await;

        db.execute(Statement::from_string(
            db.get_database_backend(),
            "DROP TABLE media".to_string(),
        ))
        .await
        .unwrap();

        let err = ReorderService::reorder_media(
            &db,
            p.public_id,
            &[m2.public_id, m1.public_id, m3.public_id],
        )
        .await
        .expect_err("writes against a dropped table must fail");

        assert_eq!(err.code, "REORDER_PARTIAL_FAILURE");
        assert_eq!(err.failed_ids, vec![m2.public_id, m1.public_id, m3.public_id]);
    }
}
