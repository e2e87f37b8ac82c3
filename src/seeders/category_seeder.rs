use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};
use slug::slugify;
use uuid::Uuid;
use crate::entities::category;

pub async fn seed_categories(db: &DatabaseConnection) -> Result<(), String> {
    let labels = vec!["WEB", "AI VIDEO", "ETC"];

    for label in labels {
        let key = slugify(label);

        let exists = category::Entity::find()
            .filter(category::Column::Key.eq(&key))
            .one(db)
            .await
            .map_err(|e| e.to_string())?;

        if exists.is_none() {
            let next_rank = category::Entity::find()
                .order_by_desc(category::Column::SortOrder)
                .one(db)
                .await
                .map_err(|e| e.to_string())?
                .map(|c| c.sort_order)
                .unwrap_or(0)
                + 1;

            let new_category = category::ActiveModel {
                public_id: Set(Uuid::now_v7()),
                key: Set(key),
                label: Set(label.to_string()),
                sort_order: Set(next_rank),
                created_at: Set(Utc::now()),
                ..Default::default()
            };
            new_category.insert(db).await.map_err(|e| e.to_string())?;
            tracing::info!("Seeded category: {}", label);
        }
    }

    Ok(())
}
