//! Shared helpers for the in-memory database tests.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, Database, DatabaseConnection, DbBackend, NotSet, Schema,
    Set,
};
use uuid::Uuid;
use crate::entities::media::MediaType;
use crate::entities::project::TagList;
use crate::entities::{category, media, project, project_category};

pub async fn test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("sqlite connect");
    let schema = Schema::new(DbBackend::Sqlite);
    let backend = db.get_database_backend();

    db.execute(backend.build(&schema.create_table_from_entity(project::Entity)))
        .await
        .expect("projects table");
    db.execute(backend.build(&schema.create_table_from_entity(category::Entity)))
        .await
        .expect("categories table");
    db.execute(backend.build(&schema.create_table_from_entity(media::Entity)))
        .await
        .expect("media table");
    db.execute(backend.build(&schema.create_table_from_entity(project_category::Entity)))
        .await
        .expect("project_categories table");

    db
}

pub async fn insert_project(
    db: &DatabaseConnection,
    title: &str,
    sort_order: i32,
    is_published: bool,
) -> project::Model {
    project::ActiveModel {
        id: NotSet,
        public_id: Set(Uuid::now_v7()),
        title: Set(title.to_string()),
        description: Set(String::new()),
        date: Set("2024.01".to_string()),
        thumbnail: Set(String::new()),
        tags: Set(TagList::default()),
        is_published: Set(is_published),
        sort_order: Set(sort_order),
        created_at: Set(Utc::now()),
        updated_at: Set(Utc::now()),
    }
    .insert(db)
    .await
    .expect("insert project")
}

pub async fn insert_category(
    db: &DatabaseConnection,
    key: &str,
    label: &str,
    sort_order: i32,
) -> category::Model {
    category::ActiveModel {
        id: NotSet,
        public_id: Set(Uuid::now_v7()),
        key: Set(key.to_string()),
        label: Set(label.to_string()),
        sort_order: Set(sort_order),
        created_at: Set(Utc::now()),
    }
    .insert(db)
    .await
    .expect("insert category")
}

pub async fn insert_media(
    db: &DatabaseConnection,
    project_id: i64,
    src: &str,
    sort_order: i32,
) -> media::Model {
    media::ActiveModel {
        id: NotSet,
        public_id: Set(Uuid::now_v7()),
        project_id: Set(project_id),
        media_type: Set(MediaType::Image),
        src: Set(src.to_string()),
        alt: Set(None),
        sort_order: Set(sort_order),
        created_at: Set(Utc::now()),
    }
    .insert(db)
    .await
    .expect("insert media")
}
