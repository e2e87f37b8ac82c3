use sea_orm::entity::prelude::*;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// Display tags, stored as a JSON array. Insertion order is meaningful.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct TagList(pub Vec<String>);

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(skip_serializing)]
    pub id: i64,
    #[sea_orm(unique, index)]
    pub public_id: Uuid,

    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    // Free-form display string ("2024.03"), never parsed as a date
    pub date: String,
    pub thumbnail: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub tags: TagList,

    pub is_published: bool,
    // Descending rank: highest sort_order renders first
    pub sort_order: i32,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::project_category::Entity")]
    ProjectCategory,
    #[sea_orm(has_many = "super::media::Entity")]
    Media,
}

impl Related<super::media::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Media.def()
    }
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        super::project_category::Relation::Category.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::project_category::Relation::Project.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
