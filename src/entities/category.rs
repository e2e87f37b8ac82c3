use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(skip_serializing)]
    pub id: i64,
    #[sea_orm(unique, index)]
    pub public_id: Uuid,

    // Short machine token ("web", "ai-video"); uniqueness is enforced by the
    // service layer, not the schema
    pub key: String,
    pub label: String,
    // Ascending rank: lowest sort_order renders first
    pub sort_order: i32,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::project_category::Entity")]
    ProjectCategory,
}

impl Related<super::project::Entity> for Entity {
    fn to() -> RelationDef {
        super::project_category::Relation::Project.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::project_category::Relation::Category.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
