use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 1. Projects
        manager.create_table(
            Table::create()
                .table(Projects::Table)
                .if_not_exists()
                .col(ColumnDef::new(Projects::Id).big_integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Projects::PublicId).uuid().not_null().unique_key()) // External ID
                .col(ColumnDef::new(Projects::Title).string().not_null())
                .col(ColumnDef::new(Projects::Description).text().not_null())
                .col(ColumnDef::new(Projects::Date).string().not_null())
                .col(ColumnDef::new(Projects::Thumbnail).string().not_null())
                .col(ColumnDef::new(Projects::Tags).json_binary().not_null())
                .col(ColumnDef::new(Projects::IsPublished).boolean().not_null().default(false))
                .col(ColumnDef::new(Projects::SortOrder).integer().not_null())
                .col(ColumnDef::new(Projects::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .col(ColumnDef::new(Projects::UpdatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .to_owned(),
        ).await?;

        // 2. Categories
        // `key` is intentionally not unique at the DB level; the service layer
        // rejects duplicates with a friendlier error.
        manager.create_table(
            Table::create()
                .table(Categories::Table)
                .if_not_exists()
                .col(ColumnDef::new(Categories::Id).big_integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Categories::PublicId).uuid().not_null().unique_key())
                .col(ColumnDef::new(Categories::Key).string().not_null())
                .col(ColumnDef::new(Categories::Label).string().not_null())
                .col(ColumnDef::new(Categories::SortOrder).integer().not_null())
                .col(ColumnDef::new(Categories::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .to_owned(),
        ).await?;

        // 3. Media (owned by a project, rank scoped per project)
        manager.create_table(
            Table::create()
                .table(Media::Table)
                .if_not_exists()
                .col(ColumnDef::new(Media::Id).big_integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Media::PublicId).uuid().not_null().unique_key())
                .col(ColumnDef::new(Media::ProjectId).big_integer().not_null())
                .col(ColumnDef::new(Media::Type).string().not_null())
                .col(ColumnDef::new(Media::Src).string().not_null())
                .col(ColumnDef::new(Media::Alt).string().null())
                .col(ColumnDef::new(Media::SortOrder).integer().not_null())
                .col(ColumnDef::new(Media::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_media_project_id")
                        .from(Media::Table, Media::ProjectId)
                        .to(Projects::Table, Projects::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        // 4. Project <-> Category join
        manager.create_table(
            Table::create()
                .table(ProjectCategories::Table)
                .if_not_exists()
                .col(ColumnDef::new(ProjectCategories::ProjectId).big_integer().not_null())
                .col(ColumnDef::new(ProjectCategories::CategoryId).big_integer().not_null())
                .primary_key(
                    Index::create()
                        .col(ProjectCategories::ProjectId)
                        .col(ProjectCategories::CategoryId)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_project_categories_project_id")
                        .from(ProjectCategories::Table, ProjectCategories::ProjectId)
                        .to(Projects::Table, Projects::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_project_categories_category_id")
                        .from(ProjectCategories::Table, ProjectCategories::CategoryId)
                        .to(Categories::Table, Categories::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        // Indexes for the hot read paths
        manager.create_index(Index::create().name("idx_projects_sort_order").table(Projects::Table).col(Projects::SortOrder).to_owned()).await?;
        manager.create_index(Index::create().name("idx_projects_is_published").table(Projects::Table).col(Projects::IsPublished).to_owned()).await?;
        manager.create_index(Index::create().name("idx_categories_sort_order").table(Categories::Table).col(Categories::SortOrder).to_owned()).await?;
        manager.create_index(Index::create().name("idx_media_project_id").table(Media::Table).col(Media::ProjectId).to_owned()).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ProjectCategories::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Media::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Categories::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Projects::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(Iden)]
enum Projects {
    Table,
    Id,
    PublicId,
    Title,
    Description,
    Date,
    Thumbnail,
    Tags,
    IsPublished,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Categories {
    Table,
    Id,
    PublicId,
    Key,
    Label,
    SortOrder,
    CreatedAt,
}

#[derive(Iden)]
enum Media {
    Table,
    Id,
    PublicId,
    ProjectId,
    Type,
    Src,
    Alt,
    SortOrder,
    CreatedAt,
}

#[derive(Iden)]
enum ProjectCategories {
    Table,
    ProjectId,
    CategoryId,
}
