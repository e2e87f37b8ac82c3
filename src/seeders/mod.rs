pub mod category_seeder;

use sea_orm::DatabaseConnection;

pub async fn run_seeders(db: &DatabaseConnection) -> Result<(), String> {
    category_seeder::seed_categories(db).await?;
    Ok(())
}
