
/// CRUD operations tests for all models
pub mod crud_tests;

use sea_orm::DatabaseConnection;

/// Skip database-backed tests when no database is reachable.
pub fn skip_db_tests() -> bool {
    let _ = dotenvy::dotenv();
    std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err()
}

/// Connect and bring the schema up; used by every database-backed test.
pub async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    use migration::MigratorTrait;

    let db = crate::db::connect().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
