//! Schema bootstrap for the items table

use sqlx::MySqlPool;

/// Create the `items` table if it does not exist yet.
pub async fn run(pool: &MySqlPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running item migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS items (
            id INT NOT NULL AUTO_INCREMENT,
            name VARCHAR(100) NULL,
            is_complete TINYINT(1) NOT NULL DEFAULT 0,
            PRIMARY KEY (id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Item migrations complete");
    Ok(())
}
