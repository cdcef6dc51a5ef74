// Database schema initialization

use sqlx::SqlitePool;

use super::DbResult;

pub async fn create_schema(pool: &SqlitePool) -> DbResult<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id INTEGER PRIMARY KEY,
            type TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id INTEGER PRIMARY KEY,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            difficulty INTEGER NOT NULL,
            category INTEGER NOT NULL,
            FOREIGN KEY(category) REFERENCES categories(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    seed_categories(pool).await?;

    Ok(())
}

/// Insert the stock category set. Only runs when the table is empty so a
/// database seeded elsewhere is left untouched.
async fn seed_categories(pool: &SqlitePool) -> DbResult<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
        .fetch_one(pool)
        .await?;

    if count > 0 {
        return Ok(());
    }

    for (id, label) in [
        (1_i64, "Science"),
        (2, "Art"),
        (3, "Geography"),
        (4, "History"),
        (5, "Entertainment"),
        (6, "Sports"),
    ] {
        sqlx::query("INSERT INTO categories (id, type) VALUES ($1, $2)")
            .bind(id)
            .bind(label)
            .execute(pool)
            .await?;
    }

    tracing::info!("seeded default categories");
    Ok(())
}
