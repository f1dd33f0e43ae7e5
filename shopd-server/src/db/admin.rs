//! Operational database utilities surfaced through the CLI

use sqlx::{PgPool, Row};

/// List base tables in the public schema.
pub async fn list_tables(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT table_name
        FROM information_schema.tables
        WHERE table_schema = 'public'
          AND table_type = 'BASE TABLE'
        ORDER BY table_name
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|r| r.get("table_name")).collect())
}

/// Drop the users table and everything referencing it.
pub async fn drop_users_table(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("DROP TABLE IF EXISTS users CASCADE")
        .execute(pool)
        .await?;

    tracing::info!("users table dropped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations};

    #[tokio::test]
    #[ignore = "requires database"]
    async fn bootstrap_tables_are_listed() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("bootstrap failed");

        let tables = list_tables(&pool).await.expect("list failed");
        for expected in ["users", "products", "orders", "order_items", "payments"] {
            assert!(tables.iter().any(|t| t == expected), "missing {expected}");
        }
    }
}
