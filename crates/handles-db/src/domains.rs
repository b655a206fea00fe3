use crate::types::DomainRow;

/// Get a domain row by name, creating it if it does not exist (idempotent)
pub async fn get_or_create(
    executor: impl sqlx::PgExecutor<'_>,
    name: &str,
) -> Result<DomainRow, sqlx::Error> {
    // The no-op DO UPDATE makes INSERT return the existing row on conflict
    sqlx::query_as::<_, DomainRow>(
        r#"
        INSERT INTO domains (name)
        VALUES ($1)
        ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
        RETURNING id, name, created_at
        "#,
    )
    .bind(name)
    .fetch_one(executor)
    .await
}
