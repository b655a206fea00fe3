use crate::types::{ClaimRow, CreateClaimParams};

/// Insert a new claim. The UNIQUE (domain_id, handle) constraint rejects a
/// concurrent first-time claim for the same name; callers translate that
/// violation with [`is_unique_violation`].
pub async fn create(
    executor: impl sqlx::PgExecutor<'_>,
    params: &CreateClaimParams,
) -> Result<ClaimRow, sqlx::Error> {
    sqlx::query_as::<_, ClaimRow>(
        r#"
        INSERT INTO handle_claims (domain_id, handle, did)
        VALUES ($1, $2, $3)
        RETURNING id, domain_id, handle, did, created_at
        "#,
    )
    .bind(params.domain_id)
    .bind(&params.handle)
    .bind(&params.did)
    .fetch_one(executor)
    .await
}

/// Look up the DID recorded for (domain name, local name), the read side
/// consumed by the domain-verification flow
pub async fn find_did(
    executor: impl sqlx::PgExecutor<'_>,
    domain: &str,
    handle: &str,
) -> Result<Option<String>, sqlx::Error> {
    let row: Option<(String,)> = sqlx::query_as(
        r#"
        SELECT c.did
        FROM handle_claims c
        JOIN domains d ON d.id = c.domain_id
        WHERE d.name = $1 AND c.handle = $2
        "#,
    )
    .bind(domain)
    .bind(handle)
    .fetch_optional(executor)
    .await?;
    Ok(row.map(|(did,)| did))
}

/// Whether an insert failed on the (domain_id, handle) uniqueness constraint
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.is_unique_violation(),
        _ => false,
    }
}
