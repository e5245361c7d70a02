use sqlx::{QueryBuilder, Result as SqlxResult, Sqlite, SqliteExecutor};

use crate::models::ProfileRow;
use crate::stats::Stats;

/// Search for players whose first and last names start with the given
/// prefixes. Matching follows the storage collation; results are ordered by
/// (first name, last name) ascending. Empty prefixes match everyone.
pub async fn find_players<'e>(
    executor: impl SqliteExecutor<'e>,
    first_name: &str,
    last_name: &str,
) -> SqlxResult<Vec<String>> {
    sqlx::query_scalar::<_, String>(
        r#"
        SELECT player_id
        FROM people
        WHERE name_first LIKE ?1 AND name_last LIKE ?2
        ORDER BY name_first, name_last
        "#,
    )
    .bind(format!("{first_name}%"))
    .bind(format!("{last_name}%"))
    .fetch_all(executor)
    .await
}

/// Fetch profile rows for the given ids in one query.
///
/// Ids with no matching row are simply absent from the result; the caller
/// decides how to mask them.
pub async fn profiles_by_ids<'e>(
    executor: impl SqliteExecutor<'e>,
    ids: &[String],
) -> SqlxResult<Vec<ProfileRow>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut query = QueryBuilder::<Sqlite>::new(
        "SELECT player_id, name_first, name_last, birth_year, birth_country \
         FROM people WHERE player_id IN (",
    );
    let mut separated = query.separated(", ");
    for id in ids {
        separated.push_bind(id);
    }
    separated.push_unseparated(")");

    query
        .build_query_as::<ProfileRow>()
        .fetch_all(executor)
        .await
}

/// Fetch career stats for the given ids in one query, summing every season
/// row per player before deriving rates.
pub async fn stats_by_ids<'e>(
    executor: impl SqliteExecutor<'e>,
    ids: &[String],
) -> SqlxResult<Vec<(String, Stats)>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut query = QueryBuilder::<Sqlite>::new(
        "SELECT player_id, SUM(at_bats), SUM(hits), SUM(doubles), SUM(triples), \
         SUM(home_runs), SUM(strikeouts) FROM batting WHERE player_id IN (",
    );
    let mut separated = query.separated(", ");
    for id in ids {
        separated.push_bind(id);
    }
    separated.push_unseparated(") GROUP BY player_id");

    let rows: Vec<(String, i64, i64, i64, i64, i64, i64)> =
        query.build_query_as().fetch_all(executor).await?;

    Ok(rows
        .into_iter()
        .map(|(id, at_bats, hits, doubles, triples, home_runs, strikeouts)| {
            (
                id,
                Stats::from_counts(at_bats, hits, doubles, triples, home_runs, strikeouts),
            )
        })
        .collect())
}
