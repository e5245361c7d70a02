use sqlx::Result as SqlxResult;

use crate::db::Db;
use crate::models::{LineupRow, Position};

/// Insert a new lineup and return it with every slot unassigned.
pub async fn create(db: &Db) -> SqlxResult<LineupRow> {
    let result = sqlx::query("INSERT INTO lineups DEFAULT VALUES")
        .execute(db)
        .await?;

    get(db, result.last_insert_rowid()).await
}

/// Hydrate a lineup from its assignment rows.
///
/// No existence check: an id that was never created comes back with all nine
/// slots unassigned.
pub async fn get(db: &Db, lineup_id: i64) -> SqlxResult<LineupRow> {
    let rows: Vec<(String, Option<String>)> = sqlx::query_as(
        r#"
        SELECT position, player_id
        FROM lineup_assignments
        WHERE lineup_id = ?1
        "#,
    )
    .bind(lineup_id)
    .fetch_all(db)
    .await?;

    let mut lineup = LineupRow::empty(lineup_id);
    for (label, player_id) in rows {
        if let Some(position) = Position::parse(&label) {
            lineup.set(position, player_id);
        }
    }

    Ok(lineup)
}

/// Apply partial position assignments in the supplied order, then return the
/// refreshed lineup.
///
/// A `Some(selector)` resolves to a player id inside the upsert itself: an
/// exact id match wins, otherwise the selector splits on its first space
/// into a (first, last) name-prefix pair and the first player matching both
/// prefixes in storage order is taken. An unresolvable selector, like an
/// explicit `None`, stores a NULL assignment and the slot ends up
/// unassigned; neither is an error.
///
/// `INSERT OR REPLACE` against the UNIQUE constraints on (lineup, position)
/// and (lineup, player) makes the last write win: assigning a player who
/// already holds another slot in this lineup vacates that slot.
pub async fn update(
    db: &Db,
    lineup_id: i64,
    assignments: &[(Position, Option<String>)],
) -> SqlxResult<LineupRow> {
    let mut tx = db.begin().await?;

    for (position, selector) in assignments {
        match selector {
            Some(selector) => {
                let (first_name, last_name) =
                    selector.split_once(' ').unwrap_or((selector.as_str(), ""));

                sqlx::query(
                    r#"
                    INSERT OR REPLACE INTO lineup_assignments (lineup_id, position, player_id)
                    VALUES (
                        ?1,
                        ?2,
                        (
                            SELECT player_id
                            FROM people
                            WHERE player_id = ?3
                               OR (name_first LIKE ?4 AND name_last LIKE ?5)
                            LIMIT 1
                        )
                    )
                    "#,
                )
                .bind(lineup_id)
                .bind(position.as_str())
                .bind(selector)
                .bind(format!("{first_name}%"))
                .bind(format!("{last_name}%"))
                .execute(&mut *tx)
                .await?;
            }
            None => {
                sqlx::query(
                    r#"
                    INSERT OR REPLACE INTO lineup_assignments (lineup_id, position, player_id)
                    VALUES (?1, ?2, NULL)
                    "#,
                )
                .bind(lineup_id)
                .bind(position.as_str())
                .execute(&mut *tx)
                .await?;
            }
        }
    }

    tx.commit().await?;

    get(db, lineup_id).await
}
