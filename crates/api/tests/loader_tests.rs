mod common;

use api::gql::loaders::StatsLoader;
use async_graphql::dataloader::{DataLoader, HashMapCache};
use common::{execute_graphql, setup_schema};

#[tokio::test]
async fn repeated_loads_in_one_request_hit_storage_once() {
    let (_schema, db) = setup_schema().await;

    let loader = DataLoader::with_cache(
        StatsLoader::new(db.clone()),
        tokio::spawn,
        HashMapCache::default(),
    );

    let first = loader
        .load_one("2".to_string())
        .await
        .expect("first load")
        .expect("player 2 has stats");
    assert_eq!(first.at_bats, 50);

    // Wipe the underlying rows; a second load through the same loader must
    // come from its cache, not from storage.
    sqlx::query("DELETE FROM batting")
        .execute(&db)
        .await
        .expect("clear batting");

    let second = loader
        .load_one("2".to_string())
        .await
        .expect("cached load")
        .expect("cached stats");
    assert_eq!(second.at_bats, 50);

    // A fresh loader sees the wiped table: nothing carries over between
    // requests.
    let fresh = DataLoader::with_cache(
        StatsLoader::new(db.clone()),
        tokio::spawn,
        HashMapCache::default(),
    );
    assert!(fresh
        .load_one("2".to_string())
        .await
        .expect("uncached load")
        .is_none());
}

#[tokio::test]
async fn batch_failure_reaches_every_pending_field() {
    let (schema, db) = setup_schema().await;

    sqlx::query("DROP TABLE batting")
        .execute(&db)
        .await
        .expect("drop batting");

    let response = execute_graphql(
        &schema,
        &db,
        r#"
        {
            a: player(playerId: "1") { stats { atBats } }
            b: player(playerId: "2") { stats { atBats } }
        }
        "#,
        None,
    )
    .await;

    // Both fields were served by the same failed batch, so each reports the
    // same error.
    assert_eq!(response.errors.len(), 2, "{:?}", response.errors);
    assert_eq!(response.errors[0].message, response.errors[1].message);
}
