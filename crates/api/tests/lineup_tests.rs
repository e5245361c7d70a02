mod common;

use common::{execute_graphql, setup_schema};
use serde_json::json;

#[tokio::test]
async fn mutation_creates_a_lineup_when_id_is_omitted() {
    let (schema, db) = setup_schema().await;

    let response = execute_graphql(
        &schema,
        &db,
        r#"
        mutation {
            lineup(pitcher: "1", catcher: "2", firstBase: "bork", rightField: "3") {
                lineupId
                pitcher { playerId }
                catcher { playerId }
                firstBase { playerId }
                rightField { playerId }
                shortstop { playerId }
            }
        }
        "#,
        None,
    )
    .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({
            "lineup": {
                "lineupId": 1,
                "pitcher": { "playerId": "1" },
                "catcher": { "playerId": "2" },
                "firstBase": null,
                "rightField": { "playerId": "3" },
                "shortstop": null
            }
        })
    );
}

#[tokio::test]
async fn mutation_resolves_selectors_by_name_prefix() {
    let (schema, db) = setup_schema().await;

    let response = execute_graphql(
        &schema,
        &db,
        r#"
        mutation {
            lineup(pitcher: "Andy Anderson", catcher: "B B", firstBase: "Charlie") {
                pitcher { playerId }
                catcher { playerId }
                firstBase { playerId }
            }
        }
        "#,
        None,
    )
    .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({
            "lineup": {
                "pitcher": { "playerId": "1" },
                "catcher": { "playerId": "2" },
                "firstBase": { "playerId": "4" }
            }
        })
    );
}

#[tokio::test]
async fn assigning_one_player_twice_keeps_the_last_position() {
    let (schema, db) = setup_schema().await;

    let response = execute_graphql(
        &schema,
        &db,
        r#"
        mutation {
            lineup(pitcher: "Andy Anderson", catcher: "Andy Anderson") {
                pitcher { playerId }
                catcher { playerId }
            }
        }
        "#,
        None,
    )
    .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({
            "lineup": {
                "pitcher": null,
                "catcher": { "playerId": "1" }
            }
        })
    );
}

#[tokio::test]
async fn explicit_null_unassigns_a_position() {
    let (schema, db) = setup_schema().await;

    let response = execute_graphql(
        &schema,
        &db,
        r#"mutation { lineup(pitcher: "1", catcher: "2") { lineupId } }"#,
        None,
    )
    .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let response = execute_graphql(
        &schema,
        &db,
        r#"
        mutation {
            lineup(lineupId: 1, pitcher: null) {
                pitcher { playerId }
                catcher { playerId }
            }
        }
        "#,
        None,
    )
    .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({
            "lineup": {
                "pitcher": null,
                "catcher": { "playerId": "2" }
            }
        })
    );
}

#[tokio::test]
async fn lineup_query_expands_players_and_averages_their_stats() {
    let (schema, db) = setup_schema().await;

    let response = execute_graphql(
        &schema,
        &db,
        r#"mutation { lineup(pitcher: "1", catcher: "2") { lineupId } }"#,
        None,
    )
    .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let response = execute_graphql(
        &schema,
        &db,
        r#"
        {
            lineup(lineupId: 1) {
                lineupId
                average { atBats homeRuns hits strikeouts battingAverage sluggingPercentage }
                pitcher { playerId profile { name } }
                catcher { playerId }
                leftField { playerId }
            }
        }
        "#,
        None,
    )
    .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({
            "lineup": {
                "lineupId": 1,
                "average": {
                    "atBats": 75,
                    "homeRuns": 8,
                    "hits": 8,
                    "strikeouts": 9,
                    "battingAverage": 0.12,
                    "sluggingPercentage": 0.985
                },
                "pitcher": { "playerId": "1", "profile": { "name": "Andy Anderson" } },
                "catcher": { "playerId": "2" },
                "leftField": null
            }
        })
    );
}

#[tokio::test]
async fn unknown_lineup_comes_back_empty_with_zero_average() {
    let (schema, db) = setup_schema().await;

    let response = execute_graphql(
        &schema,
        &db,
        r#"
        {
            lineup(lineupId: 99) {
                lineupId
                average { atBats battingAverage }
                pitcher { playerId }
            }
        }
        "#,
        None,
    )
    .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({
            "lineup": {
                "lineupId": 99,
                "average": { "atBats": 0, "battingAverage": 0.0 },
                "pitcher": null
            }
        })
    );
}
