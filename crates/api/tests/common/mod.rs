use api::gql::build_schema;
use api::gql::loaders::attach_request_loaders;
use api::gql::schema::ApiSchema;
use api::AppState;
use async_graphql::{Request, Variables};
use infra::db::{self, Db};

/// In-memory schema over the four-player fixture directory.
pub async fn setup_schema() -> (ApiSchema, Db) {
    let db = db::connect_in_memory().await.expect("in-memory database");
    seed(&db).await;

    let state = AppState::new(db.clone());
    (build_schema(state), db)
}

async fn seed(db: &Db) {
    let people = [
        ("1", "Andy", "Anderson", 2000, "CAN"),
        ("2", "Bob", "Ball", 2001, "CAN"),
        ("3", "Bill", "Baker", 2002, "USA"),
        ("4", "Charlie", "Cho", 2003, "CAN"),
    ];
    for (id, first, last, year, country) in people {
        sqlx::query(
            "INSERT INTO people (player_id, name_first, name_last, birth_year, birth_country) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(id)
        .bind(first)
        .bind(last)
        .bind(year)
        .bind(country)
        .execute(db)
        .await
        .expect("seed people");
    }

    let batting = [
        ("1", 10, 20, 2, 2, 3, 4),
        ("1", 90, 21, 3, 8, 7, 6),
        ("2", 50, 22, 3, 6, 7, 8),
        ("3", 10, 23, 4, 2, 3, 4),
        ("3", 10, 24, 2, 2, 3, 4),
        ("3", 10, 23, 3, 2, 3, 4),
        ("4", 50, 22, 2, 6, 7, 8),
    ];
    for (id, at_bats, doubles, triples, home_runs, hits, strikeouts) in batting {
        sqlx::query(
            "INSERT INTO batting (player_id, at_bats, doubles, triples, home_runs, hits, strikeouts) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .bind(id)
        .bind(at_bats)
        .bind(doubles)
        .bind(triples)
        .bind(home_runs)
        .bind(hits)
        .bind(strikeouts)
        .execute(db)
        .await
        .expect("seed batting");
    }
}

/// Helper function to execute GraphQL queries and mutations with the same
/// request-scoped loaders the HTTP handler attaches.
pub async fn execute_graphql(
    schema: &ApiSchema,
    db: &Db,
    query: &str,
    variables: Option<Variables>,
) -> async_graphql::Response {
    let mut request = Request::new(query);

    if let Some(vars) = variables {
        request = request.variables(vars);
    }

    schema.execute(attach_request_loaders(request, db)).await
}
