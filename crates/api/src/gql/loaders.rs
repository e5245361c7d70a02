use async_graphql::dataloader::{DataLoader, HashMapCache, Loader};
use async_graphql::Request;
use infra::{db::Db, models::ProfileRow, repos::players, stats::Stats};
use std::{collections::HashMap, future::Future, sync::Arc};

pub type ProfileDataLoader = DataLoader<ProfileLoader, HashMapCache>;
pub type StatsDataLoader = DataLoader<StatsLoader, HashMapCache>;

/// Attach fresh caching loaders to one request.
///
/// The cache lives and dies with the request: a given id hits storage at
/// most once per response tree no matter how many fields ask for it, and
/// nothing is remembered across requests.
pub fn attach_request_loaders(request: Request, db: &Db) -> Request {
    request
        .data(DataLoader::with_cache(
            ProfileLoader::new(db.clone()),
            tokio::spawn,
            HashMapCache::default(),
        ))
        .data(DataLoader::with_cache(
            StatsLoader::new(db.clone()),
            tokio::spawn,
            HashMapCache::default(),
        ))
}

#[derive(Clone)]
pub struct ProfileLoader {
    pool: Db,
}

impl ProfileLoader {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

impl Loader<String> for ProfileLoader {
    type Value = ProfileRow;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[String],
    ) -> impl Future<Output = std::result::Result<HashMap<String, Self::Value>, Self::Error>> + Send
    {
        let pool = self.pool.clone();
        let ids: Vec<String> = keys.to_vec();

        async move {
            let rows = players::profiles_by_ids(&pool, &ids)
                .await
                .map_err(Arc::new)?;

            Ok(rows.into_iter().map(|r| (r.player_id.clone(), r)).collect())
        }
    }
}

// StatsLoader - batch load career stats by player id
#[derive(Clone)]
pub struct StatsLoader {
    pool: Db,
}

impl StatsLoader {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

impl Loader<String> for StatsLoader {
    type Value = Stats;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[String],
    ) -> impl Future<Output = std::result::Result<HashMap<String, Self::Value>, Self::Error>> + Send
    {
        let pool = self.pool.clone();
        let ids: Vec<String> = keys.to_vec();

        async move {
            let rows = players::stats_by_ids(&pool, &ids).await.map_err(Arc::new)?;

            Ok(rows.into_iter().collect())
        }
    }
}
