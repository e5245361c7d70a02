use async_graphql::{Context, Object, Result, SimpleObject};

use infra::models::{LineupRow, Position, ProfileRow};
use infra::stats;

use super::loaders::{ProfileDataLoader, StatsDataLoader};

/// Round a rate stat for the wire; internal values keep full precision.
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[derive(SimpleObject, Clone)]
pub struct Profile {
    pub name: String,
    pub country: String,
    pub year: i64,
}

impl Profile {
    /// Sentinel for ids with no matching row; unknown players are masked,
    /// never surfaced as errors.
    pub fn unknown() -> Self {
        Self {
            name: "UNKNOWN".into(),
            country: "UNK".into(),
            year: 0,
        }
    }
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Self {
            name: format!("{} {}", row.name_first, row.name_last),
            country: row.birth_country,
            year: row.birth_year,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct Stats {
    pub at_bats: i64,
    pub home_runs: i64,
    pub hits: i64,
    pub strikeouts: i64,
    pub batting_average: f64,
    pub slugging_percentage: f64,
}

impl From<stats::Stats> for Stats {
    fn from(stats: stats::Stats) -> Self {
        Self {
            at_bats: stats.at_bats,
            home_runs: stats.home_runs,
            hits: stats.hits,
            strikeouts: stats.strikeouts,
            batting_average: round3(stats.batting_average),
            slugging_percentage: round3(stats.slugging_percentage),
        }
    }
}

/// Shell around a player id. Profile and stats resolve lazily through the
/// per-request loaders, so sibling players in one response tree coalesce
/// into a single query per kind.
pub struct Player {
    player_id: String,
}

impl Player {
    pub fn new(player_id: impl Into<String>) -> Self {
        Self {
            player_id: player_id.into(),
        }
    }
}

#[Object]
impl Player {
    async fn player_id(&self) -> &str {
        &self.player_id
    }

    async fn profile(&self, ctx: &Context<'_>) -> Result<Profile> {
        let loader = ctx.data::<ProfileDataLoader>()?;
        let row = loader.load_one(self.player_id.clone()).await?;
        Ok(row.map(Profile::from).unwrap_or_else(Profile::unknown))
    }

    async fn stats(&self, ctx: &Context<'_>) -> Result<Stats> {
        let loader = ctx.data::<StatsDataLoader>()?;
        let stats = loader.load_one(self.player_id.clone()).await?;
        Ok(stats.unwrap_or_default().into())
    }
}

pub struct Lineup {
    row: LineupRow,
}

impl Lineup {
    pub fn new(row: LineupRow) -> Self {
        Self { row }
    }

    fn player_at(&self, position: Position) -> Option<Player> {
        self.row.player_at(position).map(Player::new)
    }
}

#[Object]
impl Lineup {
    async fn lineup_id(&self) -> i64 {
        self.row.lineup_id
    }

    /// Career stats averaged over every filled position.
    async fn average(&self, ctx: &Context<'_>) -> Result<Stats> {
        let loader = ctx.data::<StatsDataLoader>()?;

        let ids: Vec<String> = self.row.assigned().map(|(_, id)| id.to_string()).collect();
        let mut loaded = loader.load_many(ids.clone()).await?;

        // Players with no batting rows still count, as all-zero stats.
        let all: Vec<stats::Stats> = ids
            .iter()
            .map(|id| loaded.remove(id).unwrap_or_default())
            .collect();

        Ok(stats::Stats::average(&all).into())
    }

    async fn pitcher(&self) -> Option<Player> {
        self.player_at(Position::Pitcher)
    }

    async fn catcher(&self) -> Option<Player> {
        self.player_at(Position::Catcher)
    }

    async fn first_base(&self) -> Option<Player> {
        self.player_at(Position::FirstBase)
    }

    async fn second_base(&self) -> Option<Player> {
        self.player_at(Position::SecondBase)
    }

    async fn third_base(&self) -> Option<Player> {
        self.player_at(Position::ThirdBase)
    }

    async fn shortstop(&self) -> Option<Player> {
        self.player_at(Position::Shortstop)
    }

    async fn left_field(&self) -> Option<Player> {
        self.player_at(Position::LeftField)
    }

    async fn center_field(&self) -> Option<Player> {
        self.player_at(Position::CenterField)
    }

    async fn right_field(&self) -> Option<Player> {
        self.player_at(Position::RightField)
    }
}
