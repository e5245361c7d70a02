use async_graphql::{Context, Object, Result};

use crate::gql::error::GqlError;
use crate::gql::types::{Lineup, Player};
use crate::state::AppState;
use infra::repos::{lineups, players};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Shell for a single player. Never null: profile and stats resolve
    /// lazily and mask unknown ids with sentinels.
    async fn player(&self, player_id: String) -> Option<Player> {
        Some(Player::new(player_id))
    }

    /// Players whose first and last names start with the given prefixes.
    async fn players(
        &self,
        ctx: &Context<'_>,
        first_name: String,
        last_name: String,
    ) -> Result<Vec<Player>> {
        let state = ctx.data::<AppState>()?;
        let ids = players::find_players(&state.db, &first_name, &last_name)
            .await
            .map_err(GqlError::from)?;

        Ok(ids.into_iter().map(Player::new).collect())
    }

    /// A lineup by id. Unknown ids are not an error; they come back with
    /// every slot unassigned.
    async fn lineup(&self, ctx: &Context<'_>, lineup_id: i64) -> Result<Option<Lineup>> {
        let state = ctx.data::<AppState>()?;
        let row = lineups::get(&state.db, lineup_id)
            .await
            .map_err(GqlError::from)?;

        Ok(Some(Lineup::new(row)))
    }
}
