use async_graphql::{Context, MaybeUndefined, Object, Result};

use crate::gql::error::GqlError;
use crate::gql::types::Lineup;
use crate::state::AppState;
use infra::models::Position;
use infra::repos::lineups;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create and/or partially update a lineup.
    ///
    /// Without `lineup_id` a fresh lineup is created first. Each position
    /// argument is independent: omitted leaves the slot untouched, explicit
    /// null unassigns it, and a string selects a player by exact id or by a
    /// "first last" name-prefix pair. An unresolvable selector leaves the
    /// slot unassigned rather than erroring.
    #[allow(clippy::too_many_arguments)]
    async fn lineup(
        &self,
        ctx: &Context<'_>,
        lineup_id: Option<i64>,
        pitcher: MaybeUndefined<String>,
        catcher: MaybeUndefined<String>,
        first_base: MaybeUndefined<String>,
        second_base: MaybeUndefined<String>,
        third_base: MaybeUndefined<String>,
        shortstop: MaybeUndefined<String>,
        left_field: MaybeUndefined<String>,
        center_field: MaybeUndefined<String>,
        right_field: MaybeUndefined<String>,
    ) -> Result<Option<Lineup>> {
        let state = ctx.data::<AppState>()?;

        let lineup_id = match lineup_id {
            Some(id) => id,
            None => {
                lineups::create(&state.db)
                    .await
                    .map_err(GqlError::from)?
                    .lineup_id
            }
        };

        let fields = [
            (Position::Pitcher, pitcher),
            (Position::Catcher, catcher),
            (Position::FirstBase, first_base),
            (Position::SecondBase, second_base),
            (Position::ThirdBase, third_base),
            (Position::Shortstop, shortstop),
            (Position::LeftField, left_field),
            (Position::CenterField, center_field),
            (Position::RightField, right_field),
        ];

        // Positions are applied in this fixed declaration order, regardless
        // of how the arguments were written in the query; with the storage
        // engine's replace-on-conflict semantics the last-applied write for
        // a given player wins.
        let mut assignments = Vec::new();
        for (position, selector) in fields {
            match selector {
                MaybeUndefined::Undefined => {}
                MaybeUndefined::Null => assignments.push((position, None)),
                MaybeUndefined::Value(selector) => assignments.push((position, Some(selector))),
            }
        }

        let row = lineups::update(&state.db, lineup_id, &assignments)
            .await
            .map_err(GqlError::from)?;

        Ok(Some(Lineup::new(row)))
    }
}
