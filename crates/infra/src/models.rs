use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The nine fielding positions a lineup assigns players to.
///
/// Stored as TEXT using the camelCase labels below, which are also the
/// GraphQL field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Pitcher,
    Catcher,
    FirstBase,
    SecondBase,
    ThirdBase,
    Shortstop,
    LeftField,
    CenterField,
    RightField,
}

impl Position {
    pub const ALL: [Position; 9] = [
        Position::Pitcher,
        Position::Catcher,
        Position::FirstBase,
        Position::SecondBase,
        Position::ThirdBase,
        Position::Shortstop,
        Position::LeftField,
        Position::CenterField,
        Position::RightField,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Position::Pitcher => "pitcher",
            Position::Catcher => "catcher",
            Position::FirstBase => "firstBase",
            Position::SecondBase => "secondBase",
            Position::ThirdBase => "thirdBase",
            Position::Shortstop => "shortstop",
            Position::LeftField => "leftField",
            Position::CenterField => "centerField",
            Position::RightField => "rightField",
        }
    }

    pub fn parse(label: &str) -> Option<Position> {
        Position::ALL.into_iter().find(|p| p.as_str() == label)
    }
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ProfileRow {
    pub player_id: String,
    pub name_first: String,
    pub name_last: String,
    pub birth_year: i64,
    pub birth_country: String,
}

/// A lineup with its position assignments, one `Option<player id>` per slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineupRow {
    pub lineup_id: i64,
    pub pitcher: Option<String>,
    pub catcher: Option<String>,
    pub first_base: Option<String>,
    pub second_base: Option<String>,
    pub third_base: Option<String>,
    pub shortstop: Option<String>,
    pub left_field: Option<String>,
    pub center_field: Option<String>,
    pub right_field: Option<String>,
}

impl LineupRow {
    pub fn empty(lineup_id: i64) -> Self {
        Self {
            lineup_id,
            ..Default::default()
        }
    }

    pub fn player_at(&self, position: Position) -> Option<&str> {
        match position {
            Position::Pitcher => self.pitcher.as_deref(),
            Position::Catcher => self.catcher.as_deref(),
            Position::FirstBase => self.first_base.as_deref(),
            Position::SecondBase => self.second_base.as_deref(),
            Position::ThirdBase => self.third_base.as_deref(),
            Position::Shortstop => self.shortstop.as_deref(),
            Position::LeftField => self.left_field.as_deref(),
            Position::CenterField => self.center_field.as_deref(),
            Position::RightField => self.right_field.as_deref(),
        }
    }

    pub fn set(&mut self, position: Position, player_id: Option<String>) {
        let slot = match position {
            Position::Pitcher => &mut self.pitcher,
            Position::Catcher => &mut self.catcher,
            Position::FirstBase => &mut self.first_base,
            Position::SecondBase => &mut self.second_base,
            Position::ThirdBase => &mut self.third_base,
            Position::Shortstop => &mut self.shortstop,
            Position::LeftField => &mut self.left_field,
            Position::CenterField => &mut self.center_field,
            Position::RightField => &mut self.right_field,
        };
        *slot = player_id;
    }

    /// Filled slots in position order.
    pub fn assigned(&self) -> impl Iterator<Item = (Position, &str)> + '_ {
        Position::ALL
            .into_iter()
            .filter_map(move |position| self.player_at(position).map(|id| (position, id)))
    }
}
