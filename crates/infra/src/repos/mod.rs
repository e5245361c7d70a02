pub mod lineups;
pub mod players;
