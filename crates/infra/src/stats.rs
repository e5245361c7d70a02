//! Batting statistics: rate derivation and aggregation.

/// Career batting totals with derived rate statistics.
///
/// Rates are kept at full precision here; rounding for the wire happens at
/// the GraphQL boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Stats {
    pub at_bats: i64,
    pub home_runs: i64,
    pub hits: i64,
    pub strikeouts: i64,
    pub batting_average: f64,
    pub slugging_percentage: f64,
}

impl Stats {
    /// Derive rate statistics from summed counting stats.
    ///
    /// A player with no recorded at-bats gets both rates defined as 0.0
    /// rather than dividing by zero.
    pub fn from_counts(
        at_bats: i64,
        hits: i64,
        doubles: i64,
        triples: i64,
        home_runs: i64,
        strikeouts: i64,
    ) -> Self {
        let (batting_average, slugging_percentage) = if at_bats == 0 {
            (0.0, 0.0)
        } else {
            let singles = hits - doubles - triples - home_runs;
            let total_bases = singles + 2 * doubles + 3 * triples + 4 * home_runs;
            (
                hits as f64 / at_bats as f64,
                total_bases as f64 / at_bats as f64,
            )
        };

        Self {
            at_bats,
            home_runs,
            hits,
            strikeouts,
            batting_average,
            slugging_percentage,
        }
    }

    /// Average a collection of stats into one summary record.
    ///
    /// Counting fields use truncating integer division; rate fields are an
    /// arithmetic mean. The average of nothing is all zeroes.
    pub fn average(all: &[Stats]) -> Stats {
        if all.is_empty() {
            return Stats::default();
        }

        let count = all.len() as i64;
        let count_f = all.len() as f64;

        Stats {
            at_bats: all.iter().map(|s| s.at_bats).sum::<i64>() / count,
            home_runs: all.iter().map(|s| s.home_runs).sum::<i64>() / count,
            hits: all.iter().map(|s| s.hits).sum::<i64>() / count,
            strikeouts: all.iter().map(|s| s.strikeouts).sum::<i64>() / count,
            batting_average: all.iter().map(|s| s.batting_average).sum::<f64>() / count_f,
            slugging_percentage: all.iter().map(|s| s.slugging_percentage).sum::<f64>() / count_f,
        }
    }
}
