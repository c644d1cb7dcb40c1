/// pointstable-core: Pure-computation points table.
///
/// Match results → per-team counters → table sorted by points, then name.
/// No IO, no global state. Bring your own match feed.
///
/// Teams are identified by caller-provided names. A team appears in the
/// table as soon as it appears in any match.
///
/// # Quick start
///
/// ```rust
/// use pointstable_core::{MatchResult, compute_standings};
///
/// let matches = vec![
///     MatchResult::win("CSK", "MI", "CSK"),
///     MatchResult::tie("RCB", "CSK"),
/// ];
///
/// let table = compute_standings(&matches).unwrap();
///
/// for (rank, r) in table.iter().enumerate() {
///     println!("{}. {} P{} W{} L{} T{} NR{} = {}", rank + 1, r.team, r.played, r.won, r.lost, r.tied, r.no_result, r.points);
/// }
/// assert_eq!(table[0].team, "CSK");
/// assert_eq!(table[0].points, 3);
/// ```

pub mod constants;
pub mod error;
pub mod standings;
pub mod types;

// Re-export primary public API at crate root.
pub use error::StandingsError;
pub use standings::{compute_standings, compute_standings_with, sort_standings};
pub use types::{MatchResult, Outcome, PointsRule, TeamRecord};
