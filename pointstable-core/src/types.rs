use crate::constants::{DEFAULT_NO_RESULT_POINTS, DEFAULT_TIE_POINTS, DEFAULT_WIN_POINTS};

/// How a match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Outcome {
    /// One side won. `MatchResult::winner` names which.
    Win,
    Tie,
    /// Abandoned (rain, bad light). Scored like a tie but counted separately.
    NoResult,
}

/// Input format for a single match.
///
/// Teams are identified by caller-provided names.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchResult {
    pub team1: String,
    pub team2: String,
    pub result: Outcome,
    /// Required for `Outcome::Win` and must equal `team1` or `team2`.
    /// Ignored for every other outcome.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub winner: Option<String>,
}

impl MatchResult {
    /// A decided match.
    pub fn win(team1: impl Into<String>, team2: impl Into<String>, winner: impl Into<String>) -> Self {
        MatchResult {
            team1: team1.into(),
            team2: team2.into(),
            result: Outcome::Win,
            winner: Some(winner.into()),
        }
    }

    pub fn tie(team1: impl Into<String>, team2: impl Into<String>) -> Self {
        MatchResult {
            team1: team1.into(),
            team2: team2.into(),
            result: Outcome::Tie,
            winner: None,
        }
    }

    pub fn no_result(team1: impl Into<String>, team2: impl Into<String>) -> Self {
        MatchResult {
            team1: team1.into(),
            team2: team2.into(),
            result: Outcome::NoResult,
            winner: None,
        }
    }
}

/// One row of the points table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamRecord {
    pub team: String,
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    pub tied: u32,
    #[cfg_attr(feature = "serde", serde(rename = "noResult"))]
    pub no_result: u32,
    pub points: u32,
}

impl TeamRecord {
    /// Fresh record with every counter at zero.
    pub fn new(team: impl Into<String>) -> Self {
        TeamRecord {
            team: team.into(),
            played: 0,
            won: 0,
            lost: 0,
            tied: 0,
            no_result: 0,
            points: 0,
        }
    }
}

/// Points awarded per outcome. A loss is always worth nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointsRule {
    pub win: u32,
    pub tie: u32,
    pub no_result: u32,
}

impl Default for PointsRule {
    fn default() -> Self {
        PointsRule {
            win: DEFAULT_WIN_POINTS,
            tie: DEFAULT_TIE_POINTS,
            no_result: DEFAULT_NO_RESULT_POINTS,
        }
    }
}
