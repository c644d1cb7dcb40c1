/// Rejected match input. `index` is the zero-based position in the slice
/// passed to `compute_standings()`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StandingsError {
    #[error("match {index}: team name is empty")]
    EmptyTeam { index: usize },
    #[error("match {index}: {team} cannot play itself")]
    SameTeam { index: usize, team: String },
    #[error("match {index}: result is \"win\" but no winner was given")]
    MissingWinner { index: usize },
    #[error("match {index}: winner {winner} did not play in this match")]
    InvalidWinner { index: usize, winner: String },
    #[error("match {index}: points for {team} no longer fit in a u32")]
    PointsOverflow { index: usize, team: String },
}

impl StandingsError {
    /// Position of the offending match.
    pub fn index(&self) -> usize {
        match self {
            StandingsError::EmptyTeam { index }
            | StandingsError::SameTeam { index, .. }
            | StandingsError::MissingWinner { index }
            | StandingsError::InvalidWinner { index, .. }
            | StandingsError::PointsOverflow { index, .. } => *index,
        }
    }
}
