/// Standings calculator.
///
/// One pass over the matches into a per-team accumulator, then a sort.
/// Pure function: the table lives only for the duration of the call.
use std::collections::HashMap;

use log::{debug, trace};

use crate::error::StandingsError;
use crate::types::{MatchResult, Outcome, PointsRule, TeamRecord};

/// A match after validation, borrowing team names from the input.
enum Verdict<'a> {
    Win { winner: &'a str, loser: &'a str },
    Tie,
    NoResult,
}

/// Compute the points table with the standard 2/1/1 rule.
///
/// Empty input gives an empty table. Rows are sorted by points descending,
/// then by team name ascending.
pub fn compute_standings(matches: &[MatchResult]) -> Result<Vec<TeamRecord>, StandingsError> {
    compute_standings_with(matches, &PointsRule::default())
}

/// Compute the points table with a custom points rule.
///
/// Every match is validated before any counter is touched, so an error
/// never leaves a half-built table behind.
pub fn compute_standings_with(
    matches: &[MatchResult],
    rule: &PointsRule,
) -> Result<Vec<TeamRecord>, StandingsError> {
    if matches.is_empty() {
        return Ok(Vec::new());
    }

    let verdicts = matches
        .iter()
        .enumerate()
        .map(|(index, m)| validate_match(index, m))
        .collect::<Result<Vec<_>, _>>()?;

    let mut table: HashMap<&str, TeamRecord> = HashMap::new();
    for (index, (m, verdict)) in matches.iter().zip(&verdicts).enumerate() {
        record_match(&mut table, index, m, verdict, rule)?;
    }

    let mut standings: Vec<TeamRecord> = table.into_values().collect();
    sort_standings(&mut standings);

    debug!(
        "Computed standings for {} teams from {} matches",
        standings.len(),
        matches.len(),
    );
    Ok(standings)
}

/// Sort rows by points descending, ties broken by team name ascending.
///
/// Names compare byte-wise, so the order does not depend on locale.
pub fn sort_standings(table: &mut [TeamRecord]) {
    table.sort_by(|a, b| b.points.cmp(&a.points).then_with(|| a.team.cmp(&b.team)));
}

fn validate_match(index: usize, m: &MatchResult) -> Result<Verdict<'_>, StandingsError> {
    if m.team1.is_empty() || m.team2.is_empty() {
        return Err(StandingsError::EmptyTeam { index });
    }
    if m.team1 == m.team2 {
        return Err(StandingsError::SameTeam { index, team: m.team1.clone() });
    }

    match m.result {
        Outcome::Win => {
            let winner = m.winner.as_deref().ok_or(StandingsError::MissingWinner { index })?;
            if winner == m.team1 {
                Ok(Verdict::Win { winner: &m.team1, loser: &m.team2 })
            } else if winner == m.team2 {
                Ok(Verdict::Win { winner: &m.team2, loser: &m.team1 })
            } else {
                Err(StandingsError::InvalidWinner { index, winner: winner.to_string() })
            }
        }
        Outcome::Tie => Ok(Verdict::Tie),
        Outcome::NoResult => Ok(Verdict::NoResult),
    }
}

/// Get a team's row, creating a zeroed one on first sight.
fn team_entry<'t, 'n>(table: &'t mut HashMap<&'n str, TeamRecord>, team: &'n str) -> &'t mut TeamRecord {
    table.entry(team).or_insert_with(|| TeamRecord::new(team))
}

/// Add points to a team's row, refusing to wrap around.
fn award(record: &mut TeamRecord, points: u32, index: usize) -> Result<(), StandingsError> {
    record.points = record.points.checked_add(points).ok_or_else(|| StandingsError::PointsOverflow {
        index,
        team: record.team.clone(),
    })?;
    Ok(())
}

fn record_match<'n>(
    table: &mut HashMap<&'n str, TeamRecord>,
    index: usize,
    m: &'n MatchResult,
    verdict: &Verdict<'n>,
    rule: &PointsRule,
) -> Result<(), StandingsError> {
    team_entry(table, &m.team1).played += 1;
    team_entry(table, &m.team2).played += 1;

    match *verdict {
        Verdict::Win { winner, loser } => {
            trace!("{} beat {}", winner, loser);
            let w = team_entry(table, winner);
            w.won += 1;
            award(w, rule.win, index)?;
            team_entry(table, loser).lost += 1;
        }
        Verdict::Tie => {
            trace!("{} tied with {}", m.team1, m.team2);
            for team in [m.team1.as_str(), m.team2.as_str()] {
                let r = team_entry(table, team);
                r.tied += 1;
                award(r, rule.tie, index)?;
            }
        }
        Verdict::NoResult => {
            trace!("{} vs {}: no result", m.team1, m.team2);
            for team in [m.team1.as_str(), m.team2.as_str()] {
                let r = team_entry(table, team);
                r.no_result += 1;
                award(r, rule.no_result, index)?;
            }
        }
    }
    Ok(())
}
