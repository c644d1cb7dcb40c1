/// Output formatting: terminal table and JSON.
use pointstable_core::TeamRecord;
use serde::Serialize;
use std::fmt::Write;

#[derive(Serialize)]
struct JsonTeamRow<'a> {
    rank: usize,
    #[serde(flatten)]
    record: &'a TeamRecord,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    teams: Vec<JsonTeamRow<'a>>,
    matches: usize,
}

/// Render standings as a formatted terminal table.
pub fn render_table(table: &[TeamRecord], total_matches: usize) -> String {
    // Find the widest team name for padding
    let name_width = table.iter()
        .map(|r| r.team.chars().count())
        .max()
        .unwrap_or(4)
        .max(4); // at least "Team"

    let mut out = String::new();

    // Header
    let _ = writeln!(out, " # | {:<name_width$} |  P |  W |  L |  T | NR | Pts", "Team");
    let _ = writeln!(out, "---|-{}-|----|----|----|----|----|----", "-".repeat(name_width));

    // Rows
    for (i, r) in table.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>2} | {:<name_width$} | {:>2} | {:>2} | {:>2} | {:>2} | {:>2} | {:>3}",
            i + 1, r.team, r.played, r.won, r.lost, r.tied, r.no_result, r.points,
        );
    }

    let _ = write!(out, "\n{} teams, {} matches", table.len(), total_matches);
    out
}

/// Render standings as pretty-printed JSON.
pub fn render_json(table: &[TeamRecord], total_matches: usize) -> serde_json::Result<String> {
    let teams = table
        .iter()
        .enumerate()
        .map(|(i, record)| JsonTeamRow { rank: i + 1, record })
        .collect();

    serde_json::to_string_pretty(&JsonOutput { teams, matches: total_matches })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pointstable_core::{MatchResult, compute_standings};

    fn sample() -> Vec<TeamRecord> {
        compute_standings(&[
            MatchResult::win("CSK", "MI", "CSK"),
            MatchResult::tie("RCB", "CSK"),
        ])
        .unwrap()
    }

    #[test]
    fn test_render_table_rows_in_rank_order() {
        let text = render_table(&sample(), 2);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], " # | Team |  P |  W |  L |  T | NR | Pts");
        assert_eq!(lines[2], " 1 | CSK  |  2 |  1 |  0 |  1 |  0 |   3");
        assert_eq!(lines[3], " 2 | RCB  |  1 |  0 |  0 |  1 |  0 |   1");
        assert_eq!(lines[4], " 3 | MI   |  1 |  0 |  1 |  0 |  0 |   0");
        assert_eq!(lines.last(), Some(&"3 teams, 2 matches"));
    }

    #[test]
    fn test_render_table_pads_to_longest_name() {
        let table = compute_standings(&[MatchResult::no_result("Sunrisers", "RR")]).unwrap();
        let text = render_table(&table, 1);
        assert!(text.lines().next().unwrap().starts_with(" # | Team      |"));
        assert!(text.contains(" 2 | Sunrisers |"));
    }

    #[test]
    fn test_render_json_shape() {
        let json = render_json(&sample(), 2).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["matches"], 2);
        let first = &value["teams"][0];
        assert_eq!(first["rank"], 1);
        assert_eq!(first["team"], "CSK");
        assert_eq!(first["played"], 2);
        assert_eq!(first["tied"], 1);
        assert_eq!(first["noResult"], 0);
        assert_eq!(first["points"], 3);
        assert_eq!(value["teams"][2]["team"], "MI");
    }

    #[test]
    fn test_render_empty() {
        assert!(render_table(&[], 0).ends_with("0 teams, 0 matches"));
        let value: serde_json::Value = serde_json::from_str(&render_json(&[], 0).unwrap()).unwrap();
        assert_eq!(value["teams"], serde_json::json!([]));
    }
}
