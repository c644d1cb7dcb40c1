use pointstable_core::{MatchResult, compute_standings, sort_standings};
use proptest::prelude::*;

const TEAMS: [&str; 6] = ["CSK", "DC", "KKR", "MI", "RCB", "RR"];

/// Any well-formed match between two distinct teams from a small pool.
fn valid_match() -> impl Strategy<Value = MatchResult> {
    (0..TEAMS.len(), 1..TEAMS.len(), 0..4u8).prop_map(|(a, offset, kind)| {
        let team1 = TEAMS[a];
        let team2 = TEAMS[(a + offset) % TEAMS.len()];
        match kind {
            0 => MatchResult::win(team1, team2, team1),
            1 => MatchResult::win(team1, team2, team2),
            2 => MatchResult::tie(team1, team2),
            _ => MatchResult::no_result(team1, team2),
        }
    })
}

proptest! {
    #[test]
    fn played_equals_sum_of_outcomes(matches in prop::collection::vec(valid_match(), 0..60)) {
        let table = compute_standings(&matches).unwrap();
        for r in &table {
            prop_assert_eq!(r.played, r.won + r.lost + r.tied + r.no_result);
        }
    }

    #[test]
    fn every_match_counts_twice(matches in prop::collection::vec(valid_match(), 0..60)) {
        let table = compute_standings(&matches).unwrap();
        let total_played: u32 = table.iter().map(|r| r.played).sum();
        prop_assert_eq!(total_played as usize, 2 * matches.len());
    }

    #[test]
    fn points_follow_outcomes(matches in prop::collection::vec(valid_match(), 0..60)) {
        let table = compute_standings(&matches).unwrap();
        for r in &table {
            prop_assert_eq!(r.points, 2 * r.won + r.tied + r.no_result);
        }

        // 2 + 0 for a win, 1 + 1 otherwise.
        let total: u32 = table.iter().map(|r| r.points).sum();
        prop_assert_eq!(total as usize, 2 * matches.len());
    }

    #[test]
    fn output_is_sorted(matches in prop::collection::vec(valid_match(), 0..60)) {
        let table = compute_standings(&matches).unwrap();
        for pair in table.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.points > b.points || (a.points == b.points && a.team <= b.team));
        }

        let mut resorted = table.clone();
        sort_standings(&mut resorted);
        prop_assert_eq!(resorted, table);
    }

    #[test]
    fn input_order_does_not_change_table(matches in prop::collection::vec(valid_match(), 0..60)) {
        let forward = compute_standings(&matches).unwrap();
        let reversed: Vec<MatchResult> = matches.iter().rev().cloned().collect();
        prop_assert_eq!(compute_standings(&reversed).unwrap(), forward);
    }
}
