/// Match input decoding: JSON array or one `team1,team2,result[,winner]` per line.
use anyhow::{Context, Result, anyhow, bail};
use log::warn;
use pointstable_core::{MatchResult, Outcome};
use serde_json::Value;

/// Parse match results, auto-detecting JSON vs line format.
///
/// A JSON document that is not an array (an object, `null`, a number...)
/// has no matches in it and decodes to an empty list.
pub fn parse_matches(content: &str) -> Result<Vec<MatchResult>> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    if trimmed.starts_with('[') || trimmed.starts_with('{') {
        return match serde_json::from_str::<Value>(trimmed) {
            Ok(value) => matches_from_json(value),
            // Team names like "[A] Kings" open with a bracket too
            Err(json_err) => parse_lines(trimmed).map_err(|_| {
                anyhow::Error::new(json_err).context("Input looks like JSON but failed to parse")
            }),
        };
    }

    // Bare JSON scalars are valid documents too, just not match lists
    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        return matches_from_json(value);
    }

    parse_lines(trimmed)
}

fn matches_from_json(value: Value) -> Result<Vec<MatchResult>> {
    let records = match value {
        Value::Array(records) => records,
        other => {
            warn!("Expected a JSON array of matches, got {}; treating as no matches", json_kind(&other));
            return Ok(Vec::new());
        }
    };

    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            serde_json::from_value(record).with_context(|| format!("Invalid match record {}", i + 1))
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Line format. Blank lines and `#` comments are skipped, fields are trimmed.
fn parse_lines(content: &str) -> Result<Vec<MatchResult>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(content.as_bytes());

    let mut matches = Vec::new();
    for record in reader.records() {
        let record = record.context("Failed to read match line")?;
        let line = record.position().map_or(0, |p| p.line());

        if record.len() < 3 || record.len() > 4 {
            bail!(
                "Line {line}: expected team1,team2,result[,winner], got {} fields",
                record.len(),
            );
        }

        let result = parse_outcome(&record[2])
            .ok_or_else(|| anyhow!("Line {line}: unknown result \"{}\" (use win, tie or no_result)", &record[2]))?;
        let winner = record.get(3).filter(|w| !w.is_empty()).map(str::to_string);

        matches.push(MatchResult {
            team1: record[0].to_string(),
            team2: record[1].to_string(),
            result,
            winner,
        });
    }

    Ok(matches)
}

fn parse_outcome(s: &str) -> Option<Outcome> {
    match s {
        "win" => Some(Outcome::Win),
        "tie" => Some(Outcome::Tie),
        "no_result" => Some(Outcome::NoResult),
        _ => None,
    }
}
