// Roster loading from CSV listings.
//
// Accepts English headers or the Italian ones used by fantasy listings
// (Nome, Squadra, Rm/Ruolo, FVM). Value cells are read as text and parsed
// leniently; anything that is not a number is treated as absent so the value
// resolver can fall back to the next field. Comma- and semicolon-delimited
// files are both read; the header line decides which.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::lineup::Player;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("validation error: {0}")]
    Validation(String),
}

// ---------------------------------------------------------------------------
// Raw CSV row (private)
// ---------------------------------------------------------------------------

/// One roster row. Every column is optional text; extra columns are ignored.
#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
struct RawRosterRow {
    #[serde(default, alias = "ID", alias = "id", alias = "Cod")]
    Id: Option<String>,
    #[serde(default, alias = "Nome", alias = "name")]
    Name: Option<String>,
    #[serde(default, alias = "Squadra", alias = "team")]
    Team: Option<String>,
    #[serde(default, alias = "Rm", alias = "Ruolo", alias = "role")]
    Role: Option<String>,
    #[serde(default, alias = "FVM", alias = "value")]
    Value: Option<String>,
    #[serde(default, alias = "FVM_Prev", alias = "last_value")]
    LastValue: Option<String>,
    #[serde(default, alias = "FVM_Hist", alias = "historical_value")]
    HistoricalValue: Option<String>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a numeric cell. Accepts a decimal comma ("12,5"). Blank, non-numeric
/// and non-finite cells are `None`.
fn parse_number(cell: Option<&str>) -> Option<f64> {
    let text = cell?.trim();
    if text.is_empty() {
        return None;
    }
    text.replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

fn non_blank(cell: Option<String>) -> Option<String> {
    cell.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Reject rosters in which two rows share an id.
fn check_unique_ids(players: &[Player]) -> Result<(), SourceError> {
    let mut seen = HashSet::new();
    for p in players {
        if !seen.insert(p.id) {
            return Err(SourceError::Validation(format!(
                "duplicate player id {} ('{}')",
                p.id, p.name
            )));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Reader-based loader (private, enables testing without temp files)
// ---------------------------------------------------------------------------

/// Field delimiter for a listing: `;` when the header line has more
/// semicolons than commas, as in spreadsheet exports with decimal commas.
fn sniff_delimiter(text: &str) -> u8 {
    let header = text.lines().next().unwrap_or_default();
    if header.matches(';').count() > header.matches(',').count() {
        b';'
    } else {
        b','
    }
}

fn load_roster_from_reader<R: Read>(mut rdr: R) -> Result<Vec<Player>, csv::Error> {
    let mut text = String::new();
    rdr.read_to_string(&mut text)?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(sniff_delimiter(&text))
        .trim(csv::Trim::Headers)
        .from_reader(text.as_bytes());
    reader.headers()?;

    // (explicit id, player); missing ids are filled in once all rows are read
    let mut rows: Vec<(Option<u32>, Player)> = Vec::new();
    for (row, result) in reader.deserialize::<RawRosterRow>().enumerate() {
        let row_number = row + 1;
        let raw = match result {
            Ok(raw) => raw,
            Err(e) => {
                warn!("skipping malformed roster row {}: {}", row_number, e);
                continue;
            }
        };

        let Some(name) = non_blank(raw.Name) else {
            warn!("skipping roster row {}: no player name", row_number);
            continue;
        };

        let id = match non_blank(raw.Id) {
            Some(text) => match text.parse::<u32>() {
                Ok(id) => Some(id),
                Err(_) => {
                    warn!("player '{}' has non-numeric id '{}', assigning one", name, text);
                    None
                }
            },
            None => None,
        };

        rows.push((
            id,
            Player {
                id: 0,
                name,
                team: non_blank(raw.Team).unwrap_or_default(),
                role_label: non_blank(raw.Role),
                market_value: parse_number(raw.Value.as_deref()),
                last_value: parse_number(raw.LastValue.as_deref()),
                historical_value: parse_number(raw.HistoricalValue.as_deref()),
            },
        ));
    }

    // Generated ids start above the largest explicit one so they never collide.
    let mut next_id = rows.iter().filter_map(|(id, _)| *id).max().unwrap_or(0);
    let players = rows
        .into_iter()
        .map(|(id, mut player)| {
            player.id = id.unwrap_or_else(|| {
                next_id = next_id.saturating_add(1);
                next_id
            });
            player
        })
        .collect();
    Ok(players)
}

// ---------------------------------------------------------------------------
// Public path-based loader
// ---------------------------------------------------------------------------

/// Load a roster from a CSV file.
pub fn load_roster(path: &Path) -> Result<Vec<Player>, SourceError> {
    let file = std::fs::File::open(path).map_err(|e| SourceError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let players = load_roster_from_reader(file).map_err(|e| SourceError::Csv {
        path: path.display().to_string(),
        source: e,
    })?;
    check_unique_ids(&players)?;
    info!("Loaded {} players from {}", players.len(), path.display());
    Ok(players)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
