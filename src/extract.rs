use once_cell::sync::Lazy;
use regex::Regex;

use crate::season::{SeasonSpec, find_season, is_season_token, parse_season};
use crate::stats::StatKey;

pub const DEFAULT_PLAYER: &str = "LeBron James";
const DEFAULT_COMPARISON_PLAYER_2: &str = "Stephen Curry";

static POSSESSIVE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)what are\s+(.+?)'s").expect("possessive name pattern"));
static STATS_FOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)stats for\s+([A-Za-z\s\.\-']+)").expect("stats-for name pattern"));
static COMPARE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)compare\s+(.+?)\s+(\d{4}(?:\s*[-\u{2013}]\s*\d{2,4})?)\s+(?:versus|vs\.?|and)\s+(.+?)\s+(\d{4}(?:\s*[-\u{2013}]\s*\d{2,4})?)",
    )
    .expect("comparison pattern")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerGameRequest {
    pub player_name: String,
    pub season: SeasonSpec,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRequest {
    pub player1: String,
    pub season1: SeasonSpec,
    pub player2: String,
    pub season2: SeasonSpec,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneralRequest {
    pub stat_key: StatKey,
    pub season: SeasonSpec,
}

/// Single-player per-game lookup. Season: range anywhere, else bare 4-digit
/// year anywhere, else the default season. Name: ordered strategy list, first
/// hit wins, defaulting to LeBron James when every strategy misses.
pub fn extract_per_game(query: &str) -> PerGameRequest {
    let season = find_season(query).unwrap_or_else(SeasonSpec::default_season);
    let player_name = extract_player_name(query, &[]);
    PerGameRequest {
        player_name,
        season,
    }
}

/// Two-player comparison, driven by a single pattern anchored on "compare".
/// A query that does not fit the pattern falls back to a fixed default pair
/// rather than failing, so the pipeline always has something to answer with.
pub fn extract_comparison(query: &str) -> ComparisonRequest {
    if let Some(caps) = COMPARE_RE.captures(query) {
        let season1 = parse_season(&caps[2]);
        let season2 = parse_season(&caps[4]);
        if let (Ok(season1), Ok(season2)) = (season1, season2) {
            return ComparisonRequest {
                player1: caps[1].trim().to_string(),
                season1,
                player2: caps[3].trim().to_string(),
                season2,
            };
        }
    }
    tracing::warn!("comparison query did not match the compare pattern, using default pair");
    ComparisonRequest {
        player1: DEFAULT_PLAYER.to_string(),
        season1: SeasonSpec::default_season(),
        player2: DEFAULT_COMPARISON_PLAYER_2.to_string(),
        season2: SeasonSpec::default_season(),
    }
}

/// League-leader lookup: a stat keyword plus the same season logic as
/// per-game queries.
pub fn extract_general(query: &str) -> GeneralRequest {
    let season = find_season(query).unwrap_or_else(SeasonSpec::default_season);
    GeneralRequest {
        stat_key: stat_key_from_query(query),
        season,
    }
}

/// First matching keyword wins; unrecognized queries ask about points.
fn stat_key_from_query(query: &str) -> StatKey {
    let q = query.to_lowercase();
    if q.contains("scor") || q.contains("ppg") || q.contains("points") {
        StatKey::Points
    } else if q.contains("assist") {
        StatKey::Assists
    } else if q.contains("rebound") {
        StatKey::Rebounds
    } else if q.contains("technical") {
        StatKey::TechnicalFouls
    } else {
        StatKey::Points
    }
}

fn extract_player_name(query: &str, extra_stop_words: &[&str]) -> String {
    possessive_name(query)
        .or_else(|| stats_for_name(query))
        .or_else(|| leading_tokens_name(query, extra_stop_words))
        .unwrap_or_else(|| DEFAULT_PLAYER.to_string())
}

/// Strategy 1: "what are {player}'s".
fn possessive_name(query: &str) -> Option<String> {
    let caps = POSSESSIVE_RE.captures(query)?;
    Some(caps[1].trim().to_string())
}

/// Strategy 2: "stats for {player}", capturing a run of letters, spaces,
/// periods, hyphens, and apostrophes.
fn stats_for_name(query: &str) -> Option<String> {
    let caps = STATS_FOR_RE.captures(query)?;
    let name = caps[1].trim().to_string();
    if name.is_empty() { None } else { Some(name) }
}

/// Strategy 3: collect whitespace tokens up to the first season-shaped one,
/// skipping filler words. Stop-word checks are case-insensitive, but the
/// surviving tokens keep their original casing.
fn leading_tokens_name(query: &str, extra_stop_words: &[&str]) -> Option<String> {
    let mut name_tokens: Vec<&str> = Vec::new();
    for token in query.split_whitespace() {
        if is_season_token(token) {
            break;
        }
        let lower = token.to_lowercase();
        if matches!(lower.as_str(), "per" | "game" | "stats")
            || extra_stop_words.contains(&lower.as_str())
        {
            continue;
        }
        name_tokens.push(token);
    }
    if name_tokens.is_empty() {
        None
    } else {
        Some(name_tokens.join(" "))
    }
}
