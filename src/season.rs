use anyhow::{Context, Result, bail};
use once_cell::sync::Lazy;
use regex::Regex;

pub const DEFAULT_ENDING_YEAR: i32 = 2023;

static RANGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{4})\s*[-\u{2013}]\s*(\d{2,4})").expect("season range pattern"));
static BARE_YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{4})\b").expect("bare year pattern"));
static SEASON_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}[-\u{2013}]\d{2,4}").expect("season token pattern"));

/// A season resolved to the calendar year it concludes in, plus the label
/// the user wrote it as ("2023" or "2022-23").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonSpec {
    pub ending_year: i32,
    pub display_range: String,
}

impl SeasonSpec {
    pub fn default_season() -> Self {
        Self {
            ending_year: DEFAULT_ENDING_YEAR,
            display_range: DEFAULT_ENDING_YEAR.to_string(),
        }
    }
}

/// Parse a season token: a bare year ("2023") or a range ("2022-23",
/// "2022\u{2013}2023"). A 2-digit end part inherits the start year's century, so
/// "1999-00" resolves to 1900; no rollover correction is applied.
pub fn parse_season(token: &str) -> Result<SeasonSpec> {
    if let Some(caps) = RANGE_RE.captures(token) {
        let start = &caps[1];
        let end_part = &caps[2];
        let ending_year: i32 = if end_part.len() == 2 {
            format!("{}{end_part}", &start[..2])
                .parse()
                .context("season ending year out of range")?
        } else {
            end_part.parse().context("season ending year out of range")?
        };
        return Ok(SeasonSpec {
            ending_year,
            display_range: format!("{start}-{end_part}"),
        });
    }

    let trimmed = token.trim();
    match trimmed.parse::<i32>() {
        Ok(year) => Ok(SeasonSpec {
            ending_year: year,
            display_range: trimmed.to_string(),
        }),
        Err(_) => bail!("invalid season token: {trimmed:?}"),
    }
}

/// Find a season anywhere in a free-text query: a range first, then a bare
/// 4-digit year. Returns None when the query carries no season at all.
pub fn find_season(query: &str) -> Option<SeasonSpec> {
    if let Some(m) = RANGE_RE.find(query) {
        return parse_season(m.as_str()).ok();
    }
    let m = BARE_YEAR_RE.find(query)?;
    parse_season(m.as_str()).ok()
}

/// Whether a whitespace token looks like a season ("2022-23" or "2023").
pub fn is_season_token(token: &str) -> bool {
    if SEASON_TOKEN_RE.is_match(token) {
        return true;
    }
    token.len() == 4 && token.chars().all(|c| c.is_ascii_digit())
}
