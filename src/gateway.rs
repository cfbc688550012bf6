use std::env;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::http_client::http_client;
use crate::stats::{PlayerSeasonTotals, normalize_name};

/// Source of raw season totals. One call per player lookup, one bulk call
/// for league-leader queries; transport failures propagate uncaught.
pub trait StatsGateway {
    /// First player in provider order whose name contains the fragment
    /// (diacritic- and case-insensitive), or None.
    fn season_totals(
        &self,
        name_fragment: &str,
        ending_year: i32,
    ) -> Result<Option<PlayerSeasonTotals>>;

    /// Full roster of season totals for one season.
    fn all_season_totals(&self, ending_year: i32) -> Result<Vec<PlayerSeasonTotals>>;
}

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub base_url: String,
    pub api_key: Option<String>,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("STATS_API_BASE")
            .context("STATS_API_BASE is not set")?
            .trim()
            .trim_end_matches('/')
            .to_string();
        let api_key = env::var("STATS_API_KEY")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        Ok(Self { base_url, api_key })
    }
}

/// Blocking JSON gateway: GET {base}/seasons/{year}/totals returns an array
/// of per-player total rows. Name filtering happens client-side so the
/// provider's row order decides first-match and tie-break semantics.
pub struct HttpStatsGateway {
    cfg: GatewayConfig,
}

impl HttpStatsGateway {
    pub fn new(cfg: GatewayConfig) -> Self {
        Self { cfg }
    }

    fn fetch_rows(&self, ending_year: i32) -> Result<Vec<PlayerSeasonTotals>> {
        let client = http_client()?;
        let url = format!("{}/seasons/{ending_year}/totals", self.cfg.base_url);
        tracing::debug!(%url, "fetching season totals");

        let mut request = client.get(&url);
        if let Some(key) = &self.cfg.api_key {
            request = request.bearer_auth(key);
        }
        let body = request
            .send()
            .context("season totals request failed")?
            .error_for_status()
            .context("season totals request rejected")?
            .text()
            .context("season totals response could not be read")?;
        parse_totals_json(&body)
    }
}

/// Parse a provider response body: a JSON array of per-player total rows.
/// A literal `null` body is an empty roster, not an error.
pub fn parse_totals_json(raw: &str) -> Result<Vec<PlayerSeasonTotals>> {
    if raw.trim() == "null" {
        return Ok(vec![]);
    }
    let rows: Vec<TotalsRow> =
        serde_json::from_str(raw).context("season totals response was not valid json")?;
    Ok(rows.into_iter().map(Into::into).collect())
}

impl StatsGateway for HttpStatsGateway {
    fn season_totals(
        &self,
        name_fragment: &str,
        ending_year: i32,
    ) -> Result<Option<PlayerSeasonTotals>> {
        let needle = normalize_name(name_fragment);
        let found = self
            .fetch_rows(ending_year)?
            .into_iter()
            .find(|p| normalize_name(&p.name).contains(&needle));
        if found.is_none() {
            tracing::debug!(player = name_fragment, ending_year, "no season totals match");
        }
        Ok(found)
    }

    fn all_season_totals(&self, ending_year: i32) -> Result<Vec<PlayerSeasonTotals>> {
        self.fetch_rows(ending_year)
    }
}

#[derive(Debug, Deserialize)]
struct TotalsRow {
    name: String,
    #[serde(default)]
    games_played: u32,
    #[serde(default)]
    points: f64,
    #[serde(default)]
    assists: f64,
    #[serde(default)]
    offensive_rebounds: f64,
    #[serde(default)]
    defensive_rebounds: f64,
    #[serde(default)]
    turnovers: f64,
    #[serde(default)]
    attempted_field_goals: f64,
    #[serde(default)]
    attempted_free_throws: f64,
}

impl From<TotalsRow> for PlayerSeasonTotals {
    fn from(row: TotalsRow) -> Self {
        PlayerSeasonTotals {
            name: row.name,
            games_played: row.games_played,
            points: row.points,
            assists: row.assists,
            offensive_rebounds: row.offensive_rebounds,
            defensive_rebounds: row.defensive_rebounds,
            turnovers: row.turnovers,
            attempted_field_goals: row.attempted_field_goals,
            attempted_free_throws: row.attempted_free_throws,
        }
    }
}
