use anyhow::Result;

use crate::chat::ChatCompleter;
use crate::extract::{extract_comparison, extract_general, extract_per_game};
use crate::gateway::StatsGateway;
use crate::intent::{QueryIntent, classify};
use crate::season::SeasonSpec;
use crate::stats::{LeagueLeader, PlayerSeasonTotals, StatKey, derive_per_game, find_leader};

pub const COMPARISON_MISSING_SNIPPET: &str = "Stats not found for one or both players.";

/// Single entry point: classify, extract, fetch, derive, compose, phrase.
/// A player or leader that cannot be resolved still produces a worded
/// "not found" snippet for the model; only transport failures propagate.
pub fn answer_query(
    query: &str,
    gateway: &impl StatsGateway,
    chat: &impl ChatCompleter,
) -> Result<String> {
    let snippet = match classify(query) {
        QueryIntent::PerGame => per_game_data(query, gateway)?,
        QueryIntent::Comparison => comparison_data(query, gateway)?,
        QueryIntent::General => general_data(query, gateway)?,
    };
    chat.complete(&system_prompt(&snippet), query)
}

fn per_game_data(query: &str, gateway: &impl StatsGateway) -> Result<String> {
    let request = extract_per_game(query);
    let snippet = match gateway.season_totals(&request.player_name, request.season.ending_year)? {
        Some(totals) => per_game_snippet(&request.season, &totals),
        None => missing_player_snippet(&request.player_name, &request.season),
    };
    Ok(snippet)
}

fn comparison_data(query: &str, gateway: &impl StatsGateway) -> Result<String> {
    let request = extract_comparison(query);
    let first = gateway.season_totals(&request.player1, request.season1.ending_year)?;
    let second = gateway.season_totals(&request.player2, request.season2.ending_year)?;
    let snippet = match (first, second) {
        (Some(first), Some(second)) => format!(
            "{}\n{}",
            per_game_snippet(&request.season1, &first),
            per_game_snippet(&request.season2, &second)
        ),
        _ => COMPARISON_MISSING_SNIPPET.to_string(),
    };
    Ok(snippet)
}

fn general_data(query: &str, gateway: &impl StatsGateway) -> Result<String> {
    let request = extract_general(query);
    let roster = gateway.all_season_totals(request.season.ending_year)?;
    let snippet = match find_leader(request.stat_key, &roster) {
        Some(leader) => leader_snippet(request.stat_key, &request.season, &leader),
        None => leader_missing_snippet(request.stat_key, &request.season),
    };
    Ok(snippet)
}

/// Deterministic per-game snippet; the fixed acronym order is part of the
/// contract with the phrasing model.
pub fn per_game_snippet(season: &SeasonSpec, totals: &PlayerSeasonTotals) -> String {
    let per_game = derive_per_game(totals);
    format!(
        "In the {} NBA season, {} played in {} games. Here are his per game stats: \
         PPG: {:.1}, APG: {:.1}, RPG: {:.1}, OREB: {:.1}, DREB: {:.1}, TO: {:.1}, \
         FGA: {:.1}, FTA: {:.1}.",
        season.display_range,
        totals.name,
        totals.games_played,
        per_game.ppg,
        per_game.apg,
        per_game.rpg,
        per_game.orpg,
        per_game.drpg,
        per_game.tpg,
        per_game.fga,
        per_game.fta,
    )
}

pub fn missing_player_snippet(player_name: &str, season: &SeasonSpec) -> String {
    format!(
        "No stats found for {player_name} for the {} season.",
        season.display_range
    )
}

pub fn leader_snippet(stat: StatKey, season: &SeasonSpec, leader: &LeagueLeader) -> String {
    format!(
        "In the {} NBA season, the league leader in {} was {}, averaging {:.1} {} per game.",
        season.display_range,
        stat.label(),
        leader.totals.name,
        leader.average,
        stat.label(),
    )
}

pub fn leader_missing_snippet(stat: StatKey, season: &SeasonSpec) -> String {
    format!(
        "Could not determine a league leader for {} in the {} season.",
        stat.label(),
        season.display_range
    )
}

/// Fixed system instruction wrapping the data snippet. All numbers in the
/// final answer must trace back to this snippet.
pub fn system_prompt(data_snippet: &str) -> String {
    format!(
        "You are an NBA stats assistant. You have the following stats (all in per game format) \
         from a reliable source. Please only use these acronyms in your answer without \
         clarification:\nPlayer stats:\n{data_snippet}\n\nUser query:"
    )
}
