use nba_stats_chat::extract::{
    DEFAULT_PLAYER, extract_comparison, extract_general, extract_per_game,
};
use nba_stats_chat::intent::{QueryIntent, classify};
use nba_stats_chat::stats::StatKey;

#[test]
fn classifies_comparison_queries() {
    assert_eq!(
        classify("compare LeBron 2022-23 vs Curry 2021-22"),
        QueryIntent::Comparison
    );
    assert_eq!(classify("Jokic versus Embiid"), QueryIntent::Comparison);
}

#[test]
fn classifies_general_queries() {
    assert_eq!(
        classify("Who led the league in scoring in 2023?"),
        QueryIntent::General
    );
    assert_eq!(
        classify("  which player had the most assists"),
        QueryIntent::General
    );
}

#[test]
fn classifies_per_game_queries() {
    assert_eq!(classify("rj barrett 2022-23 stats"), QueryIntent::PerGame);
}

#[test]
fn per_game_short_query_tokenization() {
    let request = extract_per_game("rj barrett 2022-23 stats");
    assert_eq!(request.player_name, "rj barrett");
    assert_eq!(request.season.ending_year, 2023);
    assert_eq!(request.season.display_range, "2022-23");
}

#[test]
fn per_game_possessive_pattern_wins() {
    let request = extract_per_game("what are Kevin Durant's stats for the 2021-22 season?");
    assert_eq!(request.player_name, "Kevin Durant");
    assert_eq!(request.season.ending_year, 2022);
}

#[test]
fn per_game_stats_for_pattern() {
    let request = extract_per_game("stats for Nikola Jokic 2022-23");
    assert_eq!(request.player_name, "Nikola Jokic");
    assert_eq!(request.season.ending_year, 2023);
}

#[test]
fn per_game_filler_tokens_are_skipped() {
    let request = extract_per_game("Jayson Tatum per game stats 2023");
    assert_eq!(request.player_name, "Jayson Tatum");
    assert_eq!(request.season.display_range, "2023");
}

#[test]
fn per_game_defaults_when_nothing_matches() {
    let request = extract_per_game("per game stats 2023");
    assert_eq!(request.player_name, DEFAULT_PLAYER);
    assert_eq!(request.season.ending_year, 2023);
}

#[test]
fn per_game_defaults_season_when_absent() {
    let request = extract_per_game("Jimmy Butler stats");
    assert_eq!(request.player_name, "Jimmy Butler");
    assert_eq!(request.season.ending_year, 2023);
    assert_eq!(request.season.display_range, "2023");
}

#[test]
fn comparison_pattern_extracts_both_players() {
    let request = extract_comparison("compare LeBron 2022-23 vs Curry 2021-22");
    assert_eq!(request.player1, "LeBron");
    assert_eq!(request.season1.ending_year, 2023);
    assert_eq!(request.player2, "Curry");
    assert_eq!(request.season2.ending_year, 2022);
}

#[test]
fn comparison_accepts_and_separator() {
    let request = extract_comparison("compare Luka Doncic 2023 and Trae Young 2023");
    assert_eq!(request.player1, "Luka Doncic");
    assert_eq!(request.player2, "Trae Young");
}

#[test]
fn comparison_falls_back_to_default_pair() {
    let request = extract_comparison("compare them please");
    assert_eq!(request.player1, "LeBron James");
    assert_eq!(request.player2, "Stephen Curry");
    assert_eq!(request.season1.ending_year, 2023);
    assert_eq!(request.season2.display_range, "2023");
}

#[test]
fn general_stat_keywords() {
    assert_eq!(
        extract_general("Who led the league in scoring in 2023?").stat_key,
        StatKey::Points
    );
    assert_eq!(
        extract_general("who had the most assists in 2021-22").stat_key,
        StatKey::Assists
    );
    assert_eq!(
        extract_general("which player grabbed the most rebounds").stat_key,
        StatKey::Rebounds
    );
    assert_eq!(
        extract_general("who picked up the most technical fouls").stat_key,
        StatKey::TechnicalFouls
    );
}

#[test]
fn general_defaults_to_points() {
    let request = extract_general("who was the best last year");
    assert_eq!(request.stat_key, StatKey::Points);
    assert_eq!(request.season.ending_year, 2023);
}

#[test]
fn general_season_extraction_matches_per_game_rules() {
    let request = extract_general("Who led the league in rebounds in 2021-22?");
    assert_eq!(request.season.ending_year, 2022);
    assert_eq!(request.season.display_range, "2021-22");
}
