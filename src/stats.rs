use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Raw season totals for one player, as returned by the stats provider.
/// Read-only snapshot; never cached or mutated by the core.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSeasonTotals {
    pub name: String,
    pub games_played: u32,
    pub points: f64,
    pub assists: f64,
    pub offensive_rebounds: f64,
    pub defensive_rebounds: f64,
    pub turnovers: f64,
    pub attempted_field_goals: f64,
    pub attempted_free_throws: f64,
}

/// The eight tracked per-game figures. Full precision; rounding to one
/// decimal happens only at display time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerGameFigures {
    pub ppg: f64,
    pub apg: f64,
    pub rpg: f64,
    pub orpg: f64,
    pub drpg: f64,
    pub tpg: f64,
    pub fga: f64,
    pub fta: f64,
}

/// A zero-game season reports zero-valued averages, never a divide-by-zero.
pub fn derive_per_game(totals: &PlayerSeasonTotals) -> PerGameFigures {
    if totals.games_played == 0 {
        return PerGameFigures {
            ppg: 0.0,
            apg: 0.0,
            rpg: 0.0,
            orpg: 0.0,
            drpg: 0.0,
            tpg: 0.0,
            fga: 0.0,
            fta: 0.0,
        };
    }
    let games = totals.games_played as f64;
    PerGameFigures {
        ppg: totals.points / games,
        apg: totals.assists / games,
        rpg: (totals.offensive_rebounds + totals.defensive_rebounds) / games,
        orpg: totals.offensive_rebounds / games,
        drpg: totals.defensive_rebounds / games,
        tpg: totals.turnovers / games,
        fga: totals.attempted_field_goals / games,
        fta: totals.attempted_free_throws / games,
    }
}

/// Statistic a league-leader query can ask about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKey {
    Points,
    Assists,
    Rebounds,
    TechnicalFouls,
}

impl StatKey {
    pub fn label(self) -> &'static str {
        match self {
            StatKey::Points => "points",
            StatKey::Assists => "assists",
            StatKey::Rebounds => "rebounds",
            StatKey::TechnicalFouls => "technical fouls",
        }
    }

    /// Raw season total for this stat. Rebounds are the offensive+defensive
    /// sum; stats the provider rows do not carry count as zero.
    pub fn raw_total(self, totals: &PlayerSeasonTotals) -> f64 {
        match self {
            StatKey::Points => totals.points,
            StatKey::Assists => totals.assists,
            StatKey::Rebounds => totals.offensive_rebounds + totals.defensive_rebounds,
            StatKey::TechnicalFouls => 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeagueLeader {
    pub totals: PlayerSeasonTotals,
    pub average: f64,
}

/// Highest per-game average for a stat across a season's roster. Players
/// with zero games are excluded, not zero-filled. Ties keep the first player
/// in provider order; the running max starts below any valid average so a
/// 0.0 average still qualifies.
pub fn find_leader(stat: StatKey, season_totals: &[PlayerSeasonTotals]) -> Option<LeagueLeader> {
    let mut leader: Option<&PlayerSeasonTotals> = None;
    let mut leader_avg = -1.0;
    for player in season_totals.iter().filter(|p| p.games_played > 0) {
        let avg = stat.raw_total(player) / player.games_played as f64;
        if avg > leader_avg {
            leader_avg = avg;
            leader = Some(player);
        }
    }
    leader.map(|player| LeagueLeader {
        totals: player.clone(),
        average: leader_avg,
    })
}

/// Strip diacritics and lowercase, so "Luka Doncic" matches a stored
/// "Luka Don\u{10d}i\u{107}".
pub fn normalize_name(raw: &str) -> String {
    raw.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}
