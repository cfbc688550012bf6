/// What a raw query is asking for. Decided once per query, first rule wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryIntent {
    PerGame,
    Comparison,
    General,
}

pub fn classify(query: &str) -> QueryIntent {
    let q = query.trim().to_lowercase();
    if q.contains("compare") || q.contains("vs") || q.contains("versus") {
        return QueryIntent::Comparison;
    }
    if q.starts_with("who") || q.starts_with("which") {
        return QueryIntent::General;
    }
    QueryIntent::PerGame
}
