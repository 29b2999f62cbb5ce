use crate::domain::model::Card;
use crate::domain::ports::CardDatabase;
use crate::utils::error::{RecsError, Result};

/// First candidate named exactly `name` (ignoring case) that can lead a
/// deck, in source order.
pub fn select_commander(name: &str, candidates: Vec<Card>) -> Option<Card> {
    candidates
        .into_iter()
        .filter(|card| card.name.eq_ignore_ascii_case(name))
        .find(Card::is_commander)
}

pub async fn resolve_commander(db: &dyn CardDatabase, name: &str) -> Result<Card> {
    let candidates = db.lookup_by_name(name).await?;
    tracing::debug!("{} candidate(s) for {}", candidates.len(), name);

    select_commander(name, candidates).ok_or_else(|| RecsError::NotFound {
        name: name.to_string(),
    })
}
