use crate::domain::model::{RecommendationSet, SynergyEntry};

/// Scores equal to the threshold are dropped.
pub fn exceeds_threshold(synergy: i32, threshold: i32) -> bool {
    synergy > threshold
}

pub fn aggregate<I>(entries: I, threshold: i32) -> RecommendationSet
where
    I: IntoIterator<Item = SynergyEntry>,
{
    let mut set = RecommendationSet::new();
    for entry in entries {
        if exceeds_threshold(entry.synergy, threshold) {
            set.insert(entry.card_name, entry.synergy);
        } else {
            tracing::trace!(
                "dropping {} ({}% <= {}%)",
                entry.card_name,
                entry.synergy,
                threshold
            );
        }
    }
    set
}
