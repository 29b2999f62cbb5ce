use serde::Serialize;
use std::collections::BTreeMap;

/// A card record as far as commander resolution cares about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub name: String,
    pub is_creature: bool,
    pub is_legendary: bool,
}

impl Card {
    pub fn new(name: impl Into<String>, is_creature: bool, is_legendary: bool) -> Self {
        Self {
            name: name.into(),
            is_creature,
            is_legendary,
        }
    }

    pub fn is_commander(&self) -> bool {
        self.is_creature && self.is_legendary
    }
}

/// One recommended card and its synergy percentage. Negative scores mean the
/// card is played less often with the commander than elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynergyEntry {
    pub card_name: String,
    pub synergy: i32,
}

impl SynergyEntry {
    pub fn new(card_name: impl Into<String>, synergy: i32) -> Self {
        Self {
            card_name: card_name.into(),
            synergy,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RecommendationSet {
    cards: BTreeMap<String, i32>,
}

impl RecommendationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last write wins on repeated card names.
    pub fn insert(&mut self, card_name: impl Into<String>, synergy: i32) {
        self.cards.insert(card_name.into(), synergy);
    }

    pub fn get(&self, card_name: &str) -> Option<i32> {
        self.cards.get(card_name).copied()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.cards.iter().map(|(name, score)| (name.as_str(), *score))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultDocument {
    commanders: BTreeMap<String, RecommendationSet>,
}

impl ResultDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, commander: impl Into<String>, set: RecommendationSet) {
        self.commanders.insert(commander.into(), set);
    }

    pub fn get(&self, commander: &str) -> Option<&RecommendationSet> {
        self.commanders.get(commander)
    }

    pub fn len(&self) -> usize {
        self.commanders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commanders.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RecommendationSet)> {
        self.commanders.iter().map(|(name, set)| (name.as_str(), set))
    }
}
