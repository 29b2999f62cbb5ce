//! HTTP collaborators: the card-data API used for commander resolution and
//! the commander-page JSON used by the API recommendation strategy.

use crate::core::aggregate::exceeds_threshold;
use crate::core::slug::commander_slug;
use crate::domain::model::{Card, SynergyEntry};
use crate::domain::ports::{CardDatabase, RecommendationSource};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_CARDS_ENDPOINT: &str = "https://api.magicthegathering.io/v1";
pub const DEFAULT_RECOMMENDATIONS_ENDPOINT: &str = "https://json.edhrec.com/pages/commanders";

/// Shared client; `timeout` bounds every request made through it.
pub fn build_client(timeout: Duration) -> Result<Client> {
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(concat!("commander-recs/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

#[derive(Debug, Deserialize)]
struct CardsResponse {
    #[serde(default)]
    cards: Vec<ApiCard>,
}

#[derive(Debug, Deserialize)]
struct ApiCard {
    name: String,
    #[serde(default)]
    types: Vec<String>,
    #[serde(default)]
    supertypes: Vec<String>,
}

impl From<ApiCard> for Card {
    fn from(card: ApiCard) -> Self {
        let is_creature = card.types.iter().any(|t| t == "Creature");
        let is_legendary = card.supertypes.iter().any(|t| t == "Legendary");
        Card::new(card.name, is_creature, is_legendary)
    }
}

pub struct MtgApiClient {
    client: Client,
    endpoint: String,
}

impl MtgApiClient {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl CardDatabase for MtgApiClient {
    async fn lookup_by_name(&self, name: &str) -> Result<Vec<Card>> {
        let url = format!("{}/cards", self.endpoint.trim_end_matches('/'));
        tracing::debug!("Looking up {} at {}", name, url);

        // A quoted name asks the API for an exact match instead of a substring one.
        let exact = format!("\"{}\"", name);
        let response = self
            .client
            .get(&url)
            .query(&[("name", exact.as_str())])
            .send()
            .await?
            .error_for_status()?;
        tracing::debug!("Card API response status: {}", response.status());

        let body: CardsResponse = response.json().await?;
        Ok(body.cards.into_iter().map(Card::from).collect())
    }
}

#[derive(Debug, Deserialize)]
struct CommanderPage {
    container: Container,
}

#[derive(Debug, Deserialize)]
struct Container {
    json_dict: JsonDict,
}

#[derive(Debug, Deserialize)]
struct JsonDict {
    #[serde(default)]
    cardlists: Vec<CardList>,
}

#[derive(Debug, Deserialize)]
struct CardList {
    #[serde(default)]
    cardviews: Vec<CardView>,
}

#[derive(Debug, Deserialize)]
struct CardView {
    name: String,
    /// Fraction, e.g. 0.37 for 37%.
    synergy: Option<f64>,
}

/// Fetches the commander's recommendation page as JSON and applies the
/// threshold itself.
pub struct EdhrecJsonSource {
    client: Client,
    endpoint: String,
    strip_chars: String,
}

impl EdhrecJsonSource {
    pub fn new(client: Client, endpoint: impl Into<String>, strip_chars: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            strip_chars: strip_chars.into(),
        }
    }

    pub fn page_url(&self, commander: &str) -> String {
        format!(
            "{}/{}.json",
            self.endpoint.trim_end_matches('/'),
            commander_slug(commander, &self.strip_chars)
        )
    }
}

#[async_trait]
impl RecommendationSource for EdhrecJsonSource {
    async fn recommendations(&self, commander: &Card, threshold: i32) -> Result<Vec<SynergyEntry>> {
        let url = self.page_url(&commander.name);
        tracing::debug!("Fetching recommendations from {}", url);

        let page: CommanderPage = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let entries = page
            .container
            .json_dict
            .cardlists
            .into_iter()
            .flat_map(|list| list.cardviews)
            .filter_map(|view| {
                let synergy = (view.synergy? * 100.0).round() as i32;
                exceeds_threshold(synergy, threshold).then(|| SynergyEntry::new(view.name, synergy))
            })
            .collect();

        Ok(entries)
    }
}
