use crate::core::aggregate::aggregate;
use crate::core::resolver::resolve_commander;
use crate::core::writer::render_document;
use crate::domain::model::ResultDocument;
use crate::domain::ports::{
    CardDatabase, ConfigProvider, MissingCommanderPolicy, Pipeline, RecommendationSource, Storage,
};
use crate::utils::error::{RecsError, Result};

pub struct RecommendationPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    cards: Box<dyn CardDatabase>,
    source: Box<dyn RecommendationSource>,
}

impl<S: Storage, C: ConfigProvider> RecommendationPipeline<S, C> {
    pub fn new(
        storage: S,
        config: C,
        cards: Box<dyn CardDatabase>,
        source: Box<dyn RecommendationSource>,
    ) -> Self {
        Self {
            storage,
            config,
            cards,
            source,
        }
    }
}

/// Blank lines are skipped; surrounding whitespace is not part of a name.
pub fn parse_commander_names(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for RecommendationPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<String>> {
        tracing::debug!("Reading commander names from {}", self.config.source_path());
        let bytes = self.storage.read_file(self.config.source_path()).await?;
        let text = String::from_utf8(bytes).map_err(|e| {
            RecsError::parse(format!(
                "{} is not valid UTF-8: {}",
                self.config.source_path(),
                e
            ))
        })?;
        Ok(parse_commander_names(&text))
    }

    async fn transform(&self, names: Vec<String>) -> Result<ResultDocument> {
        let threshold = self.config.synergy_threshold();
        let mut document = ResultDocument::new();

        for name in names {
            let commander = match resolve_commander(self.cards.as_ref(), &name).await {
                Ok(card) => card,
                Err(RecsError::NotFound { name })
                    if self.config.missing_policy() == MissingCommanderPolicy::Skip =>
                {
                    tracing::warn!("Skipping {}: no legendary creature with that name", name);
                    println!("No commander with name {}", name);
                    continue;
                }
                Err(e) => return Err(e),
            };

            println!(
                "Getting recommendations for {} with synergy {}...",
                commander.name, threshold
            );
            let entries = self.source.recommendations(&commander, threshold).await?;
            tracing::debug!("{} raw entries for {}", entries.len(), commander.name);

            let set = aggregate(entries, threshold);
            tracing::info!("{} cards kept for {}", set.len(), commander.name);
            println!("Cards for {} loaded!", commander.name);
            document.insert(commander.name, set);
        }

        Ok(document)
    }

    async fn load(&self, document: &ResultDocument) -> Result<String> {
        let data = render_document(document)?;

        tracing::debug!(
            "Writing {} commander(s) ({} bytes) to {}",
            document.len(),
            data.len(),
            self.config.output_path()
        );
        self.storage
            .write_file(self.config.output_path(), &data)
            .await?;

        Ok(self.config.output_path().to_string())
    }
}
