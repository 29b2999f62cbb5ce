//! Wires a validated run configuration to concrete collaborators and runs
//! the pipeline once.

use crate::adapters::browser::{BrowserSource, ScrapeSettings};
use crate::adapters::chromium::ChromiumSession;
use crate::adapters::http::{build_client, EdhrecJsonSource, MtgApiClient};
use crate::adapters::storage::LocalStorage;
use crate::config::{RunConfig, SourceKind};
use crate::core::etl::{EtlEngine, RunSummary};
use crate::core::extractor::FixedOffsetLayout;
use crate::core::pipeline::RecommendationPipeline;
use crate::core::{CardDatabase, RecommendationSource};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::sync::Arc;

pub async fn run(config: RunConfig) -> Result<RunSummary> {
    config.validate()?;

    let client = build_client(config.timeout())?;
    let cards: Box<dyn CardDatabase> = Box::new(MtgApiClient::new(
        client.clone(),
        config.settings.api.cards_endpoint.clone(),
    ));

    match config.strategy {
        SourceKind::Api => {
            let source = Box::new(EdhrecJsonSource::new(
                client,
                config.settings.api.recommendations_endpoint.clone(),
                config.settings.browser.slug_strip_chars.clone(),
            ));
            run_with(config, cards, source).await
        }
        SourceKind::Browser => {
            let browser = &config.settings.browser;
            let session = Arc::new(ChromiumSession::launch(browser.chrome_path.clone()).await?);

            let scrape = ScrapeSettings {
                page_url_template: browser.page_url_template.clone(),
                card_selector: browser.card_selector.clone(),
                strip_chars: browser.slug_strip_chars.clone(),
                timeout: config.timeout(),
            };
            let layout = FixedOffsetLayout::new(
                config.settings.layout.name_line,
                config.settings.layout.synergy_line,
            );
            let source = Box::new(BrowserSource::new(
                Arc::clone(&session),
                scrape,
                Box::new(layout),
            ));

            let outcome = run_with(config, cards, source).await;
            let closed = session.shutdown().await;
            if let (Err(_), Err(e)) = (&outcome, &closed) {
                tracing::warn!("Browser shutdown also failed: {}", e);
            }
            let summary = outcome?;
            closed?;
            Ok(summary)
        }
    }
}

/// Runs one pipeline with local file storage and the given collaborators.
pub async fn run_with(
    config: RunConfig,
    cards: Box<dyn CardDatabase>,
    source: Box<dyn RecommendationSource>,
) -> Result<RunSummary> {
    let pipeline = RecommendationPipeline::new(LocalStorage::default(), config, cards, source);
    EtlEngine::new(pipeline).run().await
}
