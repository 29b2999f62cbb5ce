use crate::core::slug::page_url;
use crate::domain::model::{Card, SynergyEntry};
use crate::domain::ports::{CardPage, PageProvider, RecommendationSource, SynergyParser};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_PAGE_URL_TEMPLATE: &str = "https://edhrec.com/commanders/{slug}";
pub const DEFAULT_CARD_SELECTOR: &str = "div[class*='Card_container']";

#[derive(Debug, Clone)]
pub struct ScrapeSettings {
    pub page_url_template: String,
    pub card_selector: String,
    pub strip_chars: String,
    pub timeout: Duration,
}

/// Scrapes the commander's recommendation page. One page per commander,
/// closed before the outcome is returned.
pub struct BrowserSource<P: PageProvider> {
    provider: Arc<P>,
    settings: ScrapeSettings,
    parser: Box<dyn SynergyParser>,
}

impl<P: PageProvider> BrowserSource<P> {
    pub fn new(provider: Arc<P>, settings: ScrapeSettings, parser: Box<dyn SynergyParser>) -> Self {
        Self {
            provider,
            settings,
            parser,
        }
    }

    async fn card_blocks(&self, page: &mut dyn CardPage, url: &str) -> Result<Vec<String>> {
        page.navigate(url, self.settings.timeout).await?;

        let mut blocks = page.element_texts(&self.settings.card_selector).await?;
        // The page always renders a non-card banner as the first container.
        if !blocks.is_empty() {
            blocks.remove(0);
        }
        Ok(blocks)
    }
}

#[async_trait]
impl<P: PageProvider> RecommendationSource for BrowserSource<P> {
    /// The threshold is left to the aggregator on this path.
    async fn recommendations(&self, commander: &Card, _threshold: i32) -> Result<Vec<SynergyEntry>> {
        let url = page_url(
            &self.settings.page_url_template,
            &commander.name,
            &self.settings.strip_chars,
        );
        tracing::debug!("Scraping {}", url);

        let mut page = self.provider.open_page().await?;
        let outcome = self.card_blocks(page.as_mut(), &url).await;
        let closed = page.close().await;

        let blocks = match outcome {
            Ok(blocks) => {
                closed?;
                blocks
            }
            Err(e) => {
                if let Err(close_err) = closed {
                    tracing::warn!("Failed to close page for {}: {}", url, close_err);
                }
                return Err(e);
            }
        };
        tracing::debug!("{} card element(s) on {}", blocks.len(), url);

        blocks.iter().map(|block| self.parser.parse(block)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::extractor::FixedOffsetLayout;
    use crate::core::slug::DEFAULT_STRIP_CHARS;
    use crate::utils::error::RecsError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct ScriptedBrowser {
        blocks: Vec<String>,
        fail_navigation: bool,
        fail_close: bool,
        visited: Arc<Mutex<Vec<String>>>,
        open_pages: Arc<AtomicUsize>,
    }

    struct ScriptedPage {
        blocks: Vec<String>,
        fail_navigation: bool,
        fail_close: bool,
        visited: Arc<Mutex<Vec<String>>>,
        open_pages: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl PageProvider for ScriptedBrowser {
        async fn open_page(&self) -> Result<Box<dyn CardPage>> {
            self.open_pages.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(ScriptedPage {
                blocks: self.blocks.clone(),
                fail_navigation: self.fail_navigation,
                fail_close: self.fail_close,
                visited: Arc::clone(&self.visited),
                open_pages: Arc::clone(&self.open_pages),
            }))
        }
    }

    #[async_trait]
    impl CardPage for ScriptedPage {
        async fn navigate(&mut self, url: &str, _timeout: Duration) -> Result<()> {
            if self.fail_navigation {
                return Err(RecsError::Timeout {
                    url: url.to_string(),
                    seconds: 1,
                });
            }
            self.visited.lock().unwrap().push(url.to_string());
            Ok(())
        }

        async fn element_texts(&self, _selector: &str) -> Result<Vec<String>> {
            Ok(self.blocks.clone())
        }

        async fn close(self: Box<Self>) -> Result<()> {
            self.open_pages.fetch_sub(1, Ordering::SeqCst);
            if self.fail_close {
                return Err(RecsError::from(std::io::Error::new(
                    std::io::ErrorKind::BrokenPipe,
                    "target already gone",
                )));
            }
            Ok(())
        }
    }

    fn settings() -> ScrapeSettings {
        ScrapeSettings {
            page_url_template: DEFAULT_PAGE_URL_TEMPLATE.to_string(),
            card_selector: DEFAULT_CARD_SELECTOR.to_string(),
            strip_chars: DEFAULT_STRIP_CHARS.to_string(),
            timeout: Duration::from_secs(1),
        }
    }

    fn block(name: &str, synergy: &str) -> String {
        format!("New\nimg\nCreature\n{}\n1234 decks\n{}\n", name, synergy)
    }

    #[tokio::test]
    async fn test_skips_banner_and_parses_cards() {
        let browser = Arc::new(ScriptedBrowser {
            blocks: vec![
                "Top Commanders\nbanner".to_string(),
                block("Bonus Round", "62%"),
                block("Sol Ring", "-3%"),
            ],
            ..Default::default()
        });
        let source = BrowserSource::new(
            Arc::clone(&browser),
            settings(),
            Box::new(FixedOffsetLayout::default()),
        );

        let commander = Card::new("Prosper, Tome-Bound", true, true);
        let entries = source.recommendations(&commander, 10).await.unwrap();

        assert_eq!(
            entries,
            vec![
                SynergyEntry::new("Bonus Round", 62),
                SynergyEntry::new("Sol Ring", -3),
            ]
        );
        assert_eq!(
            *browser.visited.lock().unwrap(),
            vec!["https://edhrec.com/commanders/prosper-tome-bound".to_string()]
        );
        assert_eq!(browser.open_pages.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_page_closed_when_navigation_fails() {
        let browser = Arc::new(ScriptedBrowser {
            fail_navigation: true,
            ..Default::default()
        });
        let source = BrowserSource::new(
            Arc::clone(&browser),
            settings(),
            Box::new(FixedOffsetLayout::default()),
        );

        let err = source
            .recommendations(&Card::new("Atraxa", true, true), 10)
            .await
            .unwrap_err();
        assert!(matches!(err, RecsError::Timeout { .. }));
        assert_eq!(browser.open_pages.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_navigation_error_kept_when_close_also_fails() {
        let browser = Arc::new(ScriptedBrowser {
            fail_navigation: true,
            fail_close: true,
            ..Default::default()
        });
        let source = BrowserSource::new(
            Arc::clone(&browser),
            settings(),
            Box::new(FixedOffsetLayout::default()),
        );

        let err = source
            .recommendations(&Card::new("Atraxa", true, true), 10)
            .await
            .unwrap_err();
        assert!(matches!(err, RecsError::Timeout { .. }));
    }

    #[tokio::test]
    async fn test_close_error_reported_after_successful_scrape() {
        let browser = Arc::new(ScriptedBrowser {
            blocks: vec!["banner".to_string(), block("Bonus Round", "62%")],
            fail_close: true,
            ..Default::default()
        });
        let source = BrowserSource::new(browser, settings(), Box::new(FixedOffsetLayout::default()));

        let err = source
            .recommendations(&Card::new("Prosper, Tome-Bound", true, true), 10)
            .await
            .unwrap_err();
        assert!(matches!(err, RecsError::IoError(_)));
    }

    #[tokio::test]
    async fn test_malformed_block_is_parse_error() {
        let browser = Arc::new(ScriptedBrowser {
            blocks: vec!["banner".to_string(), "Sol Ring\n62%".to_string()],
            ..Default::default()
        });
        let source = BrowserSource::new(browser, settings(), Box::new(FixedOffsetLayout::default()));

        let err = source
            .recommendations(&Card::new("Atraxa", true, true), 10)
            .await
            .unwrap_err();
        assert!(matches!(err, RecsError::ParseError { .. }));
    }
}
