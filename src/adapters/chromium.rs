//! Headless Chromium session backing the browser recommendation strategy.

use crate::domain::ports::{CardPage, PageProvider};
use crate::utils::error::{RecsError, Result};
use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::page::Page;
use futures::StreamExt;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// One browser process per run. Call [`ChromiumSession::shutdown`] when the
/// run ends, whether or not it succeeded.
pub struct ChromiumSession {
    browser: Mutex<Browser>,
    handler: JoinHandle<()>,
}

impl ChromiumSession {
    /// Launch headless Chromium. Without `chrome_path` the executable is
    /// auto-detected.
    pub async fn launch(chrome_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = BrowserConfig::builder()
            .arg("--headless=new")
            .arg("--disable-gpu")
            .arg("--no-sandbox")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-extensions");
        if let Some(path) = chrome_path {
            builder = builder.chrome_executable(path);
        }
        let config = builder.build().map_err(|message| RecsError::ConfigError {
            message: format!("failed to build browser config: {}", message),
        })?;

        let (browser, mut handler) = Browser::launch(config).await?;
        tracing::info!("Browser session started");

        let handler = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::debug!("browser handler event error: {}", e);
                }
            }
        });

        Ok(Self {
            browser: Mutex::new(browser),
            handler,
        })
    }

    pub async fn shutdown(&self) -> Result<()> {
        let mut browser = self.browser.lock().await;
        browser.close().await?;
        browser.wait().await?;
        self.handler.abort();
        tracing::info!("Browser session closed");
        Ok(())
    }
}

#[async_trait]
impl PageProvider for ChromiumSession {
    async fn open_page(&self) -> Result<Box<dyn CardPage>> {
        let page = self.browser.lock().await.new_page("about:blank").await?;
        Ok(Box::new(ChromiumPage { page }))
    }
}

pub struct ChromiumPage {
    page: Page,
}

#[async_trait]
impl CardPage for ChromiumPage {
    async fn navigate(&mut self, url: &str, timeout: Duration) -> Result<()> {
        let navigation = async {
            self.page.goto(url).await?;
            self.page.wait_for_navigation().await?;
            Ok::<_, RecsError>(())
        };

        match tokio::time::timeout(timeout, navigation).await {
            Ok(result) => result,
            Err(_) => Err(RecsError::Timeout {
                url: url.to_string(),
                seconds: timeout.as_secs(),
            }),
        }
    }

    async fn element_texts(&self, selector: &str) -> Result<Vec<String>> {
        let elements = self.page.find_elements(selector).await?;

        let mut texts = Vec::with_capacity(elements.len());
        for element in elements {
            texts.push(element.inner_text().await?.unwrap_or_default());
        }
        Ok(texts)
    }

    async fn close(self: Box<Self>) -> Result<()> {
        self.page.close().await?;
        Ok(())
    }
}
