use crate::domain::model::{Card, ResultDocument, SynergyEntry};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// What to do when a name does not resolve to a legendary creature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingCommanderPolicy {
    #[default]
    Abort,
    Skip,
}

pub trait ConfigProvider: Send + Sync {
    fn source_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn synergy_threshold(&self) -> i32;
    fn missing_policy(&self) -> MissingCommanderPolicy;
}

/// Card-data lookup. Returns every record sharing the name, in source order.
#[async_trait]
pub trait CardDatabase: Send + Sync {
    async fn lookup_by_name(&self, name: &str) -> Result<Vec<Card>>;
}

/// A strategy that produces synergy entries for one resolved commander.
#[async_trait]
pub trait RecommendationSource: Send + Sync {
    async fn recommendations(&self, commander: &Card, threshold: i32)
        -> Result<Vec<SynergyEntry>>;
}

/// Turns one rendered card element into a synergy entry.
pub trait SynergyParser: Send + Sync {
    fn parse(&self, block: &str) -> Result<SynergyEntry>;
}

/// A browser able to hand out pages. One page is open at a time.
#[async_trait]
pub trait PageProvider: Send + Sync {
    async fn open_page(&self) -> Result<Box<dyn CardPage>>;
}

#[async_trait]
pub trait CardPage: Send + Sync {
    /// Navigate and block until navigation completes or `timeout` elapses.
    async fn navigate(&mut self, url: &str, timeout: Duration) -> Result<()>;
    /// Rendered text of every element matching `selector`, in document order.
    async fn element_texts(&self, selector: &str) -> Result<Vec<String>>;
    async fn close(self: Box<Self>) -> Result<()>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<String>>;
    async fn transform(&self, names: Vec<String>) -> Result<ResultDocument>;
    async fn load(&self, document: &ResultDocument) -> Result<String>;
}
