use crate::core::Pipeline;
use crate::domain::model::ResultDocument;
use crate::utils::error::Result;

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub output_path: String,
    pub document: ResultDocument,
}

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Nothing is written unless every commander made it through transform.
    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("Reading commander names...");
        let names = self.pipeline.extract().await?;
        tracing::info!("Read {} commander name(s)", names.len());

        let document = self.pipeline.transform(names).await?;
        tracing::info!("Collected recommendations for {} commander(s)", document.len());

        let output_path = self.pipeline.load(&document).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(RunSummary {
            output_path,
            document,
        })
    }
}
