use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

pub struct ExportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ExportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Fetching listing pages...");
        let records = self.pipeline.extract().await?;
        tracing::info!("Fetched {} records", records.len());

        let table = self.pipeline.transform(records).await?;
        tracing::info!("Flattened into {} columns", table.columns.len());

        let output_path = self.pipeline.load(table).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
