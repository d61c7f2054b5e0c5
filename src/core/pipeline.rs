use crate::config::profile::FetchProfile;
use crate::core::fetcher::PageFetcher;
use crate::core::table;
use crate::core::{Pipeline, Record, Storage, Table};
use crate::utils::error::Result;

/// Fetches the configured page range sequentially, flattens the rows into a
/// column-union table and writes it as CSV through the storage port.
pub struct ListingPipeline<S: Storage> {
    storage: S,
    profile: FetchProfile,
    fetcher: PageFetcher,
}

impl<S: Storage> ListingPipeline<S> {
    pub fn new(storage: S, profile: FetchProfile) -> Self {
        let fetcher = PageFetcher::new(profile.clone());
        Self {
            storage,
            profile,
            fetcher,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage> Pipeline for ListingPipeline<S> {
    async fn extract(&self) -> Result<Vec<Record>> {
        let mut records = Vec::new();

        // Page N+1 is not requested until page N has been consumed. The
        // page count is fixed configuration; the API's own pagination
        // metadata is never read.
        for page in 0..self.profile.pages {
            let payload = self.fetcher.fetch_page(page).await?;
            let rows = self.fetcher.rows(payload);
            tracing::debug!("Page {} returned {} rows", page, rows.len());

            if rows.is_empty() && self.profile.stop_on_empty {
                tracing::info!("Page {} returned no rows, stopping early", page);
                break;
            }
            records.extend(rows);
        }

        Ok(records)
    }

    async fn transform(&self, data: Vec<Record>) -> Result<Table> {
        let columns = table::column_union(&data);
        Ok(Table {
            columns,
            records: data,
        })
    }

    async fn load(&self, table: Table) -> Result<String> {
        let csv_data = table::to_csv(&table)?;
        let filename = self.profile.output.filename();

        tracing::debug!(
            "Writing {} rows ({} bytes) to {}",
            table.records.len(),
            csv_data.len(),
            filename
        );
        self.storage.write_file(&filename, &csv_data).await?;

        Ok(self.profile.output.full_path())
    }
}
