use crate::config::profile::FetchProfile;
use crate::domain::model::Record;
use crate::utils::error::Result;
use reqwest::header::COOKIE;
use reqwest::Client;
use serde_json::Value;

/// Issues one GET per page against the listing endpoint, shaped by the
/// profile's headers, cookies and query template.
pub struct PageFetcher {
    client: Client,
    profile: FetchProfile,
}

impl PageFetcher {
    pub fn new(profile: FetchProfile) -> Self {
        Self {
            client: Client::new(),
            profile,
        }
    }

    /// Fetch one page and parse the body as JSON. The status code is only
    /// logged; an error body that is valid JSON still counts as a page.
    pub async fn fetch_page(&self, page: u32) -> Result<Value> {
        let mut request = self.client.get(&self.profile.base_url);

        for (key, value) in &self.profile.headers {
            request = request.header(key, value);
        }

        if !self.profile.cookies.is_empty() {
            let cookie = self
                .profile
                .cookies
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<_>>()
                .join("; ");
            request = request.header(COOKIE, cookie);
        }

        for (key, value) in &self.profile.query {
            request = request.query(&[(key, value)]);
        }
        request = request.query(&[
            ("page", page.to_string()),
            ("take", self.profile.take.to_string()),
        ]);

        if let Some(timeout) = self.profile.timeout_seconds {
            request = request.timeout(std::time::Duration::from_secs(timeout));
        }

        tracing::debug!("Requesting page {} from {}", page, self.profile.base_url);
        let response = request.send().await?;
        tracing::debug!("Page {} response status: {}", page, response.status());

        let body = response.text().await?;
        let payload: Value = serde_json::from_str(&body)?;
        Ok(payload)
    }

    /// Pull the row array out of the configured response key. A missing key
    /// or a non-array value contributes no rows.
    pub fn rows(&self, mut page: Value) -> Vec<Record> {
        match page.get_mut(self.profile.row_key.as_str()).map(Value::take) {
            Some(Value::Array(items)) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::Object(obj) => Some(Record::new(obj)),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}
