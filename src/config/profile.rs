use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

const BASE_URL: &str = "https://statusinvest.com.br/category/advancedsearchresultpaginated";
const ACCEPT: &str = "application/json, text/javascript, */*; q=0.01";

// Advanced-search filters as the endpoint expects them: a JSON literal
// passed through the `search` query parameter.
const SEARCH_FILTER: &str = r#"{"Segment":"","Gestao":"","my_range":"0;20"}"#;
const SEARCH_FILTER_FULL: &str = r#"{"Segment":"","Gestao":"","my_range":"0;20","dy":{"Item1":null,"Item2":null},"p_vp":{"Item1":null,"Item2":null}}"#;

/// Everything that shapes one run: where to fetch, how the request looks,
/// how many pages, and where the CSV goes. Loadable from a TOML file;
/// missing fields fall back to the paginated defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchProfile {
    pub base_url: String,
    pub headers: BTreeMap<String, String>,
    /// Session cookies, sent as a single `Cookie` header when non-empty.
    pub cookies: BTreeMap<String, String>,
    /// Static query parameters; `page` and `take` are merged in per request.
    pub query: BTreeMap<String, String>,
    /// Response key holding the row array (`data` or `result` upstream).
    pub row_key: String,
    pub take: u32,
    pub pages: u32,
    /// Stop the page loop early when a page returns no rows.
    pub stop_on_empty: bool,
    /// No timeout by default; the upstream call blocks until it returns.
    pub timeout_seconds: Option<u64>,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: String,
    pub file_stem: String,
    /// Append the local date (`_YYYYMMDD`) to the file name.
    pub dated: bool,
}

impl Default for FetchProfile {
    fn default() -> Self {
        Self::paginated()
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: ".".to_string(),
            file_stem: "fiis_statusinvest".to_string(),
            dated: false,
        }
    }
}

impl FetchProfile {
    /// Multi-page listing fetch: 10 pages of 15 rows under the `data` key.
    pub fn paginated() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            headers: BTreeMap::from([
                ("accept".to_string(), ACCEPT.to_string()),
                ("user-agent".to_string(), "Mozilla/5.0".to_string()),
                (
                    "x-requested-with".to_string(),
                    "XMLHttpRequest".to_string(),
                ),
            ]),
            cookies: BTreeMap::new(),
            query: BTreeMap::from([
                ("search".to_string(), SEARCH_FILTER.to_string()),
                ("CategoryType".to_string(), "2".to_string()),
            ]),
            row_key: "data".to_string(),
            take: 15,
            pages: 10,
            stop_on_empty: false,
            timeout_seconds: None,
            output: OutputConfig::default(),
        }
    }

    /// Single-page daily snapshot: 100 rows under the `result` key, written
    /// to a date-stamped file under `data/`.
    pub fn daily() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            headers: BTreeMap::from([
                ("accept".to_string(), ACCEPT.to_string()),
                (
                    "user-agent".to_string(),
                    "Mozilla/5.0 (Windows NT 10.0; Win64; x64)".to_string(),
                ),
            ]),
            cookies: BTreeMap::new(),
            query: BTreeMap::from([
                ("search".to_string(), SEARCH_FILTER_FULL.to_string()),
                ("orderColumn".to_string(), String::new()),
                ("isAsc".to_string(), String::new()),
                ("CategoryType".to_string(), "2".to_string()),
            ]),
            row_key: "result".to_string(),
            take: 100,
            pages: 1,
            stop_on_empty: false,
            timeout_seconds: None,
            output: OutputConfig {
                directory: "data".to_string(),
                file_stem: "fiis".to_string(),
                dated: true,
            },
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    pub fn from_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

impl OutputConfig {
    pub fn filename(&self) -> String {
        if self.dated {
            let stamp = chrono::Local::now().format("%Y%m%d");
            format!("{}_{}.csv", self.file_stem, stamp)
        } else {
            format!("{}.csv", self.file_stem)
        }
    }

    pub fn full_path(&self) -> String {
        Path::new(&self.directory)
            .join(self.filename())
            .display()
            .to_string()
    }
}

impl Validate for FetchProfile {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_positive_number("pages", self.pages as usize, 1)?;
        validate_positive_number("take", self.take as usize, 1)?;
        validate_non_empty_string("row_key", &self.row_key)?;
        validate_non_empty_string("output.file_stem", &self.output.file_stem)?;
        Ok(())
    }
}
