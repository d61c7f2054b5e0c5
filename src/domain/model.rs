use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One row-object from the remote listing. Keys stay in document order
/// (serde_json `preserve_order`), which is what decides CSV column order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub data: Map<String, Value>,
}

impl Record {
    pub fn new(data: Map<String, Value>) -> Self {
        Self { data }
    }
}

/// The aggregate flattened for export: all fetched records plus the
/// column union across them, in first-discovery order.
#[derive(Debug, Clone)]
pub struct Table {
    pub columns: Vec<String>,
    pub records: Vec<Record>,
}
