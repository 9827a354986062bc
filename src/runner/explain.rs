//! Condense an `executionStats` explain document into a few readable numbers.

use mongodb::bson::{Bson, Document};

/// Headline execution metrics for one explained find.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecutionSummary {
    /// Stage names from the root of the winning plan down to its leaf, e.g. `FETCH > IXSCAN`.
    pub stages: Vec<String>,
    pub index_name: Option<String>,
    pub n_returned: Option<u64>,
    pub docs_examined: Option<u64>,
    pub keys_examined: Option<u64>,
    pub execution_time_ms: Option<u64>,
}

impl ExecutionSummary {
    pub fn stage_path(&self) -> String {
        if self.stages.is_empty() { "unknown".to_string() } else { self.stages.join(" > ") }
    }
}

/// The `executionStats` sub-document, if the server returned one.
pub fn execution_stats(explain_doc: &Document) -> Option<&Document> {
    explain_doc.get_document("executionStats").ok()
}

pub fn summarize(explain_doc: &Document) -> Option<ExecutionSummary> {
    let stats = execution_stats(explain_doc)?;
    let mut summary = ExecutionSummary {
        n_returned: read_u64(stats, "nReturned"),
        docs_examined: read_u64(stats, "totalDocsExamined"),
        keys_examined: read_u64(stats, "totalKeysExamined"),
        execution_time_ms: read_u64(stats, "executionTimeMillis"),
        ..ExecutionSummary::default()
    };

    let mut stage = stats.get_document("executionStages").ok();
    while let Some(current) = stage {
        if let Ok(name) = current.get_str("stage") {
            summary.stages.push(name.to_string());
        }
        if summary.index_name.is_none()
            && let Ok(index_name) = current.get_str("indexName")
        {
            summary.index_name = Some(index_name.to_string());
        }
        stage = current.get_document("inputStage").ok();
    }

    Some(summary)
}

/// Pretty relaxed Extended JSON, the same shape `mongosh` prints.
pub fn to_pretty_json(doc: &Document) -> String {
    let value = Bson::Document(doc.clone()).into_relaxed_extjson();
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
}

fn read_u64(doc: &Document, key: &str) -> Option<u64> {
    let value = doc.get(key)?;
    match value {
        Bson::Int32(v) if *v >= 0 => Some(*v as u64),
        Bson::Int64(v) if *v >= 0 => Some(*v as u64),
        Bson::Double(v) if *v >= 0.0 => Some(*v as u64),
        _ => None,
    }
}
