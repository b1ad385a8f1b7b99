//! Flow input documents.
//!
//! A [`FlowTable`] is the raw material of a diagram: display labels and a
//! matrix of directed byte counts. It is read from JSON in one of three
//! shapes, detected from the top-level value:
//!
//! - an explicit matrix, `{ "labels": [...], "flow": [[...], ...] }`;
//! - a two-level terms aggregation response, with `aggregations.source_nodes`
//!   buckets holding `destinations` buckets that carry a `bytes.value` sum;
//! - an array of flow records with `source.ip`, `destination.ip` and
//!   `network.bytes` fields (or the short names `source`, `destination` and
//!   `bytes`).
//!
//! For the last two shapes nodes are numbered by first appearance, a
//! source before the destinations listed under it, and repeated pairs are
//! summed. Validation of the matrix itself is left to
//! [`FlowMatrix`](crate::diagram::FlowMatrix).

use indexmap::IndexSet;
use log::debug;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Errors raised while reading a flow document.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("malformed flow document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unrecognized flow document: {0}")]
    UnknownShape(String),
}

/// Node labels and the directed flow between them, before validation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FlowTable {
    labels: Vec<String>,
    flow: Vec<Vec<f64>>,
}

impl FlowTable {
    /// Creates a table from labels and matrix rows.
    pub fn new(labels: Vec<String>, flow: Vec<Vec<f64>>) -> Self {
        Self { labels, flow }
    }

    /// Parses a flow document in any of the supported shapes.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Json`] for invalid JSON or fields of the wrong
    /// type, and [`SourceError::UnknownShape`] when the document matches none
    /// of the shapes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use chordal::source::FlowTable;
    /// let table = FlowTable::from_json(
    ///     r#"[
    ///         {"source.ip": "10.0.0.1", "destination.ip": "10.0.0.2", "network.bytes": 300},
    ///         {"source.ip": "10.0.0.1", "destination.ip": "10.0.0.2", "network.bytes": 200}
    ///     ]"#,
    /// )
    /// .unwrap();
    /// assert_eq!(table.labels(), ["10.0.0.1", "10.0.0.2"]);
    /// assert_eq!(table.flow()[0][1], 500.0);
    /// ```
    pub fn from_json(input: &str) -> Result<Self, SourceError> {
        let value: Value = serde_json::from_str(input)?;

        let is_matrix = value.get("labels").is_some() || value.get("flow").is_some();
        let is_aggregation = value.get("aggregations").is_some();

        let table = if is_matrix {
            debug!("Reading explicit flow matrix");
            serde_json::from_value(value)?
        } else if is_aggregation {
            debug!("Reading aggregation response");
            let response: AggregationResponse = serde_json::from_value(value)?;
            response.into_table()
        } else if value.is_array() {
            debug!("Reading flow records");
            let records: Vec<FlowRecord> = serde_json::from_value(value)?;
            Self::from_records(records)
        } else {
            return Err(SourceError::UnknownShape(format!(
                "expected a matrix object, an aggregation response or an array of records, found {}",
                value_kind(&value)
            )));
        };

        debug!(nodes = table.labels.len(); "Flow table read");
        Ok(table)
    }

    /// Builds a table from flow records, summing repeated pairs.
    pub fn from_records(records: impl IntoIterator<Item = FlowRecord>) -> Self {
        let mut builder = TableBuilder::default();
        for record in records {
            builder.add(&record.source, &record.destination, record.bytes);
        }
        builder.finish()
    }

    /// Returns the node labels.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the flow rows.
    pub fn flow(&self) -> &[Vec<f64>] {
        &self.flow
    }

    /// Returns the number of labelled nodes.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if the table has no nodes.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Splits the table into labels and rows.
    pub fn into_parts(self) -> (Vec<String>, Vec<Vec<f64>>) {
        (self.labels, self.flow)
    }
}

/// One observed transfer between two hosts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FlowRecord {
    #[serde(rename = "source.ip", alias = "source")]
    pub source: String,
    #[serde(rename = "destination.ip", alias = "destination")]
    pub destination: String,
    #[serde(rename = "network.bytes", alias = "bytes")]
    pub bytes: f64,
}

#[derive(Debug, Deserialize)]
struct AggregationResponse {
    aggregations: Aggregations,
}

#[derive(Debug, Deserialize)]
struct Aggregations {
    source_nodes: Buckets<SourceBucket>,
}

#[derive(Debug, Deserialize)]
struct Buckets<T> {
    buckets: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct SourceBucket {
    key: String,
    destinations: Buckets<DestinationBucket>,
}

#[derive(Debug, Deserialize)]
struct DestinationBucket {
    key: String,
    bytes: SumValue,
}

/// A metric aggregation result; `null` when no document had the field.
#[derive(Debug, Deserialize)]
struct SumValue {
    value: Option<f64>,
}

impl AggregationResponse {
    fn into_table(self) -> FlowTable {
        let mut builder = TableBuilder::default();
        for source in self.aggregations.source_nodes.buckets {
            builder.node(&source.key);
            for destination in source.destinations.buckets {
                let bytes = destination.bytes.value.unwrap_or(0.0);
                builder.add(&source.key, &destination.key, bytes);
            }
        }
        builder.finish()
    }
}

/// Numbers nodes by first appearance and accumulates pair totals.
#[derive(Debug, Default)]
struct TableBuilder {
    nodes: IndexSet<String>,
    edges: Vec<(usize, usize, f64)>,
}

impl TableBuilder {
    fn node(&mut self, label: &str) -> usize {
        match self.nodes.get_index_of(label) {
            Some(index) => index,
            None => self.nodes.insert_full(label.to_string()).0,
        }
    }

    fn add(&mut self, source: &str, destination: &str, bytes: f64) {
        let from = self.node(source);
        let to = self.node(destination);
        self.edges.push((from, to, bytes));
    }

    fn finish(self) -> FlowTable {
        let size = self.nodes.len();
        let mut flow = vec![vec![0.0; size]; size];
        for (from, to, bytes) in self.edges {
            flow[from][to] += bytes;
        }
        FlowTable {
            labels: self.nodes.into_iter().collect(),
            flow,
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object without `labels`, `flow` or `aggregations`",
    }
}
