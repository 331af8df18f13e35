//! Resolver arguments and return values

use quill_core::Record;
use serde::de::DeserializeOwned;

use crate::error::{ResolveError, ResolveResult};

/// Field arguments as supplied by the client
pub type Arguments = serde_json::Map<String, serde_json::Value>;

/// What a resolver produces for one field
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    /// Absent value, including a one-to-one relation with no match
    Null,
    Scalar(serde_json::Value),
    Record(Record),
    List(Vec<Resolved>),
}

impl Resolved {
    pub fn records(records: impl IntoIterator<Item = Record>) -> Self {
        Self::List(records.into_iter().map(Self::Record).collect())
    }

    pub fn optional(record: Option<Record>) -> Self {
        record.map(Self::Record).unwrap_or(Self::Null)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Resolved]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<Record> for Resolved {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}

/// Deserialize a field's arguments into its typed input
pub fn parse_args<T: DeserializeOwned>(field: &str, args: &Arguments) -> ResolveResult<T> {
    serde_json::from_value(serde_json::Value::Object(args.clone()))
        .map_err(|e| ResolveError::invalid_arguments(field, e.to_string()))
}
