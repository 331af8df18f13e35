//! Case-insensitive substring filter

use crate::traits::Searchable;

/// Predicate built from an optional `query` argument
///
/// An absent or empty query accepts every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextFilter {
    needle: Option<String>,
}

impl TextFilter {
    pub fn new(query: Option<&str>) -> Self {
        Self {
            needle: query.filter(|q| !q.is_empty()).map(str::to_lowercase),
        }
    }

    pub fn is_match_all(&self) -> bool {
        self.needle.is_none()
    }

    pub fn matches<T: Searchable + ?Sized>(&self, record: &T) -> bool {
        match &self.needle {
            None => true,
            Some(needle) => record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(needle.as_str())),
        }
    }

    /// Keep matching records, preserving their order
    pub fn apply<T: Searchable>(&self, records: Vec<T>) -> Vec<T> {
        if self.is_match_all() {
            return records;
        }
        let before = records.len();
        let kept: Vec<T> = records.into_iter().filter(|r| self.matches(r)).collect();
        tracing::trace!("Text filter kept {} of {} records", kept.len(), before);
        kept
    }
}
