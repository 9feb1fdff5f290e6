//! Shared loading and validation for the static stores.
use std::collections::HashSet;
use thiserror::Error;

/// Anything held in a static store and addressable by a stable id.
pub trait Record {
    fn id(&self) -> &str;
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate {store} id `{id}`")]
    DuplicateId { store: &'static str, id: String },
    #[error("product `{0}` has no images")]
    MissingImages(String),
    #[error("product `{id}` has negative price {price_cents}")]
    NegativePrice { id: String, price_cents: i64 },
    #[error("{store} record has an empty id")]
    EmptyId { store: &'static str },
}

/// Reject stores where two records share an id or an id is blank.
///
/// # Errors
///
/// Returns the first offending id.
pub fn ensure_unique_ids<R: Record>(store: &'static str, records: &[R]) -> Result<(), DataError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        let id = record.id();
        if id.trim().is_empty() {
            return Err(DataError::EmptyId { store });
        }
        if !seen.insert(id) {
            return Err(DataError::DuplicateId {
                store,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

/// Look a record up by id, preserving the store's order for ties.
pub fn find_by_id<'a, R: Record>(records: &'a [R], id: &str) -> Option<&'a R> {
    records.iter().find(|r| r.id() == id)
}
