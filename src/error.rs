use thiserror::Error;

/// Errors surfaced by the entity stores.
///
/// Store errors propagate to the caller unmodified; nothing is retried by
/// the stores themselves. Validation failures are reported before the
/// collection is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// An operation referenced an id that does not exist in the store.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: u64 },
    /// A create or update carried an invalid field value.
    #[error("{0}")]
    Validation(String),
}

impl StoreError {
    pub fn task_not_found(id: u64) -> StoreError {
        StoreError::NotFound { entity: "task", id }
    }

    pub fn category_not_found(id: u64) -> StoreError {
        StoreError::NotFound { entity: "category", id }
    }
}
