use thiserror::Error;

/// Ошибки на границах слоя фильтров.
///
/// Translation itself never fails: unresolved names are dropped and bad
/// ranges corrected. These cover parsing and serialization at the edges.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("catalog payload is not valid JSON: {0}")]
    CatalogJson(#[from] serde_json::Error),

    #[error("query string serialization failed: {0}")]
    Serialize(#[from] serde_qs::Error),

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("storage error: {0}")]
    Storage(String),
}
