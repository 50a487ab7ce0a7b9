use super::normalize::parse_catalog;
use crate::error::FilterError;
use contracts::catalog::BackendFilters;
use std::sync::Arc;

/// Состояние загрузки каталога фильтров
#[derive(Debug, Clone, Default)]
pub enum CatalogStatus {
    #[default]
    Idle,
    Loading,
    Ready(Arc<BackendFilters>),
    Failed(String),
}

/// Per-session holder of the filter catalog.
///
/// The HTTP call itself belongs to the caller; this type only tracks
/// whether a fetch should start. `begin_fetch` is the guard against
/// duplicate concurrent fetches, and a failed fetch is retried the next
/// time a view asks for the catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogCache {
    status: CatalogStatus,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the caller should fetch now
    pub fn begin_fetch(&mut self) -> bool {
        match self.status {
            CatalogStatus::Loading | CatalogStatus::Ready(_) => false,
            CatalogStatus::Idle | CatalogStatus::Failed(_) => {
                self.status = CatalogStatus::Loading;
                true
            }
        }
    }

    /// Store the fetch outcome, returning the catalog on success
    pub fn finish(
        &mut self,
        result: Result<BackendFilters, FilterError>,
    ) -> Option<Arc<BackendFilters>> {
        if !matches!(self.status, CatalogStatus::Loading) {
            tracing::warn!("catalog fetch finished without begin_fetch");
        }
        match result {
            Ok(catalog) => {
                let catalog = Arc::new(catalog);
                self.status = CatalogStatus::Ready(Arc::clone(&catalog));
                Some(catalog)
            }
            Err(e) => {
                tracing::error!("Failed to load filter catalog: {}", e);
                self.status = CatalogStatus::Failed(e.to_string());
                None
            }
        }
    }

    /// Finish with a raw response body
    pub fn finish_with_payload(&mut self, payload: &str) -> Option<Arc<BackendFilters>> {
        self.finish(parse_catalog(payload))
    }

    pub fn catalog(&self) -> Option<Arc<BackendFilters>> {
        match &self.status {
            CatalogStatus::Ready(catalog) => Some(Arc::clone(catalog)),
            _ => None,
        }
    }

    pub fn status(&self) -> &CatalogStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, CatalogStatus::Loading)
    }

    pub fn last_error(&self) -> Option<&str> {
        match &self.status {
            CatalogStatus::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Forget the cached catalog so the next view refetches it
    pub fn invalidate(&mut self) {
        self.status = CatalogStatus::Idle;
    }
}
