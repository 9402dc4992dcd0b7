//! Where the collection comes from.
//!
//! The query engine only sees an already-materialized `&[Automation]`.
//! An [`AutomationSource`] produces that snapshot once per request, either
//! by reading the JSON dataset afresh or by handing out a cached copy.

use async_trait::async_trait;
use autotable_types::Automation;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::error::{SourceError, SourceResult};

/// Supplies the full collection for one request.
#[async_trait]
pub trait AutomationSource: Send + Sync {
    /// Returns an immutable snapshot of every record.
    async fn load(&self) -> SourceResult<Arc<Vec<Automation>>>;
}

/// A fixed collection held in memory.
pub struct InMemorySource {
    records: Arc<Vec<Automation>>,
}

impl InMemorySource {
    pub fn new(records: Vec<Automation>) -> Self {
        Self {
            records: Arc::new(records),
        }
    }
}

#[async_trait]
impl AutomationSource for InMemorySource {
    async fn load(&self) -> SourceResult<Arc<Vec<Automation>>> {
        Ok(Arc::clone(&self.records))
    }
}

/// Reads the collection from a JSON array on disk.
pub struct JsonFileSource {
    path: PathBuf,
    cache: Option<OnceCell<Arc<Vec<Automation>>>>,
}

impl JsonFileSource {
    /// Re-reads the file on every [`load`](AutomationSource::load).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: None,
        }
    }

    /// Reads the file on first successful load and serves that snapshot
    /// from then on. A failed load is not cached.
    pub fn cached(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: Some(OnceCell::new()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> SourceResult<Arc<Vec<Automation>>> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| self.unavailable(e.to_string()))?;
        let records: Vec<Automation> =
            serde_json::from_slice(&bytes).map_err(|e| self.unavailable(e.to_string()))?;

        let mut ids = HashSet::with_capacity(records.len());
        if let Some(dup) = records.iter().find(|r| !ids.insert(r.id.as_str())) {
            return Err(self.unavailable(format!("duplicate id {:?}", dup.id)));
        }

        info!("Loaded {} automations from {:?}", records.len(), self.path);
        Ok(Arc::new(records))
    }

    fn unavailable(&self, reason: String) -> SourceError {
        SourceError::DataUnavailable {
            path: self.path.clone(),
            reason,
        }
    }
}

#[async_trait]
impl AutomationSource for JsonFileSource {
    async fn load(&self) -> SourceResult<Arc<Vec<Automation>>> {
        match &self.cache {
            Some(cell) => {
                let records = cell.get_or_try_init(|| self.read()).await?;
                debug!("Serving cached snapshot of {} automations", records.len());
                Ok(Arc::clone(records))
            }
            None => self.read().await,
        }
    }
}
