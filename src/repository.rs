//! Flow persistence behind an explicit repository interface.
//!
//! The editor only ever talks to [`FlowRepository`]; where the flows
//! actually live is an adapter concern. [`MemoryRepository`] backs tests
//! and ephemeral sessions, [`JsonFileRepository`] keeps the whole flow
//! list in a single JSON file with read-parse-write-whole-file semantics
//! on every mutation. A remote-API adapter can satisfy the same trait
//! without the editor noticing.

use crate::error::RepositoryError;
use crate::flow::FlowModel;
use std::fs;
use std::path::PathBuf;

/// Storage interface for persisted flows.
pub trait FlowRepository {
    /// Returns every stored flow.
    fn list(&self) -> Result<Vec<FlowModel>, RepositoryError>;

    /// Looks a flow up by id.
    fn get(&self, id: &str) -> Result<Option<FlowModel>, RepositoryError>;

    /// Inserts the flow, or replaces the stored flow with the same id.
    fn save(&mut self, flow: FlowModel) -> Result<(), RepositoryError>;

    /// Removes a flow. Deleting an unknown id is an error.
    fn delete(&mut self, id: &str) -> Result<(), RepositoryError>;

    /// Toggles a stored flow's active flag without touching anything else.
    fn set_active(&mut self, id: &str, active: bool) -> Result<(), RepositoryError> {
        let mut flow = self
            .get(id)?
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;
        flow.active = active;
        self.save(flow)
    }
}

/// In-memory adapter. Flows live only as long as the repository value.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    flows: Vec<FlowModel>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FlowRepository for MemoryRepository {
    fn list(&self) -> Result<Vec<FlowModel>, RepositoryError> {
        Ok(self.flows.clone())
    }

    fn get(&self, id: &str) -> Result<Option<FlowModel>, RepositoryError> {
        Ok(self.flows.iter().find(|flow| flow.id == id).cloned())
    }

    fn save(&mut self, flow: FlowModel) -> Result<(), RepositoryError> {
        match self.flows.iter_mut().find(|stored| stored.id == flow.id) {
            Some(stored) => *stored = flow,
            None => self.flows.push(flow),
        }
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<(), RepositoryError> {
        let before = self.flows.len();
        self.flows.retain(|flow| flow.id != id);
        if self.flows.len() == before {
            return Err(RepositoryError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

/// File-backed adapter storing the full flow list as pretty-printed JSON.
/// Every operation reads and rewrites the whole file; the flow lists this
/// serves are small enough that simplicity wins over incremental updates.
#[derive(Debug)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<Vec<FlowModel>, RepositoryError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn store(&self, flows: &[FlowModel]) -> Result<(), RepositoryError> {
        let content = serde_json::to_string_pretty(flows)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl FlowRepository for JsonFileRepository {
    fn list(&self) -> Result<Vec<FlowModel>, RepositoryError> {
        self.load()
    }

    fn get(&self, id: &str) -> Result<Option<FlowModel>, RepositoryError> {
        Ok(self.load()?.into_iter().find(|flow| flow.id == id))
    }

    fn save(&mut self, flow: FlowModel) -> Result<(), RepositoryError> {
        let mut flows = self.load()?;
        match flows.iter_mut().find(|stored| stored.id == flow.id) {
            Some(stored) => *stored = flow,
            None => flows.push(flow),
        }
        self.store(&flows)
    }

    fn delete(&mut self, id: &str) -> Result<(), RepositoryError> {
        let mut flows = self.load()?;
        let before = flows.len();
        flows.retain(|flow| flow.id != id);
        if flows.len() == before {
            return Err(RepositoryError::NotFound(id.to_string()));
        }
        self.store(&flows)
    }
}
