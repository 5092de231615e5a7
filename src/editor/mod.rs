//! Multi-step flow editing.
//!
//! [`EditorController`] owns one [`FlowDraft`] and walks it through the
//! four editor steps: General, Endpoints, Responses, Preview. Moving
//! forward runs the gate for the current step and normalizes what the
//! step produced; moving backward is always allowed. Saving re-runs every
//! gate regardless of where back-navigation left the cursor, then stamps
//! identifiers and timestamps and hands the flow to the injected
//! repository.

pub mod validate;

use crate::error::{EditorError, ValidationError, ValidationField};
use crate::flow::model::new_id;
use crate::flow::{Endpoint, FlowDraft, FlowModel, HttpMethod};
use crate::repository::FlowRepository;
use crate::schema::document::OpenApiDocument;
use crate::schema::encoder::encode_flow;
use crate::schema::path::normalize_path;
use ahash::AHashMap;
use chrono::{SecondsFormat, Utc};
use itertools::chain;
use validate::{validate_endpoints, validate_general, validate_responses};

/// The editor's linear step sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EditorStep {
    General,
    Endpoints,
    Responses,
    Preview,
}

impl EditorStep {
    /// The step after this one; `Preview` is the ceiling.
    pub fn next(self) -> Self {
        match self {
            EditorStep::General => EditorStep::Endpoints,
            EditorStep::Endpoints => EditorStep::Responses,
            EditorStep::Responses | EditorStep::Preview => EditorStep::Preview,
        }
    }

    /// The step before this one; `General` is the floor.
    pub fn previous(self) -> Self {
        match self {
            EditorStep::General | EditorStep::Endpoints => EditorStep::General,
            EditorStep::Responses => EditorStep::Endpoints,
            EditorStep::Preview => EditorStep::Responses,
        }
    }
}

/// Stateful orchestration of one editing session. Exactly one controller
/// owns one draft at a time; the repository is injected so storage stays
/// an adapter concern.
pub struct EditorController<R: FlowRepository> {
    repository: R,
    draft: FlowDraft,
    step: EditorStep,
    errors: AHashMap<ValidationField, String>,
}

impl<R: FlowRepository> EditorController<R> {
    /// Starts a session over an empty draft.
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            draft: FlowDraft::new(),
            step: EditorStep::General,
            errors: AHashMap::new(),
        }
    }

    /// Starts a session pre-filled from a persisted flow.
    pub fn edit(repository: R, model: FlowModel) -> Self {
        Self {
            draft: FlowDraft::from_model(model),
            ..Self::new(repository)
        }
    }

    pub fn step(&self) -> EditorStep {
        self.step
    }

    pub fn draft(&self) -> &FlowDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut FlowDraft {
        &mut self.draft
    }

    /// Field-level messages from the most recent gate run, keyed by the
    /// input they belong to.
    pub fn errors(&self) -> &AHashMap<ValidationField, String> {
        &self.errors
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn repository_mut(&mut self) -> &mut R {
        &mut self.repository
    }

    /// The live preview: the draft encoded as it would be persisted.
    /// Total over any partial draft, cheap enough to call on every edit.
    pub fn preview(&self) -> OpenApiDocument {
        encode_flow(&self.draft)
    }

    /// Appends a blank GET endpoint and returns it for configuration.
    pub fn add_endpoint(&mut self) -> &mut Endpoint {
        self.draft.endpoints.push(Endpoint::new());
        self.draft
            .endpoints
            .last_mut()
            .expect("endpoint was just pushed")
    }

    pub fn endpoint_mut(&mut self, id: &str) -> Option<&mut Endpoint> {
        self.draft.endpoints.iter_mut().find(|ep| ep.id == id)
    }

    /// Removes an endpoint by id. Returns whether anything was removed.
    pub fn remove_endpoint(&mut self, id: &str) -> bool {
        let before = self.draft.endpoints.len();
        self.draft.endpoints.retain(|ep| ep.id != id);
        self.draft.endpoints.len() != before
    }

    /// Switches an endpoint's method, clearing body properties when the
    /// new method cannot carry a body. Returns false for an unknown id.
    pub fn set_endpoint_method(&mut self, id: &str, method: HttpMethod) -> bool {
        match self.endpoint_mut(id) {
            Some(endpoint) => {
                endpoint.set_method(method);
                true
            }
            None => false,
        }
    }

    /// Runs the gate for the current step. On success the step's
    /// normalization is applied and the cursor moves forward; on failure
    /// the cursor stays put and [`errors`](Self::errors) carries the
    /// messages.
    pub fn advance(&mut self) -> bool {
        let gate_result = self.gate(self.step);
        if !self.apply_errors(gate_result) {
            return false;
        }
        self.normalize_on_leave(self.step);
        self.step = self.step.next();
        true
    }

    /// Moves back one step unconditionally; `General` is the floor.
    pub fn retreat(&mut self) -> EditorStep {
        self.step = self.step.previous();
        self.step
    }

    /// Re-runs every gate and, if all pass, commits the draft: a first
    /// save assigns a fresh id and stamps both timestamps, a re-save
    /// keeps the stored `created_at` and refreshes `updated_at`.
    pub fn save(&mut self) -> Result<FlowModel, EditorError> {
        let all_errors: Vec<ValidationError> = chain!(
            validate_general(&self.draft),
            validate_endpoints(&self.draft),
            validate_responses(&self.draft),
        )
        .collect();
        if let Some(first) = all_errors.first().cloned() {
            self.apply_errors(all_errors);
            return Err(first.into());
        }
        self.errors.clear();

        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let (id, created_at) = match self.draft.id.clone() {
            Some(id) => {
                let created = self
                    .repository
                    .get(&id)?
                    .map(|stored| stored.created_at)
                    .unwrap_or_else(|| now.clone());
                (id, created)
            }
            None => (new_id(), now.clone()),
        };

        let model = FlowModel {
            id: id.clone(),
            name: self.draft.name.clone().unwrap_or_default(),
            description: self.draft.description.clone().unwrap_or_default(),
            base_url: self.draft.base_url.clone().unwrap_or_default(),
            auth: self.draft.auth.clone(),
            active: self.draft.active,
            endpoints: self.draft.endpoints.clone(),
            created_at,
            updated_at: now,
        };

        self.repository.save(model.clone())?;
        self.draft.id = Some(id);
        Ok(model)
    }

    fn gate(&self, step: EditorStep) -> Vec<ValidationError> {
        match step {
            EditorStep::General => validate_general(&self.draft),
            EditorStep::Endpoints => validate_endpoints(&self.draft),
            EditorStep::Responses => validate_responses(&self.draft),
            EditorStep::Preview => Vec::new(),
        }
    }

    /// Replaces the error map with the outcome of a gate run, keeping the
    /// first message per field. Returns whether the gate passed.
    fn apply_errors(&mut self, gate_errors: Vec<ValidationError>) -> bool {
        self.errors.clear();
        for error in &gate_errors {
            self.errors
                .entry(error.field())
                .or_insert_with(|| error.to_string());
        }
        gate_errors.is_empty()
    }

    fn normalize_on_leave(&mut self, step: EditorStep) {
        match step {
            EditorStep::General => {
                if let Some(base_url) = self.draft.base_url.take() {
                    self.draft.base_url = Some(base_url.trim_end_matches('/').to_string());
                }
            }
            EditorStep::Endpoints => {
                for endpoint in &mut self.draft.endpoints {
                    if !endpoint.path.is_empty() {
                        endpoint.path = normalize_path(&endpoint.path);
                    }
                }
            }
            EditorStep::Responses | EditorStep::Preview => {}
        }
    }
}
