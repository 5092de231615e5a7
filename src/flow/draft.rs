use super::model::{AuthConfig, Endpoint, FlowModel};
use serde::{Deserialize, Serialize};

/// The in-progress, possibly incomplete form of a flow while it is being
/// edited. Any field may still be absent; the encoder fills documented
/// defaults instead of failing, so a draft can drive a live preview at
/// every keystroke.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
}

fn default_active() -> bool {
    true
}

impl FlowDraft {
    /// An empty draft for a brand new flow.
    pub fn new() -> Self {
        Self {
            id: None,
            name: None,
            description: None,
            base_url: None,
            auth: AuthConfig::None,
            active: true,
            endpoints: Vec::new(),
        }
    }

    /// A draft pre-filled from a persisted flow, for editing.
    pub fn from_model(model: FlowModel) -> Self {
        Self {
            id: Some(model.id),
            name: Some(model.name),
            description: Some(model.description),
            base_url: Some(model.base_url),
            auth: model.auth,
            active: model.active,
            endpoints: model.endpoints,
        }
    }
}

impl Default for FlowDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl From<FlowModel> for FlowDraft {
    fn from(model: FlowModel) -> Self {
        Self::from_model(model)
    }
}
