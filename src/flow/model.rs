use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Generates a fresh opaque identifier for a flow or one of its sub-entities.
pub(crate) fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// The HTTP methods an endpoint can be configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Whether a request body is meaningful for this method.
    pub fn allows_body(self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put)
    }

    /// The lowercase form used as a key in the generated document's paths map.
    pub fn as_wire_key(self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
        }
    }

    /// Parses a lowercase paths-map key back into a method.
    /// Returns `None` for method keys this model does not cover.
    pub fn from_wire_key(key: &str) -> Option<Self> {
        match key {
            "get" => Some(HttpMethod::Get),
            "post" => Some(HttpMethod::Post),
            "put" => Some(HttpMethod::Put),
            "delete" => Some(HttpMethod::Delete),
            _ => None,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        })
    }
}

/// The schema type of a parameter, body property or response property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    #[default]
    String,
    Number,
    Integer,
    Boolean,
}

impl ParamType {
    pub fn as_str(self) -> &'static str {
        match self {
            ParamType::String => "string",
            ParamType::Number => "number",
            ParamType::Integer => "integer",
            ParamType::Boolean => "boolean",
        }
    }

    /// Maps a schema `type` string to a model type. Unknown strings fall
    /// back to `String` so decoding stays total.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "number" => ParamType::Number,
            "integer" => ParamType::Integer,
            "boolean" => ParamType::Boolean,
            _ => ParamType::String,
        }
    }
}

/// Where a parameter is carried: inside the URL path template or the
/// query string. A parameter without an explicit location is a query
/// parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamLocation {
    Path,
    #[default]
    Query,
}

impl ParamLocation {
    pub fn as_str(self) -> &'static str {
        match self {
            ParamLocation::Path => "path",
            ParamLocation::Query => "query",
        }
    }
}

/// Authentication configuration for a flow. Exactly one shape is active
/// at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AuthConfig {
    #[default]
    None,
    #[serde(rename_all = "camelCase")]
    ApiKey {
        api_key_name: String,
        api_key_value: String,
    },
    #[serde(rename_all = "camelCase")]
    Bearer { bearer_token: String },
}

/// One input to an endpoint, carried in the path or the query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: ParamType,
    pub required: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(rename = "in", default)]
    pub location: ParamLocation,
}

impl Parameter {
    pub fn new(name: impl Into<String>, location: ParamLocation) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            param_type: ParamType::String,
            required: false,
            description: String::new(),
            example: None,
            location,
        }
    }
}

/// One field of the JSON body sent for POST/PUT endpoints. Every body
/// property is marked required in the generated schema, but `required`
/// is still tracked here because decoding trusts the stored document's
/// own required list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyProperty {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub property_type: ParamType,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub example: String,
    #[serde(default)]
    pub required: bool,
}

impl BodyProperty {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            property_type: ParamType::String,
            description: String::new(),
            example: String::new(),
            required: false,
        }
    }
}

/// One field of a configured response schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseProperty {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub property_type: ParamType,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub example: String,
}

impl ResponseProperty {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            property_type: ParamType::String,
            description: String::new(),
            example: String::new(),
        }
    }
}

/// A configurable response for one HTTP status code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseDef {
    pub id: String,
    pub status_code: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub properties: Vec<ResponseProperty>,
}

impl ResponseDef {
    pub fn new(status_code: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            status_code: status_code.into(),
            description: String::new(),
            properties: Vec::new(),
        }
    }
}

/// One HTTP operation within a flow: a method plus a path template,
/// together with its parameters, body fields and response definitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub method: HttpMethod,
    pub path: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub body_properties: Vec<BodyProperty>,
    #[serde(default)]
    pub responses: Vec<ResponseDef>,
}

impl Endpoint {
    pub fn new() -> Self {
        Self {
            id: new_id(),
            name: String::new(),
            description: String::new(),
            method: HttpMethod::Get,
            path: String::new(),
            parameters: Vec::new(),
            body_properties: Vec::new(),
            responses: Vec::new(),
        }
    }

    /// Switches the endpoint's method. Body properties are cleared
    /// whenever the new method cannot carry a body, so a GET or DELETE
    /// endpoint never keeps stale body fields around.
    pub fn set_method(&mut self, method: HttpMethod) {
        if !method.allows_body() {
            self.body_properties.clear();
        }
        self.method = method;
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::new()
    }
}

/// One configured integration flow, as persisted: general metadata, auth
/// configuration and an ordered list of endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowModel {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub base_url: String,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default = "default_active")]
    pub active: bool,
    pub endpoints: Vec<Endpoint>,
    pub created_at: String,
    pub updated_at: String,
}

fn default_active() -> bool {
    true
}
