//! Serde types for the OpenAPI-shaped wire format.
//!
//! These structs mirror the document shape the backend stores and returns:
//! an `openapi`/`info`/`servers`/`paths` document per flow, wrapped in a
//! listing envelope when flows are fetched in bulk. They carry no behavior;
//! the transforms live in [`crate::schema::encoder`] and
//! [`crate::schema::decoder`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// The OpenAPI version stamped on every generated document.
pub const OPENAPI_VERSION: &str = "3.0.3";

/// The only media type the generated documents use.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Method key -> operation, under one path template.
pub type PathOperations = BTreeMap<String, Operation>;

/// A complete OpenAPI-shaped document describing one flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenApiDocument {
    pub openapi: String,
    pub info: DocumentInfo,
    pub servers: Vec<ServerEntry>,
    #[serde(default)]
    pub paths: BTreeMap<String, PathOperations>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentInfo {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerEntry {
    pub url: String,
}

/// One HTTP operation under a path template.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub operation_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security: Option<Vec<BTreeMap<String, Vec<String>>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<ParameterObject>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,
    #[serde(default)]
    pub responses: BTreeMap<String, ResponseObject>,
}

/// A parameter of an operation. Note the two example slots: the encoder
/// writes the coerced example at the top level, while the decoder reads
/// `schema.example`. The stored format has always been asymmetric here
/// and both sides preserve that on purpose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterObject {
    pub name: String,
    #[serde(rename = "in")]
    pub location: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub description: String,
    pub schema: ParameterSchema,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSchema {
    #[serde(rename = "type")]
    pub schema_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    pub required: bool,
    pub content: MediaContent,
}

/// The `content` map of a request body or response, restricted to the
/// single JSON media type the flows use.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MediaContent {
    #[serde(
        rename = "application/json",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub json: Option<MediaTypeObject>,
}

impl MediaContent {
    pub fn json(schema: SchemaObject) -> Self {
        Self {
            json: Some(MediaTypeObject { schema }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaTypeObject {
    pub schema: SchemaObject,
}

/// An object schema: the body or response payload shape.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SchemaObject {
    #[serde(rename = "type", default)]
    pub schema_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, PropertySchema>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

impl SchemaObject {
    /// The bare `{"type": "object"}` schema used when no properties are
    /// configured.
    pub fn empty_object() -> Self {
        Self {
            schema_type: "object".to_string(),
            properties: None,
            required: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySchema {
    #[serde(rename = "type")]
    pub schema_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseObject {
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<MediaContent>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Components {
    #[serde(
        rename = "securitySchemes",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub security_schemes: Option<SecuritySchemes>,
}

/// The two security scheme entries the flows use. The stored value of a
/// credential is optional: the backend does not echo secrets back.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SecuritySchemes {
    #[serde(rename = "ApiKeyAuth", default, skip_serializing_if = "Option::is_none")]
    pub api_key_auth: Option<ApiKeyScheme>,
    #[serde(rename = "BearerAuth", default, skip_serializing_if = "Option::is_none")]
    pub bearer_auth: Option<BearerScheme>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiKeyScheme {
    #[serde(rename = "type")]
    pub scheme_type: String,
    #[serde(rename = "in")]
    pub location: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BearerScheme {
    #[serde(rename = "type")]
    pub scheme_type: String,
    pub scheme: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// The envelope the backend wraps a bulk flow listing in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowListing {
    pub code: ListingCode,
    pub data: ListingData,
    pub meta: ListingMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingCode {
    pub http: u16,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingData {
    pub flows: Vec<StoredFlow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingMeta {
    pub timestamp: String,
}

/// One flow as stored by the backend: listing metadata plus the
/// OpenAPI-shaped `paths` and `components` sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredFlow {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "urlBase", default)]
    pub url_base: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "active_default")]
    pub active: bool,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: String,
    #[serde(default)]
    pub paths: BTreeMap<String, PathOperations>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,
}

fn active_default() -> bool {
    true
}
