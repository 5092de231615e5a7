//! FlowDraft -> OpenAPI-shaped document.
//!
//! [`encode_flow`] is a total function over arbitrarily incomplete input:
//! it is re-run on every edit to drive the live preview, so absent fields
//! degrade to documented placeholders instead of failing. The same
//! document doubles as the write payload sent to the backend.

use crate::flow::{AuthConfig, Endpoint, FlowDraft, ParamLocation, ParamType};
use crate::schema::document::{
    ApiKeyScheme, BearerScheme, Components, DocumentInfo, MediaContent, OPENAPI_VERSION,
    OpenApiDocument, Operation, ParameterObject, ParameterSchema, PropertySchema, RequestBody,
    ResponseObject, SchemaObject, SecuritySchemes, ServerEntry,
};
use crate::schema::path::{extract_path_params, normalize_path, operation_id};
use crate::schema::value::{coerce_example, optional_example};
use std::collections::BTreeMap;

/// Placeholder title used while the draft has no name yet.
pub const UNTITLED_API: &str = "Untitled API";

/// Placeholder server URL used while the draft has no base URL yet.
pub const PLACEHOLDER_SERVER: &str = "https://api.example.com";

/// Description of the default 200 response.
pub const DEFAULT_OK_DESCRIPTION: &str = "Successful response";

/// Converts a draft into a complete OpenAPI-shaped document. Endpoints
/// without a path are skipped; endpoints sharing a path are merged under
/// one paths entry, keyed by lowercase method.
pub fn encode_flow(draft: &FlowDraft) -> OpenApiDocument {
    let mut document = OpenApiDocument {
        openapi: OPENAPI_VERSION.to_string(),
        info: DocumentInfo {
            title: non_empty_or(draft.name.as_deref(), UNTITLED_API),
            description: draft.description.clone().unwrap_or_default(),
            version: "1.0.0".to_string(),
        },
        servers: vec![ServerEntry {
            url: non_empty_or(draft.base_url.as_deref(), PLACEHOLDER_SERVER),
        }],
        paths: BTreeMap::new(),
        components: Some(encode_components(&draft.auth)),
    };

    for endpoint in &draft.endpoints {
        if endpoint.path.is_empty() {
            continue;
        }
        let path_key = normalize_path(&endpoint.path);
        let operation = encode_operation(draft, endpoint, &path_key);
        document
            .paths
            .entry(path_key)
            .or_default()
            .insert(endpoint.method.as_wire_key().to_string(), operation);
    }

    document
}

fn encode_operation(draft: &FlowDraft, endpoint: &Endpoint, path_key: &str) -> Operation {
    let summary = if endpoint.name.is_empty() {
        draft.name.clone().unwrap_or_default()
    } else {
        endpoint.name.clone()
    };

    let mut operation = Operation {
        summary,
        description: endpoint.description.clone(),
        operation_id: operation_id(&endpoint.name, &endpoint.path),
        security: security_requirement(&draft.auth),
        parameters: None,
        request_body: None,
        responses: BTreeMap::new(),
    };

    let parameters = encode_parameters(endpoint, path_key);
    if !parameters.is_empty() {
        operation.parameters = Some(parameters);
    }

    if endpoint.method.allows_body() && !endpoint.body_properties.is_empty() {
        operation.request_body = Some(encode_request_body(endpoint));
    }

    operation.responses = encode_responses(endpoint);
    operation
}

/// Path parameters come first, one per `{name}` token in the template, and
/// are always required no matter what the stored flag says. Query
/// parameters follow with their own required flag honored as-is.
fn encode_parameters(endpoint: &Endpoint, path_key: &str) -> Vec<ParameterObject> {
    let mut parameters = Vec::new();

    for param_name in extract_path_params(path_key) {
        let defined = endpoint
            .parameters
            .iter()
            .find(|p| p.name == param_name && p.location == ParamLocation::Path);
        let param_type = defined.map(|p| p.param_type).unwrap_or(ParamType::String);

        parameters.push(ParameterObject {
            name: param_name.clone(),
            location: ParamLocation::Path.as_str().to_string(),
            required: true,
            description: match defined {
                Some(p) if !p.description.is_empty() => p.description.clone(),
                _ => format!("Path parameter: {param_name}"),
            },
            schema: ParameterSchema {
                schema_type: param_type.as_str().to_string(),
                example: None,
            },
            example: defined.and_then(|p| optional_example(param_type, p.example.as_deref())),
        });
    }

    for param in endpoint
        .parameters
        .iter()
        .filter(|p| p.location == ParamLocation::Query)
    {
        parameters.push(ParameterObject {
            name: param.name.clone(),
            location: ParamLocation::Query.as_str().to_string(),
            required: param.required,
            description: param.description.clone(),
            schema: ParameterSchema {
                schema_type: param.param_type.as_str().to_string(),
                example: None,
            },
            example: optional_example(param.param_type, param.example.as_deref()),
        });
    }

    parameters
}

/// Builds the JSON request body schema. Every body property is emitted
/// with a coerced example and listed in the schema's `required` array.
fn encode_request_body(endpoint: &Endpoint) -> RequestBody {
    let mut properties = BTreeMap::new();
    let mut required = Vec::new();

    for prop in &endpoint.body_properties {
        properties.insert(
            prop.name.clone(),
            PropertySchema {
                schema_type: prop.property_type.as_str().to_string(),
                description: prop.description.clone(),
                example: Some(coerce_example(prop.property_type, &prop.example)),
            },
        );
        required.push(prop.name.clone());
    }

    RequestBody {
        required: true,
        content: MediaContent::json(SchemaObject {
            schema_type: "object".to_string(),
            properties: Some(properties),
            required: Some(required),
        }),
    }
}

fn encode_responses(endpoint: &Endpoint) -> BTreeMap<String, ResponseObject> {
    let mut responses = BTreeMap::new();

    if endpoint.responses.is_empty() {
        return default_responses();
    }

    for response in &endpoint.responses {
        let content = if response.properties.is_empty() {
            MediaContent::json(SchemaObject::empty_object())
        } else {
            let mut properties = BTreeMap::new();
            for prop in &response.properties {
                properties.insert(
                    prop.name.clone(),
                    PropertySchema {
                        schema_type: prop.property_type.as_str().to_string(),
                        description: prop.description.clone(),
                        example: optional_example(prop.property_type, Some(&prop.example)),
                    },
                );
            }
            MediaContent::json(SchemaObject {
                schema_type: "object".to_string(),
                properties: Some(properties),
                required: None,
            })
        };

        responses.insert(
            response.status_code.clone(),
            ResponseObject {
                description: non_empty_or(Some(response.description.as_str()), "Response"),
                content: Some(content),
            },
        );
    }

    responses
}

/// The fallback response set for endpoints with nothing configured.
fn default_responses() -> BTreeMap<String, ResponseObject> {
    let mut responses = BTreeMap::new();
    responses.insert(
        "200".to_string(),
        ResponseObject {
            description: DEFAULT_OK_DESCRIPTION.to_string(),
            content: Some(MediaContent::json(SchemaObject::empty_object())),
        },
    );
    for (status, description) in [
        ("400", "Invalid request"),
        ("401", "Unauthorized"),
        ("500", "Server error"),
    ] {
        responses.insert(
            status.to_string(),
            ResponseObject {
                description: description.to_string(),
                content: None,
            },
        );
    }
    responses
}

fn encode_components(auth: &AuthConfig) -> Components {
    let security_schemes = match auth {
        AuthConfig::None => None,
        AuthConfig::ApiKey { api_key_name, .. } => Some(SecuritySchemes {
            api_key_auth: Some(ApiKeyScheme {
                scheme_type: "apiKey".to_string(),
                location: "header".to_string(),
                name: non_empty_or(Some(api_key_name.as_str()), "X-API-Key"),
                value: None,
            }),
            bearer_auth: None,
        }),
        AuthConfig::Bearer { .. } => Some(SecuritySchemes {
            api_key_auth: None,
            bearer_auth: Some(BearerScheme {
                scheme_type: "http".to_string(),
                scheme: "bearer".to_string(),
                value: None,
            }),
        }),
    };
    Components { security_schemes }
}

fn security_requirement(auth: &AuthConfig) -> Option<Vec<BTreeMap<String, Vec<String>>>> {
    let scheme = match auth {
        AuthConfig::None => return None,
        AuthConfig::ApiKey { .. } => "ApiKeyAuth",
        AuthConfig::Bearer { .. } => "BearerAuth",
    };
    let mut requirement = BTreeMap::new();
    requirement.insert(scheme.to_string(), Vec::new());
    Some(vec![requirement])
}

fn non_empty_or(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => fallback.to_string(),
    }
}
