//! Stored OpenAPI-shaped documents -> editable flow models.
//!
//! The inverse of [`crate::schema::encoder`], used when a backend listing
//! is loaded for editing. Input comes from a trusted backend, so nothing
//! is validated against the OpenAPI meta-schema: missing optional
//! sections decode as empty, never as errors. Every nested entity gets a
//! freshly generated id; only the top-level flow id is preserved.

use crate::flow::model::new_id;
use crate::flow::{
    AuthConfig, BodyProperty, Endpoint, FlowModel, HttpMethod, ParamLocation, ParamType, Parameter,
    ResponseDef, ResponseProperty,
};
use crate::schema::document::{Components, FlowListing, Operation, StoredFlow};
use crate::schema::value::stringify_example;

/// Decodes a full backend listing into editable flow models, one per
/// stored flow.
pub fn decode_listing(listing: FlowListing) -> Vec<FlowModel> {
    listing
        .data
        .flows
        .into_iter()
        .map(decode_stored_flow)
        .collect()
}

/// Reconstructs one editable flow from its stored form, with a fresh
/// endpoint for every (path, method) pair found. The backend only keeps
/// `updatedAt`, so both timestamps are taken from it.
pub fn decode_stored_flow(flow: StoredFlow) -> FlowModel {
    let auth = detect_auth(flow.components.as_ref());

    let mut endpoints = Vec::new();
    for (path, operations) in flow.paths {
        for (method_key, operation) in operations {
            // Methods outside the editable set (GET/POST/PUT/DELETE) have
            // no model representation and are dropped.
            let Some(method) = HttpMethod::from_wire_key(&method_key) else {
                continue;
            };
            endpoints.push(decode_endpoint(&path, method, operation));
        }
    }

    FlowModel {
        id: flow.id,
        name: flow.name,
        description: flow.description,
        base_url: flow.url_base,
        auth,
        active: flow.active,
        endpoints,
        created_at: flow.updated_at.clone(),
        updated_at: flow.updated_at,
    }
}

fn decode_endpoint(path: &str, method: HttpMethod, operation: Operation) -> Endpoint {
    let name = if operation.summary.is_empty() {
        path.to_string()
    } else {
        operation.summary.clone()
    };

    Endpoint {
        id: new_id(),
        name,
        description: operation.description.clone(),
        method,
        path: path.to_string(),
        parameters: decode_parameters(&operation),
        body_properties: decode_body_properties(&operation),
        responses: decode_responses(&operation),
    }
}

fn decode_parameters(operation: &Operation) -> Vec<Parameter> {
    let Some(parameters) = &operation.parameters else {
        return Vec::new();
    };

    parameters
        .iter()
        .map(|param| Parameter {
            id: new_id(),
            name: param.name.clone(),
            param_type: ParamType::from_wire(&param.schema.schema_type),
            required: param.required,
            description: param.description.clone(),
            // Read back from schema.example; the top-level example the
            // encoder writes is intentionally not consulted.
            example: param.schema.example.as_ref().map(stringify_example),
            location: if param.location == "path" {
                ParamLocation::Path
            } else {
                ParamLocation::Query
            },
        })
        .collect()
}

/// Rebuilds body properties from the request body schema. `required` is
/// computed by membership in the schema's own required list rather than
/// assumed, so a document whose convention diverged from the encoder's
/// always-required rule is taken at face value.
fn decode_body_properties(operation: &Operation) -> Vec<BodyProperty> {
    let Some(schema) = operation
        .request_body
        .as_ref()
        .and_then(|body| body.content.json.as_ref())
        .map(|media| &media.schema)
    else {
        return Vec::new();
    };
    let Some(properties) = &schema.properties else {
        return Vec::new();
    };
    let required = schema.required.as_deref().unwrap_or(&[]);

    properties
        .iter()
        .map(|(name, prop)| BodyProperty {
            id: new_id(),
            name: name.clone(),
            property_type: ParamType::from_wire(&prop.schema_type),
            description: prop.description.clone(),
            example: prop
                .example
                .as_ref()
                .map(stringify_example)
                .unwrap_or_default(),
            required: required.iter().any(|entry| entry == name),
        })
        .collect()
}

fn decode_responses(operation: &Operation) -> Vec<ResponseDef> {
    operation
        .responses
        .iter()
        .map(|(status_code, response)| {
            let properties = response
                .content
                .as_ref()
                .and_then(|content| content.json.as_ref())
                .and_then(|media| media.schema.properties.as_ref())
                .map(|props| {
                    props
                        .iter()
                        .map(|(name, prop)| ResponseProperty {
                            id: new_id(),
                            name: name.clone(),
                            property_type: ParamType::from_wire(&prop.schema_type),
                            description: prop.description.clone(),
                            example: prop
                                .example
                                .as_ref()
                                .map(stringify_example)
                                .unwrap_or_default(),
                        })
                        .collect()
                })
                .unwrap_or_default();

            ResponseDef {
                id: new_id(),
                status_code: status_code.clone(),
                description: response.description.clone(),
                properties,
            }
        })
        .collect()
}

/// Inspects `components.securitySchemes` and decodes the active auth
/// shape. An `ApiKeyAuth` entry wins over `BearerAuth`; absence of both
/// means no authentication. Secret values are not echoed back by the
/// backend, so they decode as empty strings.
fn detect_auth(components: Option<&Components>) -> AuthConfig {
    let Some(schemes) = components.and_then(|c| c.security_schemes.as_ref()) else {
        return AuthConfig::None;
    };

    if let Some(api_key) = &schemes.api_key_auth {
        return AuthConfig::ApiKey {
            api_key_name: api_key.name.clone(),
            api_key_value: api_key.value.clone().unwrap_or_default(),
        };
    }

    if let Some(bearer) = &schemes.bearer_auth {
        return AuthConfig::Bearer {
            bearer_token: bearer.value.clone().unwrap_or_default(),
        };
    }

    AuthConfig::None
}
