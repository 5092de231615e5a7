//! Common test utilities for building flow drafts, models and documents.
use keiro::prelude::*;

/// Creates a valid draft around the given endpoints.
#[allow(dead_code)]
pub fn draft_with(endpoints: Vec<Endpoint>) -> FlowDraft {
    let mut draft = FlowDraft::new();
    draft.name = Some("Inventory".to_string());
    draft.description = Some("Inventory integration".to_string());
    draft.base_url = Some("https://api.inventory.example".to_string());
    draft.endpoints = endpoints;
    draft
}

#[allow(dead_code)]
pub fn endpoint(method: HttpMethod, path: &str) -> Endpoint {
    let mut ep = Endpoint::new();
    ep.set_method(method);
    ep.path = path.to_string();
    ep
}

#[allow(dead_code)]
pub fn path_param(
    name: &str,
    param_type: ParamType,
    description: &str,
    example: Option<&str>,
) -> Parameter {
    let mut param = Parameter::new(name, ParamLocation::Path);
    param.param_type = param_type;
    param.description = description.to_string();
    param.example = example.map(str::to_string);
    param
}

#[allow(dead_code)]
pub fn query_param(
    name: &str,
    param_type: ParamType,
    required: bool,
    description: &str,
    example: Option<&str>,
) -> Parameter {
    let mut param = Parameter::new(name, ParamLocation::Query);
    param.param_type = param_type;
    param.required = required;
    param.description = description.to_string();
    param.example = example.map(str::to_string);
    param
}

#[allow(dead_code)]
pub fn body_prop(name: &str, param_type: ParamType, description: &str, example: &str) -> BodyProperty {
    let mut prop = BodyProperty::new(name);
    prop.property_type = param_type;
    prop.description = description.to_string();
    prop.example = example.to_string();
    prop
}

#[allow(dead_code)]
pub fn response_prop(
    name: &str,
    param_type: ParamType,
    description: &str,
    example: &str,
) -> ResponseProperty {
    let mut prop = ResponseProperty::new(name);
    prop.property_type = param_type;
    prop.description = description.to_string();
    prop.example = example.to_string();
    prop
}

#[allow(dead_code)]
pub fn response(status: &str, description: &str, properties: Vec<ResponseProperty>) -> ResponseDef {
    let mut resp = ResponseDef::new(status);
    resp.description = description.to_string();
    resp.properties = properties;
    resp
}

/// Wraps an encoded document the way the backend stores it, so the
/// decoder can be fed the encoder's own output.
#[allow(dead_code)]
pub fn stored_flow_from(document: OpenApiDocument, id: &str, name: &str, url: &str) -> StoredFlow {
    StoredFlow {
        id: id.to_string(),
        name: name.to_string(),
        url_base: url.to_string(),
        description: document.info.description.clone(),
        active: true,
        updated_at: "2026-01-10T12:00:00.000Z".to_string(),
        paths: document.paths,
        components: document.components,
    }
}

/// A minimal persisted flow for repository tests.
#[allow(dead_code)]
pub fn model(id: &str, name: &str) -> FlowModel {
    FlowModel {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        base_url: "https://api.inventory.example".to_string(),
        auth: AuthConfig::None,
        active: true,
        endpoints: vec![endpoint(HttpMethod::Get, "/items")],
        created_at: "2026-01-10T12:00:00.000Z".to_string(),
        updated_at: "2026-01-10T12:00:00.000Z".to_string(),
    }
}
