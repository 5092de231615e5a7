//! The three step validation gates, as pure functions over a draft.
//!
//! The general gate reports everything wrong with its two fields at once;
//! the endpoint and response gates stop at the first violation so the
//! user gets one concrete, actionable message.

use crate::error::ValidationError;
use crate::flow::{FlowDraft, ParamLocation};
use crate::schema::path::extract_path_params;
use regex::Regex;
use std::sync::LazyLock;

static BASE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://.+").expect("base URL pattern is valid"));

/// Gate for the General step: name present, base URL present and shaped
/// like an absolute http(s) origin.
pub fn validate_general(draft: &FlowDraft) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if draft.name.as_deref().is_none_or(|name| name.trim().is_empty()) {
        errors.push(ValidationError::NameRequired);
    }

    match draft.base_url.as_deref().map(str::trim) {
        None | Some("") => errors.push(ValidationError::BaseUrlRequired),
        Some(url) if !BASE_URL.is_match(url) => errors.push(ValidationError::BaseUrlInvalid),
        Some(_) => {}
    }

    errors
}

/// Gate for the Endpoints step, fail-fast: at least one endpoint, every
/// endpoint has a path, every `{param}` token has a described path
/// parameter, and every body property of a POST/PUT endpoint is fully
/// filled in.
pub fn validate_endpoints(draft: &FlowDraft) -> Vec<ValidationError> {
    if draft.endpoints.is_empty() {
        return vec![ValidationError::NoEndpoints];
    }

    for endpoint in &draft.endpoints {
        if endpoint.path.trim().is_empty() {
            return vec![ValidationError::EndpointPathRequired];
        }

        for param_name in extract_path_params(&endpoint.path) {
            let described = endpoint.parameters.iter().any(|p| {
                p.name == param_name
                    && p.location == ParamLocation::Path
                    && !p.description.trim().is_empty()
            });
            if !described {
                return vec![ValidationError::PathParamDescriptionRequired {
                    param: param_name,
                    path: endpoint.path.clone(),
                }];
            }
        }

        if endpoint.method.allows_body() {
            for prop in &endpoint.body_properties {
                if prop.name.trim().is_empty() {
                    return vec![ValidationError::BodyPropertyNameRequired {
                        path: endpoint.path.clone(),
                    }];
                }
                if prop.description.trim().is_empty() {
                    return vec![ValidationError::BodyPropertyDescriptionRequired {
                        name: prop.name.clone(),
                        path: endpoint.path.clone(),
                    }];
                }
                if prop.example.trim().is_empty() {
                    return vec![ValidationError::BodyPropertyExampleRequired {
                        name: prop.name.clone(),
                        path: endpoint.path.clone(),
                    }];
                }
            }
        }
    }

    Vec::new()
}

/// Gate for the Responses step, fail-fast. Responses are optional, but
/// every configured one needs a description and every response property
/// needs a name.
pub fn validate_responses(draft: &FlowDraft) -> Vec<ValidationError> {
    for endpoint in &draft.endpoints {
        for response in &endpoint.responses {
            if response.description.trim().is_empty() {
                return vec![ValidationError::ResponseDescriptionRequired {
                    status: response.status_code.clone(),
                    path: endpoint.path.clone(),
                }];
            }
            for prop in &response.properties {
                if prop.name.trim().is_empty() {
                    return vec![ValidationError::ResponsePropertyNameRequired {
                        status: response.status_code.clone(),
                        path: endpoint.path.clone(),
                    }];
                }
            }
        }
    }

    Vec::new()
}
