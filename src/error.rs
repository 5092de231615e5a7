use thiserror::Error;

/// Errors raised by the step validation gates while editing a flow draft.
///
/// Every variant names the offending entity so the message can be shown
/// next to the input that caused it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("flow name is required")]
    NameRequired,

    #[error("base URL is required")]
    BaseUrlRequired,

    #[error("base URL must start with http:// or https://")]
    BaseUrlInvalid,

    #[error("add at least one endpoint")]
    NoEndpoints,

    #[error("every endpoint needs a path")]
    EndpointPathRequired,

    #[error("path parameter \"{{{param}}}\" in \"{path}\" needs a description")]
    PathParamDescriptionRequired { param: String, path: String },

    #[error("a body property in \"{path}\" needs a name")]
    BodyPropertyNameRequired { path: String },

    #[error("body property \"{name}\" in \"{path}\" needs a description")]
    BodyPropertyDescriptionRequired { name: String, path: String },

    #[error("body property \"{name}\" in \"{path}\" needs an example")]
    BodyPropertyExampleRequired { name: String, path: String },

    #[error("response {status} in \"{path}\" needs a description")]
    ResponseDescriptionRequired { status: String, path: String },

    #[error("a property of response {status} in \"{path}\" needs a name")]
    ResponsePropertyNameRequired { status: String, path: String },
}

/// The editor field a validation error should be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationField {
    Name,
    BaseUrl,
    Endpoints,
    Responses,
}

impl ValidationError {
    /// Maps the error to the input field it belongs to.
    pub fn field(&self) -> ValidationField {
        match self {
            ValidationError::NameRequired => ValidationField::Name,
            ValidationError::BaseUrlRequired | ValidationError::BaseUrlInvalid => {
                ValidationField::BaseUrl
            }
            ValidationError::NoEndpoints
            | ValidationError::EndpointPathRequired
            | ValidationError::PathParamDescriptionRequired { .. }
            | ValidationError::BodyPropertyNameRequired { .. }
            | ValidationError::BodyPropertyDescriptionRequired { .. }
            | ValidationError::BodyPropertyExampleRequired { .. } => ValidationField::Endpoints,
            ValidationError::ResponseDescriptionRequired { .. }
            | ValidationError::ResponsePropertyNameRequired { .. } => ValidationField::Responses,
        }
    }
}

/// Errors that can occur while reading or writing a flow store.
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("flow '{0}' was not found")]
    NotFound(String),

    #[error("failed to access the flow store: {0}")]
    Io(#[from] std::io::Error),

    #[error("the flow store is corrupted: {0}")]
    Corrupted(#[from] serde_json::Error),
}

/// Errors returned when committing a flow draft through the editor.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("draft failed validation: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
