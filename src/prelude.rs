//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and functions from the keiro
//! crate. Import this module to get access to the core functionality
//! without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use keiro::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Load a previously saved listing and rebuild editable flows
//! let listing_json = std::fs::read_to_string("path/to/listing.json")?;
//! let listing: FlowListing = serde_json::from_str(&listing_json)?;
//! let flows = decode_listing(listing);
//!
//! // Open the first flow for editing
//! let flow = flows.into_iter().next().ok_or("no flows stored")?;
//! let editor = EditorController::edit(MemoryRepository::new(), flow);
//! println!("{}", serde_json::to_string_pretty(&editor.preview())?);
//! # Ok(())
//! # }
//! ```

// Editing and the two schema transforms
pub use crate::editor::{EditorController, EditorStep};
pub use crate::schema::{decode_listing, decode_stored_flow, encode_flow, extract_path_params};

// Flow model types
pub use crate::flow::{
    AuthConfig, BodyProperty, Endpoint, FlowDraft, FlowModel, HttpMethod, ParamLocation,
    ParamType, Parameter, ResponseDef, ResponseProperty,
};

// Wire document types
pub use crate::schema::document::{FlowListing, OpenApiDocument, StoredFlow};

// Persistence
pub use crate::repository::{FlowRepository, JsonFileRepository, MemoryRepository};

// Error types
pub use crate::error::{EditorError, RepositoryError, ValidationError, ValidationField};

// Standard library re-exports commonly used with this crate
pub use std::collections::BTreeMap;
pub use std::path::Path;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
