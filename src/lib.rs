//! # Keiro - Flow Schema Engine
//!
//! **Keiro** is a bidirectional schema engine for conversational-agent
//! integration "flows": an editable model of an outbound API integration
//! (base URL, auth, endpoints), a deterministic generator that turns that
//! model into an OpenAPI-shaped document, the inverse transform that
//! rebuilds editable models from stored documents, and a step-gated
//! editor that keeps a draft valid as it is built up.
//!
//! ## Core Workflow
//!
//! 1.  **Decode**: fetch a stored listing from your backend, parse it into
//!     [`schema::document::FlowListing`], and run
//!     [`schema::decode_listing`] to get editable [`flow::FlowModel`]s.
//! 2.  **Edit**: open one flow (or a blank draft) in an
//!     [`editor::EditorController`], which walks the draft through its
//!     General, Endpoints, Responses and Preview steps. Each forward move
//!     runs that step's validation gate; backward moves are always free.
//! 3.  **Preview**: at any point, [`editor::EditorController::preview`]
//!     encodes the draft into the OpenAPI-shaped document. The encoder is
//!     total over partial input, so it can run on every keystroke.
//! 4.  **Save**: committing re-runs every gate, stamps identifiers and
//!     timestamps, and hands the flow to the injected
//!     [`repository::FlowRepository`] adapter.
//!
//! ## Quick Start
//!
//! ```rust
//! use keiro::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut editor = EditorController::new(MemoryRepository::new());
//!
//!     // General step: metadata. The trailing slash is stripped on advance.
//!     let draft = editor.draft_mut();
//!     draft.name = Some("Order service".to_string());
//!     draft.base_url = Some("https://api.orders.example/".to_string());
//!
//!     // Endpoints step: one GET with a described path parameter.
//!     let endpoint = editor.add_endpoint();
//!     endpoint.path = "/orders/{orderId}".to_string();
//!     let mut param = Parameter::new("orderId", ParamLocation::Path);
//!     param.param_type = ParamType::Integer;
//!     param.description = "Order identifier".to_string();
//!     param.example = Some("42".to_string());
//!     endpoint.parameters.push(param);
//!
//!     assert!(editor.advance()); // General -> Endpoints
//!     assert!(editor.advance()); // Endpoints -> Responses
//!     assert!(editor.advance()); // Responses -> Preview
//!
//!     // The live preview is the document that would be persisted.
//!     let document = editor.preview();
//!     assert_eq!(document.openapi, "3.0.3");
//!     assert!(document.paths.contains_key("/orders/{orderId}"));
//!
//!     let saved = editor.save()?;
//!     assert!(!saved.id.is_empty());
//!     Ok(())
//! }
//! ```

pub mod editor;
pub mod error;
pub mod flow;
pub mod prelude;
pub mod repository;
pub mod schema;
