//! Tests for the step-gated editor controller.
mod common;
use common::*;
use keiro::error::{EditorError, ValidationField};
use keiro::prelude::*;

fn editor() -> EditorController<MemoryRepository> {
    EditorController::new(MemoryRepository::new())
}

fn editor_with_valid_draft() -> EditorController<MemoryRepository> {
    let mut editor = editor();
    *editor.draft_mut() = draft_with(vec![endpoint(HttpMethod::Get, "/items")]);
    editor
}

#[test]
fn advance_blocks_on_empty_general_step() {
    let mut editor = editor();

    assert!(!editor.advance());
    assert_eq!(editor.step(), EditorStep::General);
    assert!(editor.errors().contains_key(&ValidationField::Name));
    assert!(editor.errors().contains_key(&ValidationField::BaseUrl));
}

#[test]
fn advance_rejects_a_malformed_base_url() {
    let mut editor = editor();
    editor.draft_mut().name = Some("Inventory".to_string());
    editor.draft_mut().base_url = Some("ftp://files.example".to_string());

    assert!(!editor.advance());
    let message = &editor.errors()[&ValidationField::BaseUrl];
    assert!(message.contains("http://"));
    // The name was fine, so only the URL is flagged
    assert!(!editor.errors().contains_key(&ValidationField::Name));
}

#[test]
fn leaving_general_strips_trailing_slashes() {
    let mut editor = editor_with_valid_draft();
    editor.draft_mut().base_url = Some("https://api.inventory.example///".to_string());

    assert!(editor.advance());
    assert_eq!(
        editor.draft().base_url.as_deref(),
        Some("https://api.inventory.example")
    );
    assert_eq!(editor.step(), EditorStep::Endpoints);
    assert!(editor.errors().is_empty());
}

#[test]
fn leaving_endpoints_adds_leading_slashes() {
    let mut editor = editor_with_valid_draft();
    editor.draft_mut().endpoints[0].path = "items".to_string();

    assert!(editor.advance()); // General
    assert!(editor.advance()); // Endpoints
    assert_eq!(editor.draft().endpoints[0].path, "/items");
    assert_eq!(editor.step(), EditorStep::Responses);
}

#[test]
fn endpoints_gate_requires_at_least_one_endpoint() {
    let mut editor = editor_with_valid_draft();
    editor.draft_mut().endpoints.clear();

    assert!(editor.advance());
    assert!(!editor.advance());
    assert_eq!(editor.step(), EditorStep::Endpoints);
    assert!(
        editor.errors()[&ValidationField::Endpoints].contains("at least one endpoint")
    );
}

#[test]
fn endpoints_gate_names_the_undescribed_path_parameter() {
    let mut editor = editor_with_valid_draft();
    editor.draft_mut().endpoints[0].path = "/orders/{orderId}".to_string();

    assert!(editor.advance());
    assert!(!editor.advance());

    let message = &editor.errors()[&ValidationField::Endpoints];
    assert!(message.contains("orderId"));
    assert!(message.contains("/orders/{orderId}"));
}

#[test]
fn endpoints_gate_accepts_a_described_path_parameter() {
    let mut editor = editor_with_valid_draft();
    let ep = &mut editor.draft_mut().endpoints[0];
    ep.path = "/orders/{orderId}".to_string();
    ep.parameters
        .push(path_param("orderId", ParamType::Integer, "Order id", None));

    assert!(editor.advance());
    assert!(editor.advance());
    assert_eq!(editor.step(), EditorStep::Responses);
}

#[test]
fn endpoints_gate_checks_body_properties() {
    let mut editor = editor_with_valid_draft();
    let mut ep = endpoint(HttpMethod::Post, "/items");
    ep.body_properties
        .push(body_prop("price", ParamType::Number, "Unit price", ""));
    editor.draft_mut().endpoints = vec![ep];

    assert!(editor.advance());
    assert!(!editor.advance());
    let message = &editor.errors()[&ValidationField::Endpoints];
    assert!(message.contains("price"));
    assert!(message.contains("example"));
}

#[test]
fn responses_gate_requires_descriptions() {
    let mut editor = editor_with_valid_draft();
    editor.draft_mut().endpoints[0]
        .responses
        .push(response("200", "", vec![]));

    assert!(editor.advance());
    assert!(editor.advance());
    assert!(!editor.advance());
    assert_eq!(editor.step(), EditorStep::Responses);
    let message = &editor.errors()[&ValidationField::Responses];
    assert!(message.contains("200"));
    assert!(message.contains("/items"));
}

#[test]
fn endpoint_with_no_responses_passes_trivially() {
    let mut editor = editor_with_valid_draft();
    assert!(editor.advance());
    assert!(editor.advance());
    assert!(editor.advance());
    assert_eq!(editor.step(), EditorStep::Preview);
}

#[test]
fn retreat_is_unconditional_with_a_floor() {
    let mut editor = editor_with_valid_draft();
    assert_eq!(editor.retreat(), EditorStep::General);
    assert_eq!(editor.retreat(), EditorStep::General);

    assert!(editor.advance());
    assert!(editor.advance());
    assert_eq!(editor.step(), EditorStep::Responses);
    assert_eq!(editor.retreat(), EditorStep::Endpoints);
}

#[test]
fn advance_at_preview_stays_at_preview() {
    let mut editor = editor_with_valid_draft();
    assert!(editor.advance());
    assert!(editor.advance());
    assert!(editor.advance());
    assert!(editor.advance());
    assert_eq!(editor.step(), EditorStep::Preview);
}

#[test]
fn preview_is_available_from_any_step() {
    let editor = editor_with_valid_draft();
    let document = editor.preview();
    assert_eq!(document.info.title, "Inventory");
    assert!(document.paths.contains_key("/items"));
}

#[test]
fn save_assigns_id_and_stamps_timestamps() {
    let mut editor = editor_with_valid_draft();

    let saved = editor.save().expect("save succeeds");
    assert!(!saved.id.is_empty());
    assert!(!saved.created_at.is_empty());
    assert_eq!(saved.created_at, saved.updated_at);
    assert_eq!(editor.draft().id.as_deref(), Some(saved.id.as_str()));

    let stored = editor.repository().list().expect("list");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, saved.id);
}

#[test]
fn resave_keeps_created_at_and_the_id() {
    let mut editor = editor_with_valid_draft();
    let first = editor.save().expect("first save");

    editor.draft_mut().name = Some("Inventory v2".to_string());
    let second = editor.save().expect("second save");

    assert_eq!(second.id, first.id);
    assert_eq!(second.created_at, first.created_at);

    let stored = editor.repository().list().expect("list");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "Inventory v2");
}

#[test]
fn save_revalidates_every_gate() {
    let mut editor = editor_with_valid_draft();
    // Walk to Preview, then sneak an invalid response in via back-navigation
    assert!(editor.advance());
    assert!(editor.advance());
    assert!(editor.advance());
    editor.draft_mut().endpoints[0]
        .responses
        .push(response("500", "", vec![]));

    let err = editor.save().expect_err("save must fail");
    assert!(matches!(err, EditorError::Validation(_)));
    assert!(editor.errors().contains_key(&ValidationField::Responses));
    assert!(editor.repository().list().expect("list").is_empty());
}

#[test]
fn save_on_an_empty_draft_reports_the_general_gate_first() {
    let mut editor = editor();
    let err = editor.save().expect_err("save must fail");
    match err {
        EditorError::Validation(validation) => {
            assert_eq!(validation.field(), ValidationField::Name);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn set_endpoint_method_clears_body_on_get() {
    let mut editor = editor_with_valid_draft();
    let mut ep = endpoint(HttpMethod::Post, "/items");
    ep.body_properties
        .push(body_prop("price", ParamType::Number, "Unit price", "9.99"));
    let id = ep.id.clone();
    editor.draft_mut().endpoints = vec![ep];

    assert!(editor.set_endpoint_method(&id, HttpMethod::Get));
    assert!(editor.draft().endpoints[0].body_properties.is_empty());
    assert!(!editor.set_endpoint_method("missing", HttpMethod::Get));
}

#[test]
fn add_and_remove_endpoints() {
    let mut editor = editor();
    let id = editor.add_endpoint().id.clone();
    assert_eq!(editor.draft().endpoints.len(), 1);
    assert_eq!(editor.draft().endpoints[0].method, HttpMethod::Get);

    assert!(editor.remove_endpoint(&id));
    assert!(editor.draft().endpoints.is_empty());
    assert!(!editor.remove_endpoint(&id));
}

#[test]
fn editing_an_existing_flow_prefills_the_draft() {
    let mut repository = MemoryRepository::new();
    repository.save(model("flow-1", "Inventory")).expect("seed");
    let stored = repository
        .get("flow-1")
        .expect("get")
        .expect("flow exists");

    let editor = EditorController::edit(repository, stored);
    assert_eq!(editor.draft().id.as_deref(), Some("flow-1"));
    assert_eq!(editor.draft().name.as_deref(), Some("Inventory"));
    assert_eq!(editor.step(), EditorStep::General);
}
