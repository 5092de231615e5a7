//! Tests for the repository adapters.
mod common;
use common::*;
use keiro::error::RepositoryError;
use keiro::prelude::*;

#[test]
fn memory_repository_save_get_list_delete() {
    let mut repo = MemoryRepository::new();
    assert!(repo.list().expect("list").is_empty());

    repo.save(model("flow-1", "First")).expect("save");
    repo.save(model("flow-2", "Second")).expect("save");
    assert_eq!(repo.list().expect("list").len(), 2);

    let fetched = repo.get("flow-1").expect("get").expect("flow exists");
    assert_eq!(fetched.name, "First");
    assert!(repo.get("flow-9").expect("get").is_none());

    repo.delete("flow-1").expect("delete");
    assert_eq!(repo.list().expect("list").len(), 1);
}

#[test]
fn memory_repository_save_replaces_by_id() {
    let mut repo = MemoryRepository::new();
    repo.save(model("flow-1", "First")).expect("save");

    let mut updated = model("flow-1", "Renamed");
    updated.active = false;
    repo.save(updated).expect("save");

    let flows = repo.list().expect("list");
    assert_eq!(flows.len(), 1);
    assert_eq!(flows[0].name, "Renamed");
    assert!(!flows[0].active);
}

#[test]
fn memory_repository_delete_unknown_is_not_found() {
    let mut repo = MemoryRepository::new();
    let err = repo.delete("missing").expect_err("delete must fail");
    assert!(matches!(err, RepositoryError::NotFound(id) if id == "missing"));
}

#[test]
fn set_active_patches_only_the_flag() {
    let mut repo = MemoryRepository::new();
    repo.save(model("flow-1", "First")).expect("save");

    repo.set_active("flow-1", false).expect("set_active");
    let flow = repo.get("flow-1").expect("get").expect("flow exists");
    assert!(!flow.active);
    assert_eq!(flow.name, "First");
    assert_eq!(flow.updated_at, model("flow-1", "First").updated_at);

    let err = repo
        .set_active("missing", true)
        .expect_err("unknown id must fail");
    assert!(matches!(err, RepositoryError::NotFound(_)));
}

#[test]
fn json_file_repository_persists_across_instances() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = dir.path().join("flows.json");

    let mut repo = JsonFileRepository::new(&store);
    assert!(repo.list().expect("empty store reads as empty").is_empty());

    repo.save(model("flow-1", "First")).expect("save");
    repo.save(model("flow-2", "Second")).expect("save");

    // A fresh instance over the same file sees the same flows
    let reopened = JsonFileRepository::new(&store);
    let flows = reopened.list().expect("list");
    assert_eq!(flows.len(), 2);
    assert_eq!(flows[0].id, "flow-1");
    assert_eq!(flows[0].name, "First");
    assert_eq!(flows[0].endpoints.len(), 1);
}

#[test]
fn json_file_repository_delete_rewrites_the_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = dir.path().join("flows.json");

    let mut repo = JsonFileRepository::new(&store);
    repo.save(model("flow-1", "First")).expect("save");
    repo.delete("flow-1").expect("delete");
    assert!(repo.list().expect("list").is_empty());

    let err = repo.delete("flow-1").expect_err("second delete fails");
    assert!(matches!(err, RepositoryError::NotFound(_)));
}

#[test]
fn json_file_repository_reports_corruption() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = dir.path().join("flows.json");
    std::fs::write(&store, "not json at all").expect("write");

    let repo = JsonFileRepository::new(&store);
    let err = repo.list().expect_err("corrupted store must fail");
    assert!(matches!(err, RepositoryError::Corrupted(_)));
}

#[test]
fn json_file_repository_treats_blank_file_as_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = dir.path().join("flows.json");
    std::fs::write(&store, "  \n").expect("write");

    let repo = JsonFileRepository::new(&store);
    assert!(repo.list().expect("list").is_empty());
}
