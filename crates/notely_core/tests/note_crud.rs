use notely_core::db::open_db_in_memory;
use notely_core::{Note, NoteDraft, NoteRepository, RepoError, SqliteNoteRepository};
use std::collections::HashSet;

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);

    let id = repo.create(&NoteDraft::new("first", "body")).unwrap();

    let loaded = repo.get(id).unwrap().unwrap();
    assert_eq!(loaded.id, id);
    assert_eq!(loaded.title, "first");
    assert_eq!(loaded.content, "body");
}

#[test]
fn create_accepts_empty_title_and_content() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);

    let id = repo.create(&NoteDraft::new("", "")).unwrap();

    let loaded = repo.get(id).unwrap().unwrap();
    assert_eq!(loaded.title, "");
    assert_eq!(loaded.content, "");
}

#[test]
fn create_assigns_fresh_unique_ids() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);

    let mut seen = HashSet::new();
    for index in 0..5 {
        let id = repo
            .create(&NoteDraft::new(format!("note {index}"), "body"))
            .unwrap();
        assert!(id > 0);
        assert!(seen.insert(id), "id {id} was reused");
    }
    assert_eq!(repo.count().unwrap(), 5);
}

#[test]
fn ids_are_not_reused_after_delete() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);

    let first = repo.create(&NoteDraft::new("a", "1")).unwrap();
    repo.delete(first).unwrap();
    let second = repo.create(&NoteDraft::new("b", "2")).unwrap();

    assert_ne!(first, second);
    assert!(second > first);
}

#[test]
fn list_all_returns_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);

    let id_a = repo.create(&NoteDraft::new("a", "1")).unwrap();
    let id_b = repo.create(&NoteDraft::new("b", "2")).unwrap();
    let id_c = repo.create(&NoteDraft::new("c", "3")).unwrap();

    let notes = repo.list_all().unwrap();
    let ids: Vec<_> = notes.iter().map(|note| note.id).collect();
    assert_eq!(ids, vec![id_a, id_b, id_c]);
}

#[test]
fn update_changes_only_the_targeted_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);

    let id_a = repo.create(&NoteDraft::new("a", "1")).unwrap();
    let id_b = repo.create(&NoteDraft::new("b", "2")).unwrap();

    repo.update(id_a, "a2", "1-updated").unwrap();

    let updated = repo.get(id_a).unwrap().unwrap();
    assert_eq!(updated.title, "a2");
    assert_eq!(updated.content, "1-updated");

    let untouched = repo.get(id_b).unwrap().unwrap();
    assert_eq!(untouched.title, "b");
    assert_eq!(untouched.content, "2");
}

#[test]
fn update_missing_id_reports_not_found_and_alters_nothing() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);

    let id = repo.create(&NoteDraft::new("keeper", "body")).unwrap();

    let err = repo.update(id + 100, "x", "y").unwrap_err();
    assert!(matches!(err, RepoError::NotFound(missing) if missing == id + 100));

    let notes = repo.list_all().unwrap();
    assert_eq!(
        notes,
        vec![Note {
            id,
            title: "keeper".to_string(),
            content: "body".to_string(),
        }]
    );
}

#[test]
fn delete_removes_the_row_permanently() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);

    let id = repo.create(&NoteDraft::new("gone soon", "body")).unwrap();
    repo.delete(id).unwrap();

    assert!(repo.get(id).unwrap().is_none());
    assert!(repo.list_all().unwrap().iter().all(|note| note.id != id));
}

#[test]
fn delete_missing_id_reports_not_found_and_alters_nothing() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);

    let id = repo.create(&NoteDraft::new("keeper", "body")).unwrap();

    let err = repo.delete(id + 100).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(missing) if missing == id + 100));
    assert_eq!(repo.count().unwrap(), 1);
}

#[test]
fn crud_scenario_create_update_delete() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);

    let id = repo.create(&NoteDraft::new("A", "B")).unwrap();
    assert_eq!(
        repo.list_all().unwrap(),
        vec![Note {
            id,
            title: "A".to_string(),
            content: "B".to_string(),
        }]
    );

    repo.update(id, "A2", "B2").unwrap();
    assert_eq!(
        repo.list_all().unwrap(),
        vec![Note {
            id,
            title: "A2".to_string(),
            content: "B2".to_string(),
        }]
    );

    repo.delete(id).unwrap();
    assert!(repo.list_all().unwrap().is_empty());
}

#[test]
fn note_serializes_with_stable_bridge_field_names() {
    let note = Note {
        id: 7,
        title: "title".to_string(),
        content: "content".to_string(),
    };

    let json = serde_json::to_value(&note).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["title"], "title");
    assert_eq!(json["content"], "content");
}
