use notely_core::db::open_db_in_memory;
use notely_core::{NoteService, NoteServiceError, SqliteNoteRepository};

#[test]
fn create_note_returns_persisted_read_back() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    let created = service.create_note("groceries", "milk, eggs").unwrap();
    assert!(created.id > 0);
    assert_eq!(created.title, "groceries");
    assert_eq!(created.content, "milk, eggs");

    let listed = service.list_notes().unwrap();
    assert_eq!(listed, vec![created]);
}

#[test]
fn update_note_returns_new_record_and_keeps_id() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    let created = service.create_note("draft", "v1").unwrap();
    let updated = service.update_note(created.id, "final", "v2").unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "final");
    assert_eq!(updated.content, "v2");
}

#[test]
fn update_missing_note_maps_to_note_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    let err = service.update_note(42, "x", "y").unwrap_err();
    assert!(matches!(err, NoteServiceError::NoteNotFound(42)));
}

#[test]
fn delete_note_then_list_is_empty() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    let created = service.create_note("temp", "body").unwrap();
    service.delete_note(created.id).unwrap();

    assert!(service.list_notes().unwrap().is_empty());
    assert!(service.get_note(created.id).unwrap().is_none());
}

#[test]
fn delete_missing_note_maps_to_note_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    let err = service.delete_note(42).unwrap_err();
    assert!(matches!(err, NoteServiceError::NoteNotFound(42)));
}

#[test]
fn service_accepts_empty_fields() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    let created = service.create_note("", "").unwrap();
    assert_eq!(created.title, "");
    assert_eq!(created.content, "");
}
