//! Bridge API for shell-facing CRUD calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level note operations to the presentation shell.
//! - Own the single process-wide storage handle for the shell process.
//! - Keep error semantics renderable: every call returns an envelope with
//!   `ok` and a human-readable message instead of throwing.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - The storage handle is opened once per process and serializes access
//!   through a mutex, so overlapping shell submissions cannot interleave
//!   statements.
//! - Failures are surfaced in the response envelope, never swallowed.

use log::{error, info};
use notely_core::db::open_db;
use notely_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Note, NoteService, SqliteNoteRepository,
};
use rusqlite::Connection;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, OnceLock};

const STORE_DB_FILE_NAME: &str = "notely.sqlite3";
static STORE: OnceLock<StoreState> = OnceLock::new();

struct StoreState {
    path: PathBuf,
    conn: Mutex<Connection>,
}

/// Minimal health-check API for shell smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Opens the process-wide note store.
///
/// Input semantics:
/// - `db_path`: database file path. When empty, falls back to the
///   `NOTELY_DB_PATH` environment variable, then to a file in the system
///   temp directory.
/// - The schema must already be provisioned; opening never creates tables.
///
/// # FFI contract
/// - Sync call; opens the SQLite connection held for the process lifetime.
/// - Idempotent for the same path; re-opening with a different path fails.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn store_open(db_path: String) -> String {
    let resolved = resolve_store_db_path(db_path.as_str());

    if let Some(state) = STORE.get() {
        if state.path == resolved {
            return String::new();
        }
        return format!(
            "store already open at `{}`; refusing to switch to `{}`",
            state.path.display(),
            resolved.display()
        );
    }

    let conn = match open_db(&resolved) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=store_open module=ffi status=error path={} error={}",
                resolved.display(),
                err
            );
            return format!("store open failed: {err}");
        }
    };

    let state = StoreState {
        path: resolved.clone(),
        conn: Mutex::new(conn),
    };
    if STORE.set(state).is_err() {
        // Lost an open race; keep whichever handle landed first.
        if let Some(existing) = STORE.get() {
            if existing.path != resolved {
                return format!(
                    "store already open at `{}`; refusing to switch to `{}`",
                    existing.path.display(),
                    resolved.display()
                );
            }
        }
    }

    info!(
        "event=store_open module=ffi status=ok path={}",
        resolved.display()
    );
    String::new()
}

/// Note payload item crossing the bridge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteItem {
    /// Stable storage-assigned id.
    pub id: i64,
    /// User-supplied title, possibly empty.
    pub title: String,
    /// User-supplied body text, possibly empty.
    pub content: String,
}

/// Response envelope for the list call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteListResponse {
    /// Whether the list query succeeded.
    pub ok: bool,
    /// Notes in insertion order (empty on failure).
    pub items: Vec<NoteItem>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

/// Generic action response envelope for mutating calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Affected note id, when known.
    pub note_id: Option<i64>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl NoteActionResponse {
    fn success(message: impl Into<String>, note_id: i64) -> Self {
        Self {
            ok: true,
            note_id: Some(note_id),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            note_id: None,
            message: message.into(),
        }
    }
}

/// Returns all notes for the shell list view.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - Returns items in insertion order.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_get_all() -> NoteListResponse {
    match with_note_service(|service| service.list_notes().map_err(|err| err.to_string())) {
        Ok(notes) => {
            let items = notes.into_iter().map(to_note_item).collect::<Vec<_>>();
            let message = format!("{} note(s).", items.len());
            NoteListResponse {
                ok: true,
                items,
                message,
            }
        }
        Err(err) => NoteListResponse {
            ok: false,
            items: Vec::new(),
            message: format!("notes_get_all failed: {err}"),
        },
    }
}

/// Creates a note from the shell form submission.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - Returns the created note id on success.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_add(title: String, content: String) -> NoteActionResponse {
    match with_note_service(|service| {
        service
            .create_note(title.clone(), content.clone())
            .map_err(|err| err.to_string())
    }) {
        Ok(note) => NoteActionResponse::success("Note created.", note.id),
        Err(err) => NoteActionResponse::failure(format!("notes_add failed: {err}")),
    }
}

/// Replaces title and content of one note.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - A missing target id is reported as a failure envelope, not ignored.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_update(id: i64, title: String, content: String) -> NoteActionResponse {
    match with_note_service(|service| {
        service
            .update_note(id, title.clone(), content.clone())
            .map_err(|err| err.to_string())
    }) {
        Ok(note) => NoteActionResponse::success("Note updated.", note.id),
        Err(err) => NoteActionResponse::failure(format!("notes_update failed: {err}")),
    }
}

/// Deletes one note permanently.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - A missing target id is reported as a failure envelope, not ignored.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_delete(id: i64) -> NoteActionResponse {
    match with_note_service(|service| service.delete_note(id).map_err(|err| err.to_string())) {
        Ok(()) => NoteActionResponse::success("Note deleted.", id),
        Err(err) => NoteActionResponse::failure(format!("notes_delete failed: {err}")),
    }
}

fn resolve_store_db_path(db_path: &str) -> PathBuf {
    let trimmed = db_path.trim();
    if !trimmed.is_empty() {
        return PathBuf::from(trimmed);
    }
    if let Ok(raw) = std::env::var("NOTELY_DB_PATH") {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }
    std::env::temp_dir().join(STORE_DB_FILE_NAME)
}

fn with_note_service<T>(
    f: impl FnOnce(&NoteService<SqliteNoteRepository<'_>>) -> Result<T, String>,
) -> Result<T, String> {
    let state = STORE
        .get()
        .ok_or_else(|| "store is not open; call store_open first".to_string())?;
    let conn = lock_store_conn(state);
    let service = NoteService::new(SqliteNoteRepository::new(&conn));
    f(&service)
}

fn lock_store_conn(state: &StoreState) -> MutexGuard<'_, Connection> {
    // A poisoned lock only means another shell call panicked mid-statement;
    // the connection itself is still usable.
    match state.conn.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn to_note_item(note: Note) -> NoteItem {
    NoteItem {
        id: note.id,
        title: note.title,
        content: note.content,
    }
}
