//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `notely_core` linkage.
//! - Drive note CRUD against a database file for local sanity checks and
//!   schema provisioning (`init`).
//! - Keep output deterministic for quick inspection.

use notely_core::db::open_db;
use notely_core::db::schema::provision_schema;
use notely_core::{NoteId, NoteService, SqliteNoteRepository};
use rusqlite::Connection;
use std::process::ExitCode;

const USAGE: &str = "usage:
  notely_cli                                  core linkage probe
  notely_cli init <db>                        provision the notes schema
  notely_cli list <db>                        list all notes
  notely_cli add <db> <title> <content>       create one note
  notely_cli update <db> <id> <title> <content>
  notely_cli delete <db> <id>";

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() {
        // Keep a tiny probe to validate core crate wiring independently from
        // the shell/FFI runtime setup.
        println!("notely_core ping={}", notely_core::ping());
        println!("notely_core version={}", notely_core::core_version());
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let command = args[0].as_str();
    match (command, &args[1..]) {
        ("init", [db]) => {
            let conn = Connection::open(db).map_err(|err| format!("init failed: {err}"))?;
            provision_schema(&conn).map_err(|err| format!("init failed: {err}"))?;
            println!("schema ready at {db}");
            Ok(())
        }
        ("list", [db]) => with_service(db, |service| {
            let notes = service.list_notes().map_err(|err| err.to_string())?;
            for note in &notes {
                println!("{}\t{}\t{}", note.id, note.title, note.content);
            }
            println!("{} note(s)", notes.len());
            Ok(())
        }),
        ("add", [db, title, content]) => with_service(db, |service| {
            let note = service
                .create_note(title.as_str(), content.as_str())
                .map_err(|err| err.to_string())?;
            println!("created note {}", note.id);
            Ok(())
        }),
        ("update", [db, id, title, content]) => {
            let id = parse_id(id)?;
            with_service(db, |service| {
                let note = service
                    .update_note(id, title.as_str(), content.as_str())
                    .map_err(|err| err.to_string())?;
                println!("updated note {}", note.id);
                Ok(())
            })
        }
        ("delete", [db, id]) => {
            let id = parse_id(id)?;
            with_service(db, |service| {
                service.delete_note(id).map_err(|err| err.to_string())?;
                println!("deleted note {id}");
                Ok(())
            })
        }
        _ => Err(USAGE.to_string()),
    }
}

fn with_service(
    db: &str,
    f: impl FnOnce(&NoteService<SqliteNoteRepository<'_>>) -> Result<(), String>,
) -> Result<(), String> {
    let conn = open_db(db).map_err(|err| format!("db open failed: {err}"))?;
    let service = NoteService::new(SqliteNoteRepository::new(&conn));
    f(&service)
}

fn parse_id(value: &str) -> Result<NoteId, String> {
    value
        .parse::<NoteId>()
        .map_err(|_| format!("invalid note id `{value}`"))
}
