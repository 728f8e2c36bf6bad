//! FFI surface for the Notely desktop shell.

pub mod api;
