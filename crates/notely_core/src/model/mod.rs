//! Domain model for Notely core.

pub mod note;
