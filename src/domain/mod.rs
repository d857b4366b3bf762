//! Domain types for notes.

mod note;

pub use note::{Note, NoteBuilder};
