//! Core domain types: the note header codec and the wikilink scanner.

pub mod metadata;
pub mod wikilink;

pub use metadata::{HEADER_DELIMITER, NoteMetadata, decode, encode, serialize};
pub use wikilink::{extract_wikilinks, wikilink};
