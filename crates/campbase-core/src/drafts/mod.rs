//! Local storage for in-progress event drafts.
//!
//! Drafts are kept as pretty-printed JSON, one file per draft, named after
//! a slug of the event name. Each file records when it was last saved.

pub mod store;

pub use store::{slugify, DraftEntry, DraftStore, StoredDraft};
