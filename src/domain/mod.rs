//! Shared data model layer (structs only).
//!
//! ## Purpose
//! - Keep record/DTO structs in one place.
//! - Avoid cyclic imports and duplicated type definitions.
//! - Make persisted/JSON output schema changes explicit and reviewable.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! `Hotel` field names are the on-disk schema. Renaming a field silently
//! orphans previously persisted listings, so keep serde names stable.

pub mod models;
