//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `storage.rs` — keyed JSON persistence under the data dir + mutation journal.
//! - `store.rs` — the in-memory hotel list and its mutation operations.
//! - `output.rs` — listing/lookup/result printing, JSON envelope or text rows.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod output;
pub mod storage;
pub mod store;
