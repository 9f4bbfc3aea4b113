//! Notice board domain model.
//!
//! # Responsibility
//! - Define the persistent `Notice` shape and the read-only author shape.
//! - Define `NoticeRecord`, the plain carrier used across the service
//!   boundary so callers never hold a row bound to a live connection.
//!
//! # Invariants
//! - Every persisted notice is identified by a store-assigned `NoticeSeq`.
//! - Deletion is a hard delete; no tombstones are kept.

pub mod notice;
pub mod record;
pub mod user;
