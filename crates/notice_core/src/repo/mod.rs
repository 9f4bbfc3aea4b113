//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the notice data access contract.
//! - Own every SQL statement issued against the notice schema.
//! - Provide the transaction boundary services compose calls inside.
//!
//! # Invariants
//! - Repository writes must enforce `Notice::validate()` before persistence.
//! - Repository APIs return semantic errors (`NotFound`, `Constraint`) in
//!   addition to DB transport errors.

pub mod notice_repo;
pub mod notice_store;
