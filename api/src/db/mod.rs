//! # Database module — PostgreSQL connection pool management
//!
//! Shared PostgreSQL connection pool used by every server function in the
//! `api` crate. Entirely gated behind `#[cfg(feature = "server")]` so client
//! (WASM) builds never pull in SQLx or Tokio networking code.
//!
//! The pool is a lazy, process-wide singleton backed by a
//! [`tokio::sync::OnceCell`]: the first call to [`get_pool`] reads
//! `DATABASE_URL` from the environment (via `dotenvy`), opens a pool with up
//! to 5 connections, and caches it for all subsequent callers.

#[cfg(feature = "server")]
mod pool;

#[cfg(feature = "server")]
pub use pool::get_pool;
