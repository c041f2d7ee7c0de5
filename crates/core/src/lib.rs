//! Domain types shared by the movie API crates.
//!
//! Holds the [`movie::Movie`] entity, request validation, and the
//! [`storage::MovieStorage`] port that persistence adapters implement.
//! Nothing in this crate performs I/O.

pub mod error;
pub mod movie;
pub mod storage;
pub mod types;
