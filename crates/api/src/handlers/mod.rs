//! Request handlers.
//!
//! Handlers decode and validate input, delegate to the storage port held in
//! [`crate::state::AppState`], and map failures via [`crate::error::AppError`].

pub mod movies;
