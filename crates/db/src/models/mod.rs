//! Row structs mapped with `sqlx::FromRow`.

pub mod movie;
