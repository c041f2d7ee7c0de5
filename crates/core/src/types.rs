/// Movie primary keys are PostgreSQL UUIDs. The nil UUID means "unset".
pub type MovieId = uuid::Uuid;
